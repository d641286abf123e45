//! 画像アセット（ターミナル描画用のテキストアート）
//!
//! 決まったディレクトリから読み込む:
//! - `bg.txt` … 背景（タイトルバナー）
//! - `1.txt`, `2.txt`, `3.txt` … AIの手 (Rock / Paper / Scissors)

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::game::Move;

#[derive(Debug, Clone)]
pub struct Assets {
    pub background: String,
    gestures: [String; 3],
}

impl Assets {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let background = read_asset(dir.join("bg.txt"))?;
        let gestures = [
            read_asset(gesture_path(dir, Move::Rock))?,
            read_asset(gesture_path(dir, Move::Paper))?,
            read_asset(gesture_path(dir, Move::Scissors))?,
        ];
        info!(target: "app", dir = %dir.display(), "assets loaded");
        Ok(Self { background, gestures })
    }

    pub fn gesture(&self, mv: Move) -> &str {
        &self.gestures[usize::from(mv.code() - 1)]
    }
}

/// 手のアセットのパス (`<dir>/<code>.txt`)
pub fn gesture_path(dir: &Path, mv: Move) -> PathBuf {
    dir.join(format!("{}.txt", mv.code()))
}

fn read_asset(path: PathBuf) -> Result<String> {
    fs::read_to_string(&path).wrap_err_with(|| format!("failed to load asset {}", path.display()))
}
