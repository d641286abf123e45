//! 記録済みランドマークファイルの再生
//!
//! トラッカーの出力 (JSON Lines) を保存したファイルを読み込み、
//! `detect()` 1 回につき 1 フレームずつ返す。最後まで進んだら先頭に戻る。

use std::fs;
use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{info, warn};

use super::detector::HandDetector;
use super::feed::parse_line;
use super::hand::Hand;

pub struct Recording {
    frames: Vec<Vec<Hand>>,
    cursor: usize,
}

impl Recording {
    pub fn open<P: AsRef<Path>>(path: P, flip: bool) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to open landmark recording {}", path.display()))?;

        let mut frames = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(Some(frame)) => {
                    let mut hands = frame.hands;
                    if flip {
                        hands.iter_mut().for_each(Hand::flip_side);
                    }
                    frames.push(hands);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(target: "detector", line = lineno + 1, error = %e, "skipping landmark frame");
                }
            }
        }
        if frames.is_empty() {
            return Err(eyre!("no landmark frames in {}", path.display()));
        }

        info!(target: "detector", path = %path.display(), frames = frames.len(), "landmark recording loaded");
        Ok(Self { frames, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// 次に返すフレームの番号
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl HandDetector for Recording {
    fn detect(&mut self) -> Result<Vec<Hand>> {
        let hands = self.frames[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        Ok(hands)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
