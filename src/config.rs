//! アプリケーション設定と定数
//!
//! 環境変数（`.env` も可）で上書きできる。未設定のものはデフォルト値。

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};

/// カウントダウン秒数のデフォルト
pub const DEFAULT_COUNTDOWN_SECS: u64 = 3;

/// アセットディレクトリのデフォルト
pub const DEFAULT_ASSETS_DIR: &str = "resources";

/// 使用する検出器の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectorSource {
    /// 数字キーで指の本数を指定
    Keyboard,
    /// 外部トラッカーをシェルコマンドで起動
    Command(String),
    /// 記録済みのランドマークファイル
    File(PathBuf),
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// 画像アセットの置き場所
    pub assets_dir: PathBuf,
    /// ラウンド開始から判定までの秒数
    pub countdown_secs: u64,
    /// イベントポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
    pub detector: DetectorSource,
    /// トラッカーの左右ラベルを反転する
    pub flip: bool,
    /// 1 フレームで扱う手の最大数
    pub max_hands: usize,
    /// AIの手の乱数シード（None ならエントロピーから）
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            poll_interval_ms: 30,
            detector: DetectorSource::Keyboard,
            flip: false,
            max_hands: 1,
            seed: None,
        }
    }
}

impl Config {
    /// 新しい設定インスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 環境変数から設定を読む
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー→値関数から設定を読む（テストで環境変数を汚さないため）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut c = Self::default();

        if let Some(dir) = lookup("JANKEN_ASSETS_DIR") {
            c.assets_dir = PathBuf::from(dir);
        }
        if let Some(v) = parse_var(&lookup, "JANKEN_COUNTDOWN_SECS")? {
            c.countdown_secs = v;
        }
        if let Some(v) = parse_var(&lookup, "JANKEN_POLL_INTERVAL_MS")? {
            c.poll_interval_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "JANKEN_FLIP")? {
            c.flip = v;
        }
        if let Some(v) = parse_var::<usize, _>(&lookup, "JANKEN_MAX_HANDS")? {
            if v == 0 {
                return Err(eyre!("JANKEN_MAX_HANDS must be at least 1"));
            }
            c.max_hands = v;
        }
        c.seed = parse_var(&lookup, "JANKEN_SEED")?;

        c.detector = match lookup("JANKEN_DETECTOR").as_deref().map(str::trim) {
            None | Some("") | Some("keyboard") => DetectorSource::Keyboard,
            Some("feed") => {
                if let Some(cmd) = lookup("JANKEN_FEED_COMMAND") {
                    DetectorSource::Command(cmd)
                } else if let Some(path) = lookup("JANKEN_FEED_FILE") {
                    DetectorSource::File(PathBuf::from(path))
                } else {
                    return Err(eyre!(
                        "JANKEN_DETECTOR=feed requires JANKEN_FEED_COMMAND or JANKEN_FEED_FILE"
                    ));
                }
            }
            Some(other) => return Err(eyre!("unknown JANKEN_DETECTOR: {other}")),
        };

        Ok(c)
    }

    pub fn countdown(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .wrap_err_with(|| format!("invalid value for {key}: {raw:?}")),
    }
}
