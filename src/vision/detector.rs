//! ハンド検出器の抽象化
//!
//! 実際のランドマーク検出は外部のトラッカーに任せる。ゲーム側は
//! 「最新フレームで検出された手」を受け取るだけ。

use color_eyre::Result;

use super::feed::FeedDetector;
use super::hand::Hand;
use super::recording::Recording;
use super::simulated::KeyboardHand;

/// 各検出器が実装すべきトレイト
pub trait HandDetector {
    /// 最新フレームで検出された手を返す
    fn detect(&mut self) -> Result<Vec<Hand>>;

    /// ログ表示用の名前
    fn name(&self) -> &'static str;
}

/// 利用可能な検出器
pub enum Detector {
    Feed(FeedDetector),
    Recording(Recording),
    Keyboard(KeyboardHand),
}

impl Detector {
    pub fn detect(&mut self) -> Result<Vec<Hand>> {
        match self {
            Detector::Feed(d) => d.detect(),
            Detector::Recording(d) => d.detect(),
            Detector::Keyboard(d) => d.detect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Detector::Feed(d) => d.name(),
            Detector::Recording(d) => d.name(),
            Detector::Keyboard(d) => d.name(),
        }
    }

    /// キーボード入力で手を作る検出器なら取り出す
    pub fn keyboard_mut(&mut self) -> Option<&mut KeyboardHand> {
        match self {
            Detector::Keyboard(d) => Some(d),
            Detector::Feed(_) | Detector::Recording(_) => None,
        }
    }
}
