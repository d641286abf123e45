//! カメラ画像 → プレイヤービューの座標変換
//!
//! カメラ画像 (640x480) を 0.875 倍に縮小し、x = 80..480 の列だけを切り出した
//! 400x420 の領域が画面右側のプレイヤービューになる。

use super::hand::{Hand, Landmark};

pub const FRAME_WIDTH: f64 = 640.0;
pub const FRAME_HEIGHT: f64 = 480.0;
pub const VIEW_SCALE: f64 = 0.875;
pub const CROP_LEFT: f64 = 80.0;
pub const CROP_RIGHT: f64 = 480.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub scale: f64,
    pub crop_left: f64,
    pub crop_right: f64,
    pub frame_height: f64,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            scale: VIEW_SCALE,
            crop_left: CROP_LEFT,
            crop_right: CROP_RIGHT,
            frame_height: FRAME_HEIGHT,
        }
    }
}

impl PlayerView {
    pub fn width(&self) -> f64 {
        self.crop_right - self.crop_left
    }

    pub fn height(&self) -> f64 {
        self.frame_height * self.scale
    }

    /// カメラ座標をビュー座標に変換。切り出し範囲外なら None。
    pub fn project(&self, lm: Landmark) -> Option<(f64, f64)> {
        let x = lm.x * self.scale;
        let y = lm.y * self.scale;
        if x < self.crop_left || x >= self.crop_right || y < 0.0 || y >= self.height() {
            return None;
        }
        Some((x - self.crop_left, y))
    }

    /// 手の中心がビュー内にあるか（ビュー外の手は検出されなかった扱い）
    pub fn contains(&self, hand: &Hand) -> bool {
        self.project(hand.center()).is_some()
    }
}
