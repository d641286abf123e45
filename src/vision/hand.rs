//! 手のランドマークモデル
//!
//! 外部のハンドトラッカー（MediaPipe 形式）が返す 21 点のランドマークを保持し、
//! 指が立っているかどうかを判定する。座標はカメラ画像のピクセル座標（y は下向き）。
//!
//! ランドマーク番号:
//! - 0: 手首
//! - 1-4: 親指 (CMC, MCP, IP, TIP)
//! - 5-8: 人差し指, 9-12: 中指, 13-16: 薬指, 17-20: 小指 (MCP, PIP, DIP, TIP)

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

/// 1 手あたりのランドマーク数
pub const LANDMARK_COUNT: usize = 21;

/// 各指の先端のランドマーク番号（親指から小指）
pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// 手の左右
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    pub fn flipped(self) -> Self {
        match self {
            HandSide::Left => HandSide::Right,
            HandSide::Right => HandSide::Left,
        }
    }
}

/// ランドマーク 1 点。JSON では `[x, y, z]` の配列。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl From<[f64; 3]> for Landmark {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Landmark> for [f64; 3] {
    fn from(lm: Landmark) -> Self {
        [lm.x, lm.y, lm.z]
    }
}

/// トラッカーの出力そのままの形
#[derive(Debug, Deserialize)]
struct RawHand {
    #[serde(rename = "type")]
    side: HandSide,
    lm_list: Vec<Landmark>,
}

/// 検出された手（ランドマークは必ず 21 点）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHand")]
pub struct Hand {
    #[serde(rename = "type")]
    side: HandSide,
    #[serde(rename = "lm_list")]
    landmarks: Vec<Landmark>,
}

impl TryFrom<RawHand> for Hand {
    type Error = color_eyre::Report;

    fn try_from(raw: RawHand) -> Result<Self> {
        Hand::new(raw.side, raw.lm_list)
    }
}

impl Hand {
    pub fn new(side: HandSide, landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(eyre!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                landmarks.len()
            ));
        }
        Ok(Self { side, landmarks })
    }

    pub fn side(&self) -> HandSide {
        self.side
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// 左右のラベルを入れ替える（鏡像の画像でトラッカーがラベル付けした場合）
    pub fn flip_side(&mut self) {
        self.side = self.side.flipped();
    }

    /// 各指（親指から小指）が立っているか。
    ///
    /// 親指は先端と IP 関節の x 座標を左右に応じて比較し、
    /// 他の指は先端が PIP 関節より上（y が小さい）なら立っているとみなす。
    pub fn fingers_up(&self) -> [bool; 5] {
        let lm = &self.landmarks;
        let mut up = [false; 5];

        let thumb_tip = lm[FINGER_TIPS[0]].x;
        let thumb_ip = lm[FINGER_TIPS[0] - 1].x;
        up[0] = match self.side {
            HandSide::Right => thumb_tip > thumb_ip,
            HandSide::Left => thumb_tip < thumb_ip,
        };

        for (finger, &tip) in FINGER_TIPS.iter().enumerate().skip(1) {
            up[finger] = lm[tip].y < lm[tip - 2].y;
        }
        up
    }

    /// 立っている指の本数
    pub fn finger_count(&self) -> usize {
        self.fingers_up().iter().filter(|&&u| u).count()
    }

    /// バウンディングボックス (min_x, min_y, max_x, max_y)
    pub fn bbox(&self) -> (f64, f64, f64, f64) {
        self.landmarks.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(x0, y0, x1, y1), lm| (x0.min(lm.x), y0.min(lm.y), x1.max(lm.x), y1.max(lm.y)),
        )
    }

    pub fn center(&self) -> Landmark {
        let (x0, y0, x1, y1) = self.bbox();
        Landmark::new((x0 + x1) / 2.0, (y0 + y1) / 2.0)
    }
}

/// 骨格の描画に使う接続（ランドマーク番号のペア）
pub const CONNECTIONS: [(usize, usize); 21] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 5), (5, 6), (6, 7), (7, 8),
    (5, 9), (9, 10), (10, 11), (11, 12),
    (9, 13), (13, 14), (14, 15), (15, 16),
    (13, 17), (17, 18), (18, 19), (19, 20),
    (0, 17),
];
