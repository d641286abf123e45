//! キーボードで指の本数を指定する疑似検出器（トラッカー無しで遊ぶ用）

use color_eyre::Result;
use tracing::debug;

use super::detector::HandDetector;
use super::hand::{Hand, HandSide, Landmark, LANDMARK_COUNT};

/// 人差し指〜小指の付け根の x 座標
const FINGER_BASE_X: [f64; 4] = [280.0, 310.0, 340.0, 370.0];
const WRIST: (f64, f64) = (320.0, 400.0);
const MCP_Y: f64 = 320.0;
const PIP_Y: f64 = 285.0;

pub struct KeyboardHand {
    fingers: usize,
    visible: bool,
    side: HandSide,
}

impl KeyboardHand {
    pub fn new() -> Self {
        Self { fingers: 0, visible: true, side: HandSide::Right }
    }

    /// 立てる指の本数 (0..=5)。範囲外は 5 に丸める。
    pub fn set_fingers(&mut self, count: usize) {
        self.fingers = count.min(5);
        debug!(target: "detector", fingers = self.fingers, "keyboard hand updated");
    }

    pub fn fingers(&self) -> usize {
        self.fingers
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        debug!(target: "detector", visible = self.visible, "keyboard hand visibility");
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 指の本数から立てる指を決める。
    /// 5 本のときだけ親指も立て、それ以外は人差し指から順に立てる。
    fn raised(&self) -> [bool; 5] {
        match self.fingers {
            5 => [true; 5],
            n => {
                let mut up = [false; 5];
                for finger in up.iter_mut().skip(1).take(n) {
                    *finger = true;
                }
                up
            }
        }
    }

    /// 右手を正面から見た合成ランドマーク
    pub fn synthesize(&self) -> Result<Hand> {
        let up = self.raised();
        let mut lms = Vec::with_capacity(LANDMARK_COUNT);
        lms.push(Landmark::new(WRIST.0, WRIST.1));

        // 親指: 右手は先端が IP 関節より右なら立っている
        lms.push(Landmark::new(350.0, 385.0));
        lms.push(Landmark::new(370.0, 365.0));
        lms.push(Landmark::new(390.0, 350.0));
        lms.push(if up[0] {
            Landmark::new(415.0, 335.0)
        } else {
            Landmark::new(360.0, 345.0)
        });

        for (i, &x) in FINGER_BASE_X.iter().enumerate() {
            lms.push(Landmark::new(x, MCP_Y));
            lms.push(Landmark::new(x, PIP_Y));
            if up[i + 1] {
                lms.push(Landmark::new(x, 250.0));
                lms.push(Landmark::new(x, 220.0));
            } else {
                lms.push(Landmark::new(x + 4.0, 300.0));
                lms.push(Landmark::new(x + 2.0, 315.0));
            }
        }

        Hand::new(self.side, lms)
    }
}

impl Default for KeyboardHand {
    fn default() -> Self {
        Self::new()
    }
}

impl HandDetector for KeyboardHand {
    fn detect(&mut self) -> Result<Vec<Hand>> {
        if self.visible {
            Ok(vec![self.synthesize()?])
        } else {
            Ok(Vec::new())
        }
    }

    fn name(&self) -> &'static str {
        "keyboard"
    }
}
