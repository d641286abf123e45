//! アプリケーション状態管理モジュール

use std::time::Instant;

use tracing::{error, info};

use crate::assets::Assets;
use crate::config::Config;
use crate::game::Session;
use crate::vision::{Detector, Hand, PlayerView};

/// アプリケーションの状態を管理する構造体
pub struct App {
    pub config: Config,
    /// ラウンド進行とスコア
    pub session: Session,
    pub detector: Detector,
    pub assets: Assets,
    pub view: PlayerView,
    /// 最新フレームでプレイヤービュー内に検出された手
    pub hands: Vec<Hand>,
    /// アプリケーション開始時刻
    pub started: Instant,
}

impl App {
    pub fn new(config: Config, detector: Detector, assets: Assets) -> Self {
        let session = match config.seed {
            Some(seed) => Session::with_seed(config.countdown(), seed),
            None => Session::new(config.countdown()),
        };
        info!(target: "app", detector = detector.name(), "app created");
        Self {
            config,
            session,
            detector,
            assets,
            view: PlayerView::default(),
            hands: Vec::new(),
            started: Instant::now(),
        }
    }

    /// フレーム毎の更新処理
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        let mut hands = match self.detector.detect() {
            Ok(h) => h,
            Err(e) => {
                error!(target: "app", "detector {} failed: {:?}", self.detector.name(), e);
                Vec::new()
            }
        };
        // 切り出し範囲外の手は見えていない扱い。絞り込んでから max_hands 個に制限する。
        hands.retain(|h| self.view.contains(h));
        hands.truncate(self.config.max_hands);
        let finger_count = hands.first().map(Hand::finger_count);
        self.session.tick(now, finger_count);
        self.hands = hands;
    }

    /// ラウンドを開始（カウントダウン開始）
    pub fn start_round(&mut self) {
        self.start_round_at(Instant::now());
    }

    pub fn start_round_at(&mut self, now: Instant) {
        self.session.start_round(now);
    }

    /// 最初の手の立っている指の本数
    pub fn finger_count(&self) -> Option<usize> {
        self.hands.first().map(Hand::finger_count)
    }

    /// アプリケーション開始からの経過時間を取得
    pub fn elapsed_time(&self) -> std::time::Duration {
        self.started.elapsed()
    }
}
