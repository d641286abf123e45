//! ラウンド進行（カウントダウンとスコア管理）

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::models::{RoundResult, Scores};
use super::rules::Move;

/// ゲームの進行状態
pub struct Session {
    countdown: Duration,
    game_started: bool,
    result_shown: bool,
    countdown_started_at: Option<Instant>,
    /// カウントダウン中に表示する秒数（経過秒の切り捨て）
    timer: u64,
    scores: Scores,
    last_result: Option<RoundResult>,
    rng: StdRng,
}

impl Session {
    pub fn new(countdown: Duration) -> Self {
        Self::with_rng(countdown, StdRng::from_entropy())
    }

    /// シード固定（テストやリプレイ用）
    pub fn with_seed(countdown: Duration, seed: u64) -> Self {
        Self::with_rng(countdown, StdRng::seed_from_u64(seed))
    }

    fn with_rng(countdown: Duration, rng: StdRng) -> Self {
        Self {
            countdown,
            game_started: false,
            result_shown: false,
            countdown_started_at: None,
            timer: 0,
            scores: Scores::default(),
            last_result: None,
            rng,
        }
    }

    /// 新しいラウンドを開始。カウントダウン中に呼ばれた場合はやり直し。
    pub fn start_round(&mut self, now: Instant) {
        self.game_started = true;
        self.result_shown = false;
        self.countdown_started_at = Some(now);
        self.timer = 0;
        info!(target: "session", "round started");
    }

    /// フレーム毎の更新。
    ///
    /// `finger_count` は検出された最初の手の立っている指の本数（手が無ければ None）。
    /// カウントダウンを超えたフレームでのみ結果を確定し、その結果を返す。
    pub fn tick(&mut self, now: Instant, finger_count: Option<usize>) -> Option<RoundResult> {
        if !self.game_started || self.result_shown {
            return None;
        }
        let started = self.countdown_started_at?;
        let elapsed = now.saturating_duration_since(started);
        self.timer = elapsed.as_secs();

        if elapsed <= self.countdown {
            return None;
        }

        self.result_shown = true;
        self.timer = 0;

        let result = match finger_count {
            None => RoundResult::no_hand(),
            Some(count) => {
                let player = Move::from_finger_count(count);
                let ai = self.random_move();
                RoundResult::new(player, ai)
            }
        };
        if let Some(outcome) = result.outcome {
            self.scores.record(outcome);
        }
        info!(
            target: "session",
            player = ?result.player,
            ai = ?result.ai,
            outcome = ?result.outcome,
            ai_score = self.scores.ai,
            player_score = self.scores.player,
            "round finished"
        );
        self.last_result = Some(result);
        Some(result)
    }

    fn random_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn is_started(&self) -> bool {
        self.game_started
    }

    pub fn is_counting_down(&self) -> bool {
        self.game_started && !self.result_shown
    }

    pub fn is_result_shown(&self) -> bool {
        self.result_shown
    }

    /// カウントダウン中のみ表示用の秒数を返す
    pub fn countdown_value(&self) -> Option<u64> {
        self.is_counting_down().then_some(self.timer)
    }

    /// 結果表示中のAIの手（次のラウンド開始まで表示し続ける）
    pub fn shown_ai_move(&self) -> Option<Move> {
        if self.result_shown {
            self.last_result.and_then(|r| r.ai)
        } else {
            None
        }
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}
