use super::rules::{judge, Move, Outcome};

/// スコア。プロセス終了までリセットされず、減ることもない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub ai: u32,
    pub player: u32,
}

impl Scores {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.player += 1,
            Outcome::AiWins => self.ai += 1,
            Outcome::Draw => {}
        }
    }
}

/// カウントダウン終了時に確定したラウンド結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// 指の本数が 0 / 2 / 5 以外なら None
    pub player: Option<Move>,
    /// 手が検出されなかった場合はAIも手を出さない
    pub ai: Option<Move>,
    pub outcome: Option<Outcome>,
}

impl RoundResult {
    pub fn no_hand() -> Self {
        Self { player: None, ai: None, outcome: None }
    }

    pub fn new(player: Option<Move>, ai: Move) -> Self {
        Self {
            player,
            ai: Some(ai),
            outcome: player.map(|p| judge(p, ai)),
        }
    }

    pub fn hand_detected(&self) -> bool {
        self.ai.is_some()
    }

    /// ステータス行に出す説明文
    pub fn describe(&self) -> String {
        match (self.player, self.ai, self.outcome) {
            (_, None, _) => "No hand detected".to_string(),
            (None, Some(ai), _) => format!("Gesture not recognised (AI: {ai})"),
            (Some(p), Some(ai), Some(o)) => format!("{p} vs {ai}: {o}"),
            (Some(p), Some(ai), None) => format!("{p} vs {ai}"),
        }
    }
}
