use std::fmt;

/// じゃんけんの手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// 1ラウンドの勝敗（プレイヤー視点）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    AiWins,
    Draw,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// 勝敗表: グー > チョキ, パー > グー, チョキ > パー
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper)
        )
    }

    /// 立っている指の本数から手を決める。0 / 2 / 5 本以外は判定不能。
    pub fn from_finger_count(count: usize) -> Option<Move> {
        match count {
            0 => Some(Move::Rock),
            2 => Some(Move::Scissors),
            5 => Some(Move::Paper),
            _ => None,
        }
    }

    /// アセットファイル名に使う番号 (1: Rock, 2: Paper, 3: Scissors)
    pub fn code(self) -> u8 {
        match self {
            Move::Rock => 1,
            Move::Paper => 2,
            Move::Scissors => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Move> {
        match code {
            1 => Some(Move::Rock),
            2 => Some(Move::Paper),
            3 => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "You win!"),
            Outcome::AiWins => write!(f, "AI wins!"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// プレイヤーの手とAIの手を比べて勝敗を返す
pub fn judge(player: Move, ai: Move) -> Outcome {
    if player.beats(ai) {
        Outcome::PlayerWins
    } else if ai.beats(player) {
        Outcome::AiWins
    } else {
        Outcome::Draw
    }
}
