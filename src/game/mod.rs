pub mod rules;
pub mod models;
pub mod session;

pub use models::{RoundResult, Scores};
pub use rules::{judge, Move, Outcome};
pub use session::Session;
