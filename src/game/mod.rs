//! Game rules and session state

mod evaluator;
mod session;

pub use evaluator::{BonusEffect, Verdict, evaluate};
pub use session::{Feedback, GameSession, GuessOutcome, GuessRecord, SessionState};
