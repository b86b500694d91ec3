//! Automatic password hacking
//!
//! Candidate filtering by likeness, guess selection strategies, and a player that
//! drives a whole session.

mod engine;
pub mod minimax;
mod player;
pub mod strategy;

pub use engine::Solver;
pub use player::{PlayOptions, PlayReport, play_session};
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
