//! Core domain types
//!
//! Words and the likeness feedback used to score guesses. Everything here is pure
//! and independent of the grid.

mod likeness;
mod word;

pub use likeness::Likeness;
pub use word::{MIN_WORD_LEN, Word, WordError};
