//! Crate-wide error type
//!
//! Every variant is a construction-time rejection or a misuse of the session API.
//! Clustering rejections are not surfaced here: the builder discards malformed
//! cluster candidates on purpose.

use crate::core::WordError;
use crate::game::SessionState;
use crate::grid::{ClusterError, ClusterId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The jumble target is smaller than the combined word length
    #[error("size {size} is too small for total character length of {required}")]
    Capacity { size: usize, required: usize },

    /// The row count cannot be split evenly between the display panels
    #[error("row count {rows} cannot be divided into {panels} panels")]
    Divisibility { rows: usize, panels: usize },

    /// A character does not fit the cell it was placed in
    #[error("invalid character {ch:?} at row {row}, column {col}: {reason}")]
    InvalidCharacter {
        ch: char,
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols} with {panels} panels")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        panels: usize,
    },

    #[error("grid of {rows}x{cols} needs {expected} characters, got {actual}")]
    GridSize {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("no live cluster with id {0}")]
    UnknownCluster(ClusterId),

    #[error("word list cannot be empty")]
    EmptyWordList,

    #[error("all words must have the same length: '{word}' is not {expected} letters long")]
    MixedWordLengths { word: String, expected: usize },

    /// A guess was submitted after the session reached a terminal state
    #[error("the game is already over ({0})")]
    GameOver(SessionState),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Word(#[from] WordError),
}
