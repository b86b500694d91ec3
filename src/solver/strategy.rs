//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// A strategy for picking the next word to click
pub trait Strategy {
    /// Select a guess from the words still visible in the grid
    ///
    /// `candidates` are the visible words consistent with every likeness seen so far.
    /// Returns `None` if the guess pool is empty.
    fn select_guess<'a, R: Rng>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Worst-case minimisation (default)
    Minimax(MinimaxStrategy),
    /// Uniform pick among the candidates
    Random(RandomStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates, rng),
            Self::Random(s) => s.select_guess(guess_pool, candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random". Defaults to minimax if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a, R: Rng>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        // A single consistent word is the password
        if let [only] = candidates
            && let Some(word) = guess_pool.iter().find(|w| *w == only)
        {
            return Some(word);
        }

        let guess_refs: Vec<&Word> = guess_pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        super::minimax::select_best_guess(&guess_refs, &candidate_refs).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks uniformly among the candidates that are still clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let valid_candidates: Vec<&'a Word> = guess_pool
            .iter()
            .filter(|g| candidates.contains(*g))
            .collect();

        // Fallback: any visible word
        match valid_candidates.choose(rng) {
            Some(&candidate) => Some(candidate),
            None => guess_pool.choose(rng),
        }
    }
}
