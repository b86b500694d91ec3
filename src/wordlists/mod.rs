//! Word lists for the password puzzle
//!
//! Provides the five built-in difficulty tiers, loading of custom lists, and the
//! [`WordSet`] that turns a list into the grid's character stream.

pub mod embedded;
pub mod loader;
mod word_set;

pub use embedded::{ADVANCED, BEGINNER, EXPERT, INTERMEDIATE, MASTER};
pub use word_set::{FILLER_SYMBOLS, WordSet};

use crate::error::GameError;
use rand::Rng;
use std::fmt;

/// Difficulty tier, selected once when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[default]
    Master,
}

impl Difficulty {
    /// All tiers from easiest to hardest
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
        Self::Master,
    ];

    /// The tier's built-in word list
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Beginner => BEGINNER,
            Self::Intermediate => INTERMEDIATE,
            Self::Advanced => ADVANCED,
            Self::Expert => EXPERT,
            Self::Master => MASTER,
        }
    }

    /// Length of every word in the tier
    #[must_use]
    pub fn word_length(self) -> usize {
        self.words().first().map_or(0, |w| w.len())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Master => "master",
        };
        f.write_str(name)
    }
}

/// Repository of the built-in tiers
pub struct WordBank;

impl WordBank {
    /// A freshly shuffled word set for `difficulty`, with its password already chosen
    ///
    /// # Errors
    /// Only fails if the embedded list is malformed, which the build script rules out.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use wordhack::wordlists::{Difficulty, WordBank};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let set = WordBank::word_set(Difficulty::Beginner, &mut rng).unwrap();
    /// assert_eq!(set.word_length(), 4);
    /// ```
    pub fn word_set<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<WordSet, GameError> {
        let mut set = WordSet::from_slice(difficulty.words(), rng)?;
        set.shuffle(rng);
        Ok(set)
    }
}
