//! Guess feedback: positional likeness
//!
//! The likeness of a guess is the number of positions, counted from the start of both
//! words, that hold the same letter. Only the overlapping span is compared, so a guess
//! longer than the password is effectively truncated.

use super::Word;
use std::fmt;

/// Feedback for one guess against the password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Likeness {
    score: usize,
    length: usize,
}

impl Likeness {
    /// Create a likeness from raw parts
    ///
    /// # Panics
    /// Panics in debug mode if `score > length`
    #[inline]
    #[must_use]
    pub const fn new(score: usize, length: usize) -> Self {
        debug_assert!(score <= length, "Likeness score cannot exceed the length");
        Self { score, length }
    }

    /// Matching positions
    #[inline]
    #[must_use]
    pub const fn score(self) -> usize {
        self.score
    }

    /// Length of the password the guess was scored against
    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Every position of the password was matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.score == self.length
    }

    /// Score `guess` against the password
    ///
    /// # Examples
    /// ```
    /// use wordhack::core::{Likeness, Word};
    ///
    /// let password = Word::new("TRIED").unwrap();
    /// assert_eq!(Likeness::calculate("TRIES", &password).score(), 4);
    /// assert_eq!(Likeness::calculate("TRICK", &password).score(), 3);
    /// assert!(Likeness::calculate("TRIED", &password).is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, password: &Word) -> Self {
        let score = password
            .text()
            .chars()
            .zip(guess.chars())
            .filter(|(expected, actual)| expected == actual)
            .count();

        Self::new(score, password.len())
    }

    /// Score between two candidate words, used to partition candidates
    #[inline]
    #[must_use]
    pub fn between(guess: &Word, password: &Word) -> usize {
        guess
            .chars()
            .iter()
            .zip(password.chars())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for Likeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} correct", self.score, self.length)
    }
}
