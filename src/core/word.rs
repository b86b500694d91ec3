//! Password word representation
//!
//! A Word stores an uppercase ASCII word as it appears in the terminal grid.

use std::fmt;
use thiserror::Error;

/// Shortest word that can ever form a selectable letter cluster
pub const MIN_WORD_LEN: usize = 2;

/// An uppercase candidate password
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least {MIN_WORD_LEN} letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below [`MIN_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordhack::core::Word;
    ///
    /// let word = Word::new("bake").unwrap();
    /// assert_eq!(word.text(), "BAKE");
    ///
    /// assert!(Word::new("b").is_err());
    /// assert!(Word::new("b4ke").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects short words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive comparison against raw grid text
    #[inline]
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.text.eq_ignore_ascii_case(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("BAKE").unwrap();
        assert_eq!(word.text(), "BAKE");
        assert_eq!(word.chars(), b"BAKE");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("bake").unwrap().text(), "BAKE");
        assert_eq!(Word::new("BaKe").unwrap().text(), "BAKE");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(Word::new(""), Err(WordError::TooShort(0)));
        assert_eq!(Word::new("A"), Err(WordError::TooShort(1)));
        assert!(Word::new("AB").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("BAK3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("BA E"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("BA.E"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("CAFÉ"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_matches_ignores_case() {
        let word = Word::new("TRIED").unwrap();
        assert!(word.matches("tried"));
        assert!(word.matches("TRIED"));
        assert!(!word.matches("TRIES"));
        assert!(!word.matches("TRIE"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("fern").unwrap();
        assert_eq!(format!("{word}"), "FERN");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("CREATION").unwrap();
        let word2 = Word::new("creation").unwrap();
        let word3 = Word::new("DURATION").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
