//! Custom word list loading
//!
//! Lets a player swap the built-in tier for their own list of equal-length words.

use crate::core::Word;
use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped; every other line must be a valid word, and all words must
/// share one length.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is not a word, the lengths differ,
/// or no words remain.
///
/// # Examples
/// ```no_run
/// use wordhack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/tiers/master.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let words = parse_word_list(&content)
        .with_context(|| format!("parsing word list {}", path.display()))?;

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Same conditions as [`load_from_file`], minus the I/O.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).with_context(|| format!("line {}", line_no + 1))?;
        words.push(word);
    }

    ensure!(!words.is_empty(), "word list is empty");

    let length = words[0].len();
    if let Some(odd) = words.iter().find(|w| w.len() != length) {
        anyhow::bail!("'{odd}' is not {length} letters long like the first word");
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_uppercases() {
        let words = parse_word_list("bake\n\n  cake  \nwake\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["BAKE", "CAKE", "WAKE"]);
    }

    #[test]
    fn parse_rejects_bad_line() {
        let err = parse_word_list("bake\nc@ke\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn parse_rejects_mixed_lengths() {
        assert!(parse_word_list("bake\ntried\n").is_err());
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(parse_word_list("\n \n").is_err());
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
