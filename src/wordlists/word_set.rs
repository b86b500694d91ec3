//! One tier's words, the secret password, and the jumbled grid stream

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Filler characters placed between words in the grid
pub const FILLER_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '{', '}', '[', ']', ':', ';', '<',
    '>', ',', '?', '/', '\'', '\\', '"',
];

/// A list of equal-length words with one designated password
///
/// The password is held by value, so reordering the list never changes which word is
/// secret.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: Vec<Word>,
    password: Word,
    cursor: usize,
}

impl WordSet {
    /// Build a set and pick its password uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` for an empty list and
    /// `GameError::MixedWordLengths` when the words differ in length.
    pub fn new<R: Rng>(words: Vec<Word>, rng: &mut R) -> Result<Self, GameError> {
        let password = words.choose(rng).cloned().ok_or(GameError::EmptyWordList)?;

        if let Some(odd) = words.iter().find(|w| w.len() != password.len()) {
            return Err(GameError::MixedWordLengths {
                word: odd.text().to_string(),
                expected: password.len(),
            });
        }

        Ok(Self {
            words,
            password,
            cursor: 0,
        })
    }

    /// Build a set from raw strings
    ///
    /// # Errors
    /// Fails if any entry is not a valid word, or for the reasons listed on [`WordSet::new`].
    pub fn from_slice<R: Rng>(words: &[&str], rng: &mut R) -> Result<Self, GameError> {
        let words = words
            .iter()
            .map(|&w| Word::new(w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words, rng)
    }

    /// The words in their current order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The secret word
    #[must_use]
    pub fn password(&self) -> &Word {
        &self.password
    }

    /// Length shared by every word in the set
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.password.len()
    }

    /// Combined length of all words
    #[must_use]
    pub fn total_characters(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    /// Next word under the cursor, advancing it
    pub fn next_word(&mut self) -> Option<&Word> {
        let word = self.words.get(self.cursor)?;
        self.cursor += 1;
        Some(word)
    }

    /// Move the cursor back to the first word
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Randomly reorder the words in place (Fisher-Yates)
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        self.words.shuffle(rng);
        self
    }

    /// Interleave the words with random filler to produce exactly `size` characters
    ///
    /// Each word gets `slack / word_count` filler characters split randomly around it;
    /// the remainder of the division is appended at the very end.
    ///
    /// # Errors
    /// Returns `GameError::Capacity` if `size` is smaller than the combined word length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use wordhack::wordlists::WordSet;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let set = WordSet::from_slice(&["BAKE", "CAKE", "WAKE"], &mut rng).unwrap();
    ///
    /// let jumble = set.jumble(40, &mut rng).unwrap();
    /// assert_eq!(jumble.chars().count(), 40);
    /// assert!(set.jumble(11, &mut rng).is_err());
    /// ```
    pub fn jumble<R: Rng>(&self, size: usize, rng: &mut R) -> Result<String, GameError> {
        let required = self.total_characters();
        if size < required {
            return Err(GameError::Capacity { size, required });
        }

        let slack = size - required;
        let gap = slack / self.words.len();
        let remainder = slack % self.words.len();

        let mut output = String::with_capacity(size);
        for word in &self.words {
            let left = if gap == 0 { 0 } else { rng.random_range(0..gap) };

            push_filler(&mut output, left, rng);
            output.push_str(word.text());
            push_filler(&mut output, gap - left, rng);
        }

        push_filler(&mut output, remainder, rng);

        Ok(output)
    }
}

fn push_filler<R: Rng>(output: &mut String, amount: usize, rng: &mut R) {
    for _ in 0..amount {
        output.push(FILLER_SYMBOLS[rng.random_range(0..FILLER_SYMBOLS.len())]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const BEGINNER: &[&str] = &[
        "BAKE", "BARN", "BIDE", "BARK", "BAND", "CAKE", "CART", "EARN", "FERN", "SIDE", "HARK",
        "WAKE", "YARN",
    ];

    fn set_with_seed(seed: u64) -> (WordSet, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let set = WordSet::from_slice(BEGINNER, &mut rng).unwrap();
        (set, rng)
    }

    #[test]
    fn empty_list_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            WordSet::new(Vec::new(), &mut rng).unwrap_err(),
            GameError::EmptyWordList
        );
    }

    #[test]
    fn mixed_lengths_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = WordSet::from_slice(&["BAKE", "TRIED", "CAKE", "WAKE"], &mut rng).unwrap_err();
        assert!(matches!(err, GameError::MixedWordLengths { .. }));
    }

    #[test]
    fn invalid_word_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = WordSet::from_slice(&["BAKE", "C4KE"], &mut rng).unwrap_err();
        assert!(matches!(err, GameError::Word(_)));
    }

    #[test]
    fn password_is_member() {
        for seed in 0..20 {
            let (set, _) = set_with_seed(seed);
            assert!(set.words().contains(set.password()));
            assert_eq!(set.word_length(), 4);
        }
    }

    #[test]
    fn shuffle_is_permutation_and_keeps_password() {
        for seed in 0..20 {
            let (mut set, mut rng) = set_with_seed(seed);
            let password = set.password().clone();

            set.shuffle(&mut rng).shuffle(&mut rng);

            let mut before: Vec<&str> = BEGINNER.to_vec();
            let mut after: Vec<&str> = set.words().iter().map(Word::text).collect();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
            assert_eq!(set.password(), &password);
        }
    }

    #[test]
    fn shuffle_changes_order_eventually() {
        let (mut set, mut rng) = set_with_seed(3);
        let original: Vec<Word> = set.words().to_vec();
        let changed = (0..10).any(|_| set.shuffle(&mut rng).words() != original.as_slice());
        assert!(changed);
    }

    #[test]
    fn jumble_length_and_order() {
        for size in [52, 53, 64, 100, 480, 481] {
            let (set, mut rng) = set_with_seed(size as u64);
            let jumble = set.jumble(size, &mut rng).unwrap();
            assert_eq!(jumble.chars().count(), size);

            // Every word appears, in list order
            let mut from = 0;
            for word in set.words() {
                let found = jumble[from..].find(word.text()).unwrap();
                from += found + word.len();
            }
        }
    }

    #[test]
    fn jumble_separates_words_when_slack_allows() {
        let (set, mut rng) = set_with_seed(11);
        let jumble = set.jumble(480, &mut rng).unwrap();

        let runs: Vec<&str> = jumble
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|run| !run.is_empty())
            .collect();
        let expected: Vec<&str> = set.words().iter().map(Word::text).collect();
        assert_eq!(runs, expected);
    }

    #[test]
    fn jumble_filler_comes_from_symbol_alphabet() {
        let (set, mut rng) = set_with_seed(5);
        let jumble = set.jumble(300, &mut rng).unwrap();
        assert!(
            jumble
                .chars()
                .filter(|c| !c.is_ascii_alphabetic())
                .all(|c| FILLER_SYMBOLS.contains(&c))
        );
    }

    #[test]
    fn jumble_remainder_goes_to_the_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let set = WordSet::from_slice(&["AB", "CD", "EF"], &mut rng).unwrap();

        // slack 5: one filler per word, two trailing
        let jumble = set.jumble(11, &mut rng).unwrap();
        let letters = jumble.chars().filter(char::is_ascii_alphabetic).count();
        assert_eq!(letters, 6);
        assert!(!jumble.ends_with(|c: char| c.is_ascii_alphabetic()));
    }

    #[test]
    fn jumble_exact_capacity_has_no_filler() {
        let (set, mut rng) = set_with_seed(2);
        let jumble = set.jumble(52, &mut rng).unwrap();
        let expected: String = set.words().iter().map(Word::text).collect();
        assert_eq!(jumble, expected);
    }

    #[test]
    fn jumble_capacity_guard() {
        let (set, mut rng) = set_with_seed(4);
        assert_eq!(
            set.jumble(51, &mut rng).unwrap_err(),
            GameError::Capacity {
                size: 51,
                required: 52
            }
        );
        assert!(set.jumble(0, &mut rng).is_err());
    }

    #[test]
    fn cursor_walks_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut set = WordSet::from_slice(&["AB", "CD"], &mut rng).unwrap();
        assert_eq!(set.next_word().map(Word::text), Some("AB"));
        assert_eq!(set.next_word().map(Word::text), Some("CD"));
        assert_eq!(set.next_word(), None);
        set.reset_cursor();
        assert_eq!(set.next_word().map(Word::text), Some("AB"));
    }
}
