//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Likeness, Word};
use rand::Rng;

/// Guess picker for one game
///
/// Coordinates candidate filtering and the chosen strategy.
#[derive(Debug, Clone, Default)]
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Get the next guess among the visible words
    ///
    /// # Parameters
    /// - `visible`: Words still clickable in the grid
    /// - `history`: Slice of (guess, likeness score) pairs from previous turns
    ///
    /// Returns `None` only when nothing is visible.
    pub fn next_guess<'a, R: Rng>(
        &self,
        visible: &'a [Word],
        history: &[(Word, usize)],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let mut candidates = Self::filter_candidates(visible, history);

        // Inconsistent history (e.g. a custom list with duplicates): fall back to everything
        if candidates.is_empty() {
            candidates = visible.to_vec();
        }

        self.strategy.select_guess(visible, &candidates, rng)
    }

    /// Visible words that would have reported every observed likeness
    #[must_use]
    pub fn filter_candidates(visible: &[Word], history: &[(Word, usize)]) -> Vec<Word> {
        visible
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Likeness::between(guess, candidate) == *observed)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::MinimaxStrategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn filter_keeps_consistent_words() {
        let visible = words(&["BAKE", "BARK", "YARN", "FERN"]);
        let history = vec![(Word::new("BARN").unwrap(), 3)];

        let candidates = Solver::<MinimaxStrategy>::filter_candidates(&visible, &history);
        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, ["BARK", "YARN"]);
    }

    #[test]
    fn filter_with_multiple_guesses() {
        let visible = words(&["BAKE", "BARK", "YARN", "FERN", "EARN"]);
        let password = Word::new("EARN").unwrap();
        let history: Vec<(Word, usize)> = ["BARN", "YARN"]
            .iter()
            .map(|&g| {
                let guess = Word::new(g).unwrap();
                let score = Likeness::between(&guess, &password);
                (guess, score)
            })
            .collect();

        let candidates = Solver::<MinimaxStrategy>::filter_candidates(&visible, &history);
        assert!(candidates.contains(&password));
        assert!(!candidates.iter().any(|w| w.text() == "BAKE"));
    }

    #[test]
    fn next_guess_with_empty_history() {
        let visible = words(&["BAKE", "CAKE", "WAKE"]);
        let solver = Solver::new(MinimaxStrategy);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(solver.next_guess(&visible, &[], &mut rng).is_some());
    }

    #[test]
    fn next_guess_survives_inconsistent_history() {
        let visible = words(&["BAKE", "CAKE"]);
        let history = vec![(Word::new("ZZZZ").unwrap(), 4)];
        let solver = Solver::new(MinimaxStrategy);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(solver.next_guess(&visible, &history, &mut rng).is_some());
        assert!(solver.next_guess(&[], &history, &mut rng).is_none());
    }
}
