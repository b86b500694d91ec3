//! Minimax guess selection
//!
//! Picks the guess whose worst likeness bucket is smallest.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select the guess minimising the worst-case number of remaining candidates
///
/// Ties prefer a guess that could itself be the password, then the earlier guess in
/// the pool. Returns the guess with its worst case, or `None` for an empty pool.
///
/// # Examples
/// ```
/// use wordhack::core::Word;
/// use wordhack::solver::minimax::select_best_guess;
///
/// let pool = [Word::new("zzzz").unwrap(), Word::new("bake").unwrap()];
/// let candidates = [Word::new("bake").unwrap(), Word::new("cake").unwrap()];
///
/// let pool_refs: Vec<&Word> = pool.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, worst) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "BAKE");
/// assert_eq!(worst, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let outsider = !candidates.contains(&guess);
            (guess, max_remaining, outsider, index)
        })
        .min_by_key(|&(_, max_remaining, outsider, index)| (max_remaining, outsider, index))
        .map(|(guess, max_remaining, _, _)| (guess, max_remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn selects_lowest_worst_case() {
        let pool = words(&["ZZZZ", "BARN"]);
        let candidates = words(&["BAKE", "BARK", "YARN", "FERN"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let (best, worst) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "BARN");
        assert!(worst < 4);
    }

    #[test]
    fn ties_prefer_candidates_then_pool_order() {
        let pool = words(&["ZZZZ", "QQQQ", "CAKE", "BAKE"]);
        let candidates = words(&["BAKE", "CAKE"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // Every guess with a split of 1 is a candidate; CAKE comes first
        let (best, worst) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "CAKE");
        assert_eq!(worst, 1);
    }

    #[test]
    fn outsider_wins_only_when_strictly_better() {
        let pool = words(&["ABCD", "AXXX"]);
        let candidates = words(&["ABCD", "ABCE", "ABCF"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // ABCD: likeness 4,3,3 -> worst 2; AXXX: 1,1,1 -> worst 3
        let (best, worst) = select_best_guess(&pool_refs, &candidate_refs).unwrap();
        assert_eq!(best.text(), "ABCD");
        assert_eq!(worst, 2);
    }

    #[test]
    fn empty_pool() {
        let candidates = words(&["BAKE"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();
        assert!(select_best_guess(&[], &candidate_refs).is_none());
    }
}
