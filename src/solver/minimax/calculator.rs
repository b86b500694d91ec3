//! Worst-case bucket size for a guess
//!
//! Candidates are grouped by the likeness they would report for a guess; the largest
//! group is what the player is left with after an unlucky answer.

use crate::core::{Likeness, Word};
use rustc_hash::FxHashMap;

/// Size of the largest likeness bucket `guess` leaves among `candidates`
///
/// # Examples
/// ```
/// use wordhack::core::Word;
/// use wordhack::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("bake").unwrap();
/// let candidates = [
///     Word::new("cake").unwrap(),
///     Word::new("wake").unwrap(),
///     Word::new("barn").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // CAKE and WAKE both report 3 / 4
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_likeness(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

fn group_by_likeness(guess: &Word, candidates: &[&Word]) -> FxHashMap<usize, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts
            .entry(Likeness::between(guess, candidate))
            .or_insert(0) += 1;
    }

    counts
}
