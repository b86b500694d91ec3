//! Pure guess evaluation
//!
//! Decides what a selected text means for the game without touching any state; the
//! session applies the verdict.

use crate::core::{Likeness, Word};
use rand::Rng;
use std::fmt;

/// Effect of a symbol cluster bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusEffect {
    ResetAttempts,
    RemoveDud,
}

impl fmt::Display for BonusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetAttempts => write!(f, "attempts reset"),
            Self::RemoveDud => write!(f, "dud removed"),
        }
    }
}

/// What a selection amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A lone symbol or nothing at all
    NotAWord,
    Bonus(BonusEffect),
    /// A wrong guess with attempts to spare
    Scored(Likeness),
    Won(Likeness),
    /// A wrong guess with no attempts left
    Lost(Likeness),
}

/// Evaluate `text` against `password`
///
/// Anything containing a non-letter is not a guess: a single character (or nothing)
/// is rejected, longer texts trigger a bonus that resets attempts with probability
/// `reset_chance` and otherwise removes a dud. Letters are uppercased and scored by
/// position.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use wordhack::core::Word;
/// use wordhack::game::{Verdict, evaluate};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let password = Word::new("TRIED").unwrap();
///
/// let Verdict::Scored(likeness) = evaluate("tries", &password, 4, 0.2, &mut rng) else {
///     panic!("expected a score");
/// };
/// assert_eq!(likeness.score(), 4);
/// assert_eq!(evaluate("#", &password, 4, 0.2, &mut rng), Verdict::NotAWord);
/// ```
pub fn evaluate<R: Rng>(
    text: &str,
    password: &Word,
    attempts: usize,
    reset_chance: f64,
    rng: &mut R,
) -> Verdict {
    if text.is_empty() {
        return Verdict::NotAWord;
    }

    if !text.chars().all(char::is_alphabetic) {
        if text.chars().count() == 1 {
            return Verdict::NotAWord;
        }
        let effect = if rng.random::<f64>() < reset_chance {
            BonusEffect::ResetAttempts
        } else {
            BonusEffect::RemoveDud
        };
        return Verdict::Bonus(effect);
    }

    let guess = text.to_uppercase();
    let likeness = Likeness::calculate(&guess, password);

    if likeness.is_perfect() {
        Verdict::Won(likeness)
    } else if attempts == 0 {
        Verdict::Lost(likeness)
    } else {
        Verdict::Scored(likeness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    fn tried() -> Word {
        Word::new("TRIED").unwrap()
    }

    #[test]
    fn lone_symbol_and_empty_are_not_words() {
        let mut rng = rng();
        assert_eq!(evaluate("#", &tried(), 4, 0.2, &mut rng), Verdict::NotAWord);
        assert_eq!(evaluate("", &tried(), 4, 0.2, &mut rng), Verdict::NotAWord);
    }

    #[test]
    fn symbol_runs_grant_bonus() {
        let mut rng = rng();
        assert_eq!(
            evaluate("(#)", &tried(), 4, 1.0, &mut rng),
            Verdict::Bonus(BonusEffect::ResetAttempts)
        );
        assert_eq!(
            evaluate("[]", &tried(), 4, 0.0, &mut rng),
            Verdict::Bonus(BonusEffect::RemoveDud)
        );
        // Mixed letters and symbols are still not a guess
        assert!(matches!(
            evaluate("TRI#D", &tried(), 0, 0.5, &mut rng),
            Verdict::Bonus(_)
        ));
    }

    #[test]
    fn bonus_split_follows_reset_chance() {
        let mut rng = rng();
        let resets = (0..2000)
            .filter(|_| {
                evaluate("<>", &tried(), 4, 0.2, &mut rng)
                    == Verdict::Bonus(BonusEffect::ResetAttempts)
            })
            .count();
        assert!((300..500).contains(&resets), "got {resets} resets");
    }

    #[test]
    fn scoring_examples() {
        let mut rng = rng();
        let scored = |guess: &str, rng: &mut ChaCha8Rng| match evaluate(guess, &tried(), 4, 0.2, rng) {
            Verdict::Scored(likeness) => likeness.score(),
            other => panic!("unexpected verdict {other:?}"),
        };
        assert_eq!(scored("TRIES", &mut rng), 4);
        assert_eq!(scored("TRICK", &mut rng), 3);
        assert_eq!(scored("tricK", &mut rng), 3);
    }

    #[test]
    fn win_ignores_attempts() {
        let mut rng = rng();
        for attempts in [0, 1, 4] {
            assert!(matches!(
                evaluate("tried", &tried(), attempts, 0.2, &mut rng),
                Verdict::Won(_)
            ));
        }
        assert!(matches!(
            evaluate("TRIEDXYZ", &tried(), 2, 0.2, &mut rng),
            Verdict::Won(_)
        ));
    }

    #[test]
    fn wrong_guess_at_zero_loses() {
        let mut rng = rng();
        assert!(matches!(
            evaluate("TRIES", &tried(), 0, 0.2, &mut rng),
            Verdict::Lost(l) if l.score() == 4
        ));
    }

    #[test]
    fn lone_letter_is_scored() {
        let mut rng = rng();
        assert!(matches!(
            evaluate("T", &tried(), 3, 0.2, &mut rng),
            Verdict::Scored(l) if l.score() == 1
        ));
    }
}
