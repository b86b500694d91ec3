//! Automatic play of a whole session
//!
//! Drives a [`GameSession`] through the same click path a human uses: optionally
//! spending every symbol bonus first, then clicking the word the solver picks until
//! the session ends.

use super::engine::Solver;
use super::strategy::Strategy;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{BonusEffect, Feedback, GameSession, SessionState};
use crate::grid::{Cluster, ClusterId};
use rand::Rng;

/// How one automatic game went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub state: SessionState,
    pub password: String,
    /// Words clicked, including the winning one
    pub guesses: Vec<String>,
    pub resets: usize,
    pub duds_removed: usize,
}

impl PlayReport {
    #[must_use]
    pub fn won(&self) -> bool {
        self.state == SessionState::Won
    }
}

/// Options for [`play_session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Click every bracket pair before the first guess
    pub use_bonuses: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self { use_bonuses: true }
    }
}

/// Play `session` to the end with `solver`
///
/// # Errors
/// Propagates session errors; none occur for a freshly built session.
pub fn play_session<S: Strategy, G: Rng, R: Rng>(
    session: &mut GameSession<G>,
    solver: &Solver<S>,
    options: PlayOptions,
    rng: &mut R,
) -> Result<PlayReport, GameError> {
    let mut report = PlayReport {
        state: session.state(),
        password: session.password().text().to_string(),
        guesses: Vec::new(),
        resets: 0,
        duds_removed: 0,
    };
    let mut history: Vec<(Word, usize)> = Vec::new();

    if options.use_bonuses {
        let bonuses: Vec<ClusterId> = session.grid().symbol_clusters().map(Cluster::id).collect();
        for id in bonuses {
            let outcome = session.select_cluster(id)?;
            match outcome.bonus {
                Some(BonusEffect::ResetAttempts) => report.resets += 1,
                Some(BonusEffect::RemoveDud) => report.duds_removed += 1,
                None => {}
            }
        }
    }

    while session.state() == SessionState::Active {
        let visible: Vec<(ClusterId, Word)> = session
            .grid()
            .letter_clusters()
            .filter_map(|c| Some((c.id(), Word::new(c.text()?).ok()?)))
            .collect();
        let words: Vec<Word> = visible.iter().map(|(_, w)| w.clone()).collect();

        let Some(guess) = solver.next_guess(&words, &history, rng) else {
            log::warn!("No visible words left to guess");
            break;
        };
        let Some(&(id, _)) = visible.iter().find(|(_, w)| w == guess) else {
            break;
        };

        let outcome = session.select_cluster(id)?;
        report.guesses.push(guess.text().to_string());
        log::trace!("Auto-player clicked {guess}: {:?}", outcome.feedback);

        if let Feedback::Incorrect(likeness) = outcome.feedback {
            history.push((guess.clone(), likeness.score()));
        }
    }

    report.state = session.state();
    Ok(report)
}
