//! One game of password hacking
//!
//! A [`GameSession`] owns the word set, the grid and the attempt counter, and applies
//! evaluator verdicts: bonuses mutate the grid or the counter, wrong guesses spend an
//! attempt, and the first win or loss ends the game.

use super::evaluator::{BonusEffect, Verdict, evaluate};
use crate::config::GameConfig;
use crate::core::{Likeness, Word};
use crate::error::GameError;
use crate::grid::{AddressColumn, CellManager, ClusterId, Position, Selection};
use crate::wordlists::WordSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Active,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Player-facing result of one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    NotAWord,
    AttemptsReset,
    DudRemoved(String),
    Incorrect(Likeness),
    Won,
    Lost,
}

impl Feedback {
    /// Terminal log lines, without the echo of the selection itself
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::NotAWord => vec!["> Error!".to_string()],
            Self::AttemptsReset => vec!["> Attempts reset".to_string()],
            Self::DudRemoved(_) => vec!["> Dud removed".to_string()],
            Self::Incorrect(likeness) => vec![format!("> {likeness}")],
            Self::Won => vec![
                "> Correct! You Win!!".to_string(),
                "> Accessing System...".to_string(),
            ],
            Self::Lost => vec![
                "> Incorrect!".to_string(),
                "> System Locking...".to_string(),
            ],
        }
    }
}

/// Everything that happened as a result of one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub state: SessionState,
    pub feedback: Feedback,
    pub attempts_remaining: usize,
    /// Bonus actually applied, after any fallback
    pub bonus: Option<BonusEffect>,
    pub removed_word: Option<String>,
    pub attempt_consumed: bool,
}

/// A selection and what it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub text: String,
    pub feedback: Feedback,
}

/// State of a single game
///
/// All randomness flows from the generator handed to [`GameSession::new`], so a
/// seeded session is fully reproducible.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = ChaCha8Rng> {
    words: WordSet,
    grid: CellManager,
    addresses: AddressColumn,
    starting_attempts: usize,
    reset_chance: f64,
    attempts: usize,
    state: SessionState,
    history: Vec<GuessRecord>,
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Session driven by `ChaCha8Rng` seeded with `seed`
    ///
    /// # Errors
    /// See [`GameSession::new`].
    ///
    /// # Examples
    /// ```
    /// use wordhack::config::GameConfig;
    /// use wordhack::game::{GameSession, SessionState};
    ///
    /// let session = GameSession::seeded(&GameConfig::default(), 7).unwrap();
    /// assert_eq!(session.attempts_remaining(), 4);
    /// assert_eq!(session.state(), SessionState::Active);
    /// assert_eq!(session.grid().letter_clusters().count(), 15);
    /// ```
    pub fn seeded(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Session seeded from `config.seed`, or from fresh entropy when unset
    ///
    /// # Errors
    /// See [`GameSession::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::seeded(config, seed)
    }
}

impl<R: Rng> GameSession<R> {
    /// Pick the password, jumble the words into a grid and cluster it
    ///
    /// # Errors
    /// - `GameError::InvalidDimensions` / `GameError::Divisibility` for a bad layout
    /// - `GameError::EmptyWordList` / `GameError::MixedWordLengths` for a bad custom list
    /// - `GameError::Capacity` when the words do not fit in the grid
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let words = config.word_set(&mut rng)?;
        let stream = words.jumble(config.grid_size()?, &mut rng)?;
        let grid = CellManager::new(config.rows, config.cols, config.panels, &stream)?;
        let addresses = AddressColumn::random(config.rows, &mut rng);

        log::debug!(
            "New session: {} words of length {}, {} letter clusters",
            words.len(),
            words.word_length(),
            grid.letter_clusters().count()
        );

        Ok(Self {
            words,
            grid,
            addresses,
            starting_attempts: config.attempts,
            reset_chance: config.reset_chance,
            attempts: config.attempts,
            state: SessionState::Active,
            history: Vec::new(),
            rng,
        })
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn starting_attempts(&self) -> usize {
        self.starting_attempts
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn grid(&self) -> &CellManager {
        &self.grid
    }

    #[must_use]
    pub const fn addresses(&self) -> &AddressColumn {
        &self.addresses
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words.word_length()
    }

    /// The secret word; front-ends only reveal it once the game is over
    #[must_use]
    pub fn password(&self) -> &Word {
        self.words.password()
    }

    /// Move the grid highlight
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` for positions outside the grid.
    pub fn hover(&mut self, position: Position) -> Result<(), GameError> {
        self.grid.hover(position)
    }

    /// Remove the grid highlight
    pub fn clear_hover(&mut self) {
        self.grid.clear_hover();
    }

    /// Click the cell at `position`
    ///
    /// The clicked cluster, if any, is dissolved before its text is submitted.
    ///
    /// # Errors
    /// Returns `GameError::OutOfBounds` or `GameError::GameOver`.
    pub fn select_at(&mut self, position: Position) -> Result<GuessOutcome, GameError> {
        self.ensure_active()?;
        let selection = self.grid.selection_at(position).ok_or(GameError::OutOfBounds {
            row: position.row,
            col: position.col,
        })?;
        self.submit_selection(selection)
    }

    /// Click a recorded cluster directly
    ///
    /// # Errors
    /// Returns `GameError::UnknownCluster` or `GameError::GameOver`.
    pub fn select_cluster(&mut self, id: ClusterId) -> Result<GuessOutcome, GameError> {
        self.ensure_active()?;
        let selection = self
            .grid
            .selection_of(id)
            .ok_or(GameError::UnknownCluster(id))?;
        self.submit_selection(selection)
    }

    fn submit_selection(&mut self, selection: Selection) -> Result<GuessOutcome, GameError> {
        if let Some(id) = selection.cluster {
            self.grid.dissolve(id)?;
        }
        self.submit_guess(&selection.text)
    }

    /// Evaluate `text` and apply the result
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the session has been won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordhack::config::GameConfig;
    /// use wordhack::game::{Feedback, GameSession};
    ///
    /// let mut session = GameSession::seeded(&GameConfig::default(), 1).unwrap();
    /// let outcome = session.submit_guess("#").unwrap();
    /// assert_eq!(outcome.feedback, Feedback::NotAWord);
    /// assert!(!outcome.attempt_consumed);
    /// ```
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_active()?;

        let before = self.attempts;
        let verdict = evaluate(
            text,
            self.words.password(),
            self.attempts,
            self.reset_chance,
            &mut self.rng,
        );

        let mut bonus = None;
        let mut removed_word = None;
        let feedback = match verdict {
            Verdict::NotAWord => Feedback::NotAWord,
            Verdict::Bonus(BonusEffect::RemoveDud) => {
                if let Some(word) = self.grid.remove_dud(self.words.password()) {
                    log::info!("Dud removed: {word}");
                    bonus = Some(BonusEffect::RemoveDud);
                    removed_word = Some(word.clone());
                    Feedback::DudRemoved(word)
                } else {
                    log::info!("No dud left to remove, resetting attempts");
                    bonus = Some(BonusEffect::ResetAttempts);
                    self.reset_attempts()
                }
            }
            Verdict::Bonus(BonusEffect::ResetAttempts) => {
                log::info!("Attempts reset");
                bonus = Some(BonusEffect::ResetAttempts);
                self.reset_attempts()
            }
            Verdict::Scored(likeness) => {
                self.attempts = self.attempts.saturating_sub(1);
                Feedback::Incorrect(likeness)
            }
            Verdict::Won(_) => {
                log::info!("Password {} found", self.words.password());
                self.state = SessionState::Won;
                Feedback::Won
            }
            Verdict::Lost(_) => {
                log::info!("Out of attempts, terminal locked");
                self.state = SessionState::Lost;
                Feedback::Lost
            }
        };

        log::debug!("Selection {text:?}: {feedback:?}");
        self.history.push(GuessRecord {
            text: text.to_string(),
            feedback: feedback.clone(),
        });

        Ok(GuessOutcome {
            state: self.state,
            feedback,
            attempts_remaining: self.attempts,
            bonus,
            removed_word,
            attempt_consumed: self.attempts < before,
        })
    }

    fn reset_attempts(&mut self) -> Feedback {
        self.attempts = self.starting_attempts;
        Feedback::AttemptsReset
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver(self.state));
        }
        Ok(())
    }
}
