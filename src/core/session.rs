//! Game session state machine
//!
//! A session owns one hidden target, the guesses made so far and the
//! alphabet knowledge they produced. The only way to change it is
//! [`GameSession::submit_guess`], which either applies a guess completely or
//! rejects it without touching anything.

use super::alphabet::{AlphabetKnowledge, KnowledgeFault};
use super::feedback::GuessRecord;
use super::variant::Variant;
use thiserror::Error;

/// Overall progress of a game
///
/// `InProgress` is the only non-terminal state; `Won` and `Lost` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Errors from creating or playing a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Candidate failed the variant's validity predicate
    #[error("invalid guess: {0:?}")]
    InvalidGuess(String),

    /// The game is already won or lost
    #[error("game already finished")]
    GameAlreadyFinished,

    /// Target is empty or uses symbols outside the variant's alphabet
    #[error("invalid target: {0:?}")]
    InvalidTarget(String),

    /// A guess limit of zero could never be reached
    #[error("guess limit must be at least 1")]
    ZeroGuessLimit,

    /// Scoring and knowledge tracking disagree; this is a bug, not bad input
    #[error("internal consistency fault: {0}")]
    InconsistentKnowledge(#[from] KnowledgeFault),
}

/// One game: a hidden target and the guesses made against it
#[derive(Debug, Clone)]
pub struct GameSession {
    variant: Variant,
    target: String,
    guess_limit: Option<usize>,
    history: Vec<GuessRecord>,
    knowledge: AlphabetKnowledge,
    status: GameStatus,
}

impl GameSession {
    /// Start a game against `target`
    ///
    /// With `guess_limit` of `None` the game only ends when the target is
    /// guessed.
    ///
    /// # Errors
    /// - [`SessionError::InvalidTarget`] if the target is empty or contains
    ///   symbols outside the variant's alphabet
    /// - [`SessionError::ZeroGuessLimit`] if `guess_limit` is `Some(0)`
    ///
    /// # Examples
    /// ```
    /// use wordall::core::{Alphabet, GameSession, GameStatus, Variant};
    ///
    /// let variant = Variant::new("numberle", Alphabet::DIGITS);
    /// let mut game = GameSession::new(variant, "00731", Some(5)).unwrap();
    ///
    /// assert!(!game.submit_guess("12345").unwrap());
    /// assert!(game.submit_guess("00731").unwrap());
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(
        variant: Variant,
        target: impl Into<String>,
        guess_limit: Option<usize>,
    ) -> Result<Self, SessionError> {
        let target = target.into();

        if target.is_empty() || !variant.alphabet().contains_word(&target) {
            return Err(SessionError::InvalidTarget(target));
        }
        if guess_limit == Some(0) {
            return Err(SessionError::ZeroGuessLimit);
        }

        let knowledge = AlphabetKnowledge::new(variant.alphabet());

        Ok(Self {
            variant,
            target,
            guess_limit,
            history: Vec::new(),
            knowledge,
            status: GameStatus::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// Returns `true` when this guess finished the game (won or lost).
    ///
    /// # Errors
    /// - [`SessionError::GameAlreadyFinished`] if the game is over
    /// - [`SessionError::InvalidGuess`] if the variant rejects `candidate`
    /// - [`SessionError::InconsistentKnowledge`] on an internal scoring fault
    ///
    /// No state changes when an error is returned.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<bool, SessionError> {
        if self.status.is_finished() {
            return Err(SessionError::GameAlreadyFinished);
        }

        if !self.is_valid_guess(candidate) {
            return Err(SessionError::InvalidGuess(candidate.to_string()));
        }

        let record = GuessRecord::new(candidate, self.target.as_str());
        // Compute everything fallible before committing
        let knowledge = self.knowledge.apply(&record)?;
        let won = record.is_exact_match();

        self.knowledge = knowledge;
        self.history.push(record);

        self.status = if won {
            GameStatus::Won
        } else if self
            .guess_limit
            .is_some_and(|limit| self.history.len() >= limit)
        {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(self.status.is_finished())
    }

    /// Whether `candidate` would be accepted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, candidate: &str) -> bool {
        self.variant.accepts(candidate, self.target_len())
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &AlphabetKnowledge {
        &self.knowledge
    }

    #[inline]
    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    #[inline]
    #[must_use]
    pub const fn guess_limit(&self) -> Option<usize> {
        self.guess_limit
    }

    /// Guesses left before the game is lost
    ///
    /// `None` for unlimited games, finished or not; `Some(0)` once a limited
    /// game is over.
    #[must_use]
    pub fn remaining_guesses(&self) -> Option<usize> {
        let limit = self.guess_limit?;
        if self.is_finished() {
            return Some(0);
        }
        Some(limit.saturating_sub(self.history.len()))
    }

    /// Number of symbols in the target, which is also the required guess length
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target.chars().count()
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&str> {
        self.is_finished().then_some(self.target.as_str())
    }
}
