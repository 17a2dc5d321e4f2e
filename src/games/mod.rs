//! Game variants
//!
//! Each variant supplies an alphabet, a validity rule and a way to pick a
//! target. They all produce the same [`GameSession`]; nothing about scoring
//! or game flow is variant-specific.

pub mod numberle;
pub mod wordle;

use crate::core::{GameSession, SessionError};
use crate::wordlists::{LoadError, WordSource};
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::info;

/// Target length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Available game variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum VariantKind {
    /// Guess a word from the dictionary
    #[default]
    Wordle,
    /// Guess a zero-padded number
    Numberle,
}

impl VariantKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => wordle::NAME,
            Self::Numberle => numberle::NAME,
        }
    }

    #[must_use]
    pub const fn default_guess_limit(self) -> usize {
        match self {
            Self::Wordle => 6,
            Self::Numberle => 5,
        }
    }

    /// Whether starting a game needs a word source
    #[must_use]
    pub const fn uses_dictionary(self) -> bool {
        matches!(self, Self::Wordle)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from starting a new game
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("unsupported target length {0}")]
    UnsupportedLength(usize),
}

/// Settings for starting games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub kind: VariantKind,
    pub word_length: usize,
    /// `None` for unlimited guesses
    pub guess_limit: Option<usize>,
}

impl GameOptions {
    /// Defaults for `kind`: five symbols and the variant's usual guess limit
    #[must_use]
    pub const fn new(kind: VariantKind) -> Self {
        Self {
            kind,
            word_length: DEFAULT_WORD_LENGTH,
            guess_limit: Some(kind.default_guess_limit()),
        }
    }

    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_guess_limit(mut self, guess_limit: Option<usize>) -> Self {
        self.guess_limit = guess_limit;
        self
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new(VariantKind::default())
    }
}

/// Start a game of the configured variant
///
/// `source` is only consulted by dictionary-backed variants.
///
/// # Errors
///
/// Returns [`SetupError`] if the dictionary cannot be loaded, the length is
/// unsupported, or the session rejects the configuration.
pub fn new_game<R: Rng + ?Sized>(
    options: &GameOptions,
    source: &dyn WordSource,
    rng: &mut R,
) -> Result<GameSession, SetupError> {
    let session = match options.kind {
        VariantKind::Wordle => {
            wordle::new_game(source, options.word_length, options.guess_limit, rng)?
        }
        VariantKind::Numberle => {
            numberle::new_game(options.word_length, options.guess_limit, rng)?
        }
    };

    info!(
        variant = %options.kind,
        length = options.word_length,
        guess_limit = ?options.guess_limit,
        "new game"
    );

    Ok(session)
}
