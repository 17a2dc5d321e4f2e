//! Alphabets and cumulative per-symbol knowledge
//!
//! `AlphabetKnowledge` is the only state in a game that depends on the path
//! of guesses taken. Each symbol moves through a small lattice and never
//! moves back:
//!
//! ```text
//! NotGuessed ──► FoundElsewhere ──► Found
//!     │                               ▲
//!     └──────────► Unused ────────────┘
//! ```

use super::feedback::{GuessRecord, LetterOutcome};
use thiserror::Error;

/// Fixed set of symbols a game's targets and guesses are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet(&'static str);

impl Alphabet {
    /// Uppercase English letters A-Z
    pub const LETTERS: Self = Self("ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Decimal digits 0-9
    pub const DIGITS: Self = Self("0123456789");

    /// Create an alphabet from its symbols, in display order
    #[must_use]
    pub const fn new(symbols: &'static str) -> Self {
        Self(symbols)
    }

    /// Symbols in display order
    pub fn symbols(self) -> impl Iterator<Item = char> {
        self.0.chars()
    }

    /// Number of symbols
    #[must_use]
    pub fn len(self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(self, symbol: char) -> bool {
        self.0.contains(symbol)
    }

    /// True if every symbol of `word` belongs to this alphabet
    #[must_use]
    pub fn contains_word(self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    fn index_of(self, symbol: char) -> Option<usize> {
        self.symbols().position(|c| c == symbol)
    }
}

/// What the player has learned about one alphabet symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetState {
    /// Guessed in its correct position at least once
    Found,
    /// Known to be in the target, position not yet hit
    FoundElsewhere,
    /// Guessed and known not to be in the target
    Unused,
    /// Not guessed yet
    NotGuessed,
}

impl AlphabetState {
    /// State after observing `outcome` for this symbol
    ///
    /// Returns `None` when an `Elsewhere` outcome arrives for a symbol that is
    /// already `Unused`. Correct scoring fed in guess order never does this.
    #[must_use]
    pub const fn after(self, outcome: LetterOutcome) -> Option<Self> {
        match (outcome, self) {
            (LetterOutcome::Correct, _) => Some(Self::Found),
            (LetterOutcome::Elsewhere, Self::Found) => Some(Self::Found),
            (LetterOutcome::Elsewhere, Self::Unused) => None,
            (LetterOutcome::Elsewhere, _) => Some(Self::FoundElsewhere),
            (LetterOutcome::Incorrect, Self::NotGuessed) => Some(Self::Unused),
            (LetterOutcome::Incorrect, state) => Some(state),
        }
    }
}

/// Knowledge folding hit a state that correct scoring cannot produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeFault {
    #[error("symbol '{symbol}' scored elsewhere after being ruled out")]
    ElsewhereAfterUnused { symbol: char },

    #[error("symbol '{symbol}' is not in the game alphabet")]
    UnknownSymbol { symbol: char },
}

/// Per-symbol knowledge accumulated over every guess of a game
///
/// Updates never mutate in place: [`AlphabetKnowledge::apply`] returns the
/// next map and leaves `self` untouched, so a failed update cannot leave a
/// half-applied guess behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetKnowledge {
    alphabet: Alphabet,
    states: Vec<AlphabetState>,
}

impl AlphabetKnowledge {
    /// Every symbol starts out `NotGuessed`
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: vec![AlphabetState::NotGuessed; alphabet.len()],
        }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Current state of `symbol`, or `None` if it is outside the alphabet
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<AlphabetState> {
        self.alphabet.index_of(symbol).map(|i| self.states[i])
    }

    /// `(symbol, state)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, AlphabetState)> + '_ {
        self.alphabet.symbols().zip(self.states.iter().copied())
    }

    /// Symbols currently in `state`, in alphabet order
    #[must_use]
    pub fn symbols_in(&self, state: AlphabetState) -> Vec<char> {
        self.iter()
            .filter(|&(_, s)| s == state)
            .map(|(c, _)| c)
            .collect()
    }

    /// Fold one guess into the knowledge, returning the updated map
    ///
    /// # Errors
    /// Returns a [`KnowledgeFault`] if the outcomes contain a symbol outside
    /// the alphabet or an impossible `Unused` → `FoundElsewhere` step.
    pub fn apply(&self, record: &GuessRecord) -> Result<Self, KnowledgeFault> {
        self.apply_outcomes(record.outcomes())
    }

    /// Fold raw outcomes, in guess order, into a copy of this knowledge
    ///
    /// Outcomes are applied one after another, so a `Correct` later in the
    /// guess still lifts a symbol that an earlier `Incorrect` copy marked
    /// `Unused`.
    ///
    /// # Errors
    /// See [`AlphabetKnowledge::apply`].
    pub fn apply_outcomes(
        &self,
        outcomes: &[(char, LetterOutcome)],
    ) -> Result<Self, KnowledgeFault> {
        let mut next = self.clone();

        for &(symbol, outcome) in outcomes {
            let index = next
                .alphabet
                .index_of(symbol)
                .ok_or(KnowledgeFault::UnknownSymbol { symbol })?;

            next.states[index] = next.states[index]
                .after(outcome)
                .ok_or(KnowledgeFault::ElsewhereAfterUnused { symbol })?;
        }

        Ok(next)
    }
}
