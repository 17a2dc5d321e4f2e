//! Game variant configuration
//!
//! A variant is the part of a game that differs between the word game and
//! the number game: which symbols are allowed and which guesses are accepted.
//! Scoring and the session state machine are shared.

use super::alphabet::Alphabet;
use rustc_hash::FxHashSet;

/// Alphabet plus the set of acceptable guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: String,
    alphabet: Alphabet,
    lexicon: Option<FxHashSet<String>>,
}

impl Variant {
    /// A variant accepting any string over `alphabet` of the right length
    #[must_use]
    pub fn new(name: impl Into<String>, alphabet: Alphabet) -> Self {
        Self {
            name: name.into(),
            alphabet,
            lexicon: None,
        }
    }

    /// Restrict accepted guesses to `words`
    #[must_use]
    pub fn with_lexicon(mut self, words: FxHashSet<String>) -> Self {
        self.lexicon = Some(words);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Accepted words, if this variant has a word list
    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> Option<&FxHashSet<String>> {
        self.lexicon.as_ref()
    }

    /// Validity predicate for a guess against a target of `target_len` symbols
    ///
    /// A guess is accepted when it has exactly `target_len` symbols, every
    /// symbol is in the alphabet, and it is in the lexicon (if there is one).
    #[must_use]
    pub fn accepts(&self, candidate: &str, target_len: usize) -> bool {
        candidate.chars().count() == target_len
            && self.alphabet.contains_word(candidate)
            && self
                .lexicon
                .as_ref()
                .is_none_or(|words| words.contains(candidate))
    }
}
