//! Classic word game
//!
//! The target is a random dictionary word and only dictionary words of the
//! same length are accepted as guesses.

use super::SetupError;
use crate::core::{Alphabet, GameSession, Variant};
use crate::wordlists::{LoadError, WordFilter, WordSource};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

pub const NAME: &str = "wordle";

/// Filter applied to the dictionary: uppercase A-Z words of `word_length`
#[must_use]
pub const fn dictionary_filter(word_length: usize) -> WordFilter {
    WordFilter::new()
        .with_length(word_length)
        .uppercase()
        .with_alphabet(Alphabet::LETTERS)
}

/// Word game variant accepting exactly `words`
#[must_use]
pub fn variant(words: FxHashSet<String>) -> Variant {
    Variant::new(NAME, Alphabet::LETTERS).with_lexicon(words)
}

/// Pick a target uniformly from `words`
///
/// Words are sorted first so a seeded `rng` always gives the same target.
pub fn select_target<R: Rng + ?Sized>(words: &FxHashSet<String>, rng: &mut R) -> Option<String> {
    let mut candidates: Vec<&String> = words.iter().collect();
    candidates.sort_unstable();
    candidates.choose(rng).map(|word| (*word).clone())
}

/// Load the dictionary from `source` and start a game
///
/// # Errors
///
/// Returns [`SetupError`] if no words of `word_length` can be loaded or the
/// guess limit is zero.
pub fn new_game<R: Rng + ?Sized>(
    source: &dyn WordSource,
    word_length: usize,
    guess_limit: Option<usize>,
    rng: &mut R,
) -> Result<GameSession, SetupError> {
    if word_length == 0 {
        return Err(SetupError::UnsupportedLength(word_length));
    }

    let words = source.word_dictionary(&dictionary_filter(word_length))?;
    let target = select_target(&words, rng).ok_or(LoadError::NoWordsFound)?;
    debug!(words = words.len(), "dictionary ready");

    Ok(GameSession::new(variant(words), target, guess_limit)?)
}
