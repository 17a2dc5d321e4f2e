//! One-shot scoring of a guess against a target

use crate::core::GuessRecord;
use crate::output::print_score_result;

/// Score `guess` against `target`, case-insensitively
///
/// Any two strings can be scored; they need not have the same length.
#[must_use]
pub fn score_words(guess: &str, target: &str) -> GuessRecord {
    GuessRecord::new(guess.trim().to_uppercase(), target.trim().to_uppercase())
}

/// Score and print the result
pub fn run_score(guess: &str, target: &str) {
    print_score_result(&score_words(guess, target));
}
