//! Per-letter feedback for a single guess
//!
//! Scoring follows the established Wordle convention for repeated symbols:
//! exact matches claim their symbol from the target first, and only the
//! surplus count of a symbol is available for "elsewhere" marks.

use rustc_hash::FxHashMap;
use std::fmt;

/// Result of scoring one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Symbol is in the target at this position
    Correct,
    /// Symbol is in the target, but at another position
    Elsewhere,
    /// Symbol is not in the target (or all its occurrences are already claimed)
    Incorrect,
}

impl LetterOutcome {
    /// Square emoji used by the share format
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Elsewhere => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Score `guess` against `target`, one `(symbol, outcome)` pair per guess position
///
/// The two strings do not need to be the same length. Positions past the end
/// of the target can never be `Correct` but may still be `Elsewhere` while the
/// target has unclaimed copies of the symbol.
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from the pool
/// 2. Second pass: mark remaining positions `Elsewhere` while the pool has copies
///
/// # Examples
/// ```
/// use wordall::core::{LetterOutcome, score_guess};
///
/// let outcomes = score_guess("POPOP", "APPLE");
/// assert_eq!(
///     outcomes,
///     vec![
///         ('P', LetterOutcome::Elsewhere),
///         ('O', LetterOutcome::Incorrect),
///         ('P', LetterOutcome::Correct),
///         ('O', LetterOutcome::Incorrect),
///         ('P', LetterOutcome::Incorrect),
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &str, target: &str) -> Vec<(char, LetterOutcome)> {
    let target: Vec<char> = target.chars().collect();

    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &symbol in &target {
        *available.entry(symbol).or_insert(0) += 1;
    }

    let mut outcomes: Vec<(char, LetterOutcome)> = guess
        .chars()
        .map(|symbol| (symbol, LetterOutcome::Incorrect))
        .collect();

    // First pass: exact matches
    for (i, (symbol, outcome)) in outcomes.iter_mut().enumerate() {
        if target.get(i) == Some(symbol) {
            *outcome = LetterOutcome::Correct;
            if let Some(count) = available.get_mut(symbol) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right symbol, wrong position
    for (symbol, outcome) in &mut outcomes {
        if *outcome == LetterOutcome::Correct {
            continue;
        }

        if let Some(count) = available.get_mut(symbol)
            && *count > 0
        {
            *outcome = LetterOutcome::Elsewhere;
            *count -= 1;
        }
    }

    outcomes
}

/// An accepted guess together with the feedback it earned
///
/// Records are created once per accepted guess and never change. Two records
/// are equal when guess, target and outcomes all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    guess: String,
    target: String,
    outcomes: Vec<(char, LetterOutcome)>,
}

impl GuessRecord {
    /// Score `guess` against `target` and keep the result
    #[must_use]
    pub fn new(guess: impl Into<String>, target: impl Into<String>) -> Self {
        let guess = guess.into();
        let target = target.into();
        let outcomes = score_guess(&guess, &target);

        Self {
            guess,
            target,
            outcomes,
        }
    }

    /// The submitted guess
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The target this guess was scored against
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Per-position outcomes, in guess order
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[(char, LetterOutcome)] {
        &self.outcomes
    }

    /// True when the guess is exactly the target
    #[inline]
    #[must_use]
    pub fn is_exact_match(&self) -> bool {
        self.guess == self.target
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == outcome).count()
    }

    /// Feedback as a row of square emoji, e.g. "🟨⬜🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.outcomes.iter().map(|(_, o)| o.to_emoji()).collect()
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterOutcome::{Correct, Elsewhere, Incorrect};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn guess_all_correct() {
        assert_eq!(
            score_guess("APPLE", "APPLE"),
            vec![
                ('A', Correct),
                ('P', Correct),
                ('P', Correct),
                ('L', Correct),
                ('E', Correct),
            ]
        );
    }

    #[test]
    fn guess_all_incorrect() {
        assert_eq!(
            score_guess("SHOOT", "APPLE"),
            vec![
                ('S', Incorrect),
                ('H', Incorrect),
                ('O', Incorrect),
                ('O', Incorrect),
                ('T', Incorrect),
            ]
        );
    }

    #[test]
    fn guess_elsewhere() {
        assert_eq!(
            score_guess("PALER", "APPLE"),
            vec![
                ('P', Elsewhere),
                ('A', Elsewhere),
                ('L', Elsewhere),
                ('E', Elsewhere),
                ('R', Incorrect),
            ]
        );
    }

    #[test]
    fn guess_double_letter_one_elsewhere() {
        // Middle P is exact, so only one P is left for the first position
        assert_eq!(
            score_guess("POPOP", "APPLE"),
            vec![
                ('P', Elsewhere),
                ('O', Incorrect),
                ('P', Correct),
                ('O', Incorrect),
                ('P', Incorrect),
            ]
        );
    }

    #[test]
    fn guess_double_letter_both_elsewhere() {
        assert_eq!(
            score_guess("POBOP", "APPLE"),
            vec![
                ('P', Elsewhere),
                ('O', Incorrect),
                ('B', Incorrect),
                ('O', Incorrect),
                ('P', Elsewhere),
            ]
        );
    }

    #[test]
    fn exact_match_beats_earlier_duplicate() {
        // Target has one E at the end; the later E is exact, the earlier one gets nothing
        assert_eq!(
            score_guess("EXXXE", "APPLE"),
            vec![
                ('E', Incorrect),
                ('X', Incorrect),
                ('X', Incorrect),
                ('X', Incorrect),
                ('E', Correct),
            ]
        );
    }

    #[test]
    fn guess_longer_than_target() {
        assert_eq!(
            score_guess("ABPOPPEE", "APPLE"),
            vec![
                ('A', Correct),
                ('B', Incorrect),
                ('P', Correct),
                ('O', Incorrect),
                ('P', Elsewhere),
                ('P', Incorrect),
                ('E', Elsewhere),
                ('E', Incorrect),
            ]
        );
    }

    #[test]
    fn guess_shorter_than_target() {
        assert_eq!(
            score_guess("POPP", "APPLE"),
            vec![
                ('P', Elsewhere),
                ('O', Incorrect),
                ('P', Correct),
                ('P', Incorrect),
            ]
        );
    }

    #[test]
    fn guess_empty() {
        assert!(score_guess("", "APPLE").is_empty());
        assert!(score_guess("", "").is_empty());
    }

    #[test]
    fn target_empty() {
        assert_eq!(score_guess("OK", ""), vec![('O', Incorrect), ('K', Incorrect)]);
    }

    #[test]
    fn digits_score_like_letters() {
        assert_eq!(
            score_guess("10010", "00112"),
            vec![
                ('1', Elsewhere),
                ('0', Correct),
                ('0', Elsewhere),
                ('1', Correct),
                ('0', Incorrect),
            ]
        );
    }

    #[test]
    fn record_keeps_inputs() {
        let record = GuessRecord::new("PALER", "APPLE");
        assert_eq!(record.guess(), "PALER");
        assert_eq!(record.target(), "APPLE");
        assert_eq!(record.outcomes(), score_guess("PALER", "APPLE").as_slice());
        assert_eq!(record.count(Elsewhere), 4);
        assert_eq!(record.count(Incorrect), 1);
        assert!(!record.is_exact_match());
    }

    #[test]
    fn record_equality() {
        assert_eq!(
            GuessRecord::new("APPLE", "BREAD"),
            GuessRecord::new("APPLE", "BREAD")
        );
        assert_ne!(
            GuessRecord::new("APPLE", "BREAD"),
            GuessRecord::new("PEARS", "BREAD")
        );
        assert_ne!(
            GuessRecord::new("APPLE", "BREAD"),
            GuessRecord::new("APPLE", "CAKES")
        );
        assert_ne!(
            GuessRecord::new("APPLE", "BREAD"),
            GuessRecord::new("BREAD", "APPLE")
        );
    }

    #[test]
    fn record_emoji_and_display() {
        let record = GuessRecord::new("POPOP", "APPLE");
        assert_eq!(record.to_emoji(), "🟨⬜🟩⬜⬜");
        assert_eq!(record.to_string(), "POPOP 🟨⬜🟩⬜⬜");
        assert!(GuessRecord::new("APPLE", "APPLE").is_exact_match());
    }

    fn occurrences(word: &str, symbol: char) -> usize {
        word.chars().filter(|&c| c == symbol).count()
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(guess in "[A-F]{0,7}", target in "[A-F]{0,7}") {
            prop_assert_eq!(
                GuessRecord::new(guess.clone(), target.clone()),
                GuessRecord::new(guess, target)
            );
        }

        #[test]
        fn one_outcome_per_guess_position(guess in "[A-F]{0,7}", target in "[A-F]{0,7}") {
            let outcomes = score_guess(&guess, &target);
            prop_assert_eq!(outcomes.len(), guess.chars().count());
            prop_assert!(outcomes.iter().map(|(c, _)| *c).eq(guess.chars()));
        }

        #[test]
        fn word_against_itself_is_all_correct(word in "[A-Z]{1,8}") {
            prop_assert!(score_guess(&word, &word).iter().all(|(_, o)| *o == Correct));
        }

        #[test]
        fn disjoint_symbols_are_all_incorrect(guess in "[A-M]{1,8}", target in "[N-Z]{1,8}") {
            prop_assert!(score_guess(&guess, &target).iter().all(|(_, o)| *o == Incorrect));
        }

        #[test]
        fn hits_per_symbol_never_exceed_target_copies(
            guess in "[A-D]{0,6}",
            target in "[A-D]{0,6}",
        ) {
            let outcomes = score_guess(&guess, &target);
            for symbol in ['A', 'B', 'C', 'D'] {
                let hits = outcomes
                    .iter()
                    .filter(|(c, o)| *c == symbol && *o != Incorrect)
                    .count();
                prop_assert_eq!(
                    hits,
                    occurrences(&guess, symbol).min(occurrences(&target, symbol))
                );
            }
        }
    }
}
