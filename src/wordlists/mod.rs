//! Dictionaries for word games
//!
//! Word sources supply the set of acceptable words a game draws its target
//! from. The core engine never reads files itself; it receives the loaded set.

mod embedded;
pub mod loader;
pub mod scowl;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{
    EmbeddedLoader, Encoding, FileLoader, LoadError, MemoryLoader, MultiFileLoader, WordFilter,
    WordSource,
};
pub use scowl::{ScowlLanguage, ScowlLoader, ScowlOptions, ScowlSubcategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_plain_lowercase() {
        for &word in WORDS {
            assert!(
                (4..=6).contains(&word.len()),
                "Word '{word}' has unexpected length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn every_default_length_is_covered() {
        for length in 4..=6 {
            assert!(
                WORDS.iter().filter(|w| w.len() == length).count() > 100,
                "too few {length}-letter words"
            );
        }
    }
}
