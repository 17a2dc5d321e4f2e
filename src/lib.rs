//! Wordall
//!
//! Wordle-style guessing games for the terminal. A hidden target is guessed one
//! word at a time; every guess is scored symbol by symbol and the game keeps
//! track of what has been learned about each symbol of the alphabet.
//!
//! Two variants ship: classic Wordle over a dictionary, and Numberle over
//! zero-padded digit strings.
//!
//! # Quick Start
//!
//! ```rust
//! use wordall::core::{Alphabet, GameSession, GameStatus, LetterOutcome, Variant};
//!
//! let words = ["APPLE", "PALER"].into_iter().map(String::from).collect();
//! let variant = Variant::new("wordle", Alphabet::LETTERS).with_lexicon(words);
//! let mut game = GameSession::new(variant, "APPLE", Some(6)).unwrap();
//!
//! assert!(!game.submit_guess("PALER").unwrap());
//! assert_eq!(game.history()[0].outcomes()[4], ('R', LetterOutcome::Incorrect));
//!
//! assert!(game.submit_guess("APPLE").unwrap());
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Scoring, alphabet knowledge and the game state machine
pub mod core;

// Variant factories
pub mod games;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
