//! Core game engine
//!
//! Scoring, alphabet knowledge and the session state machine. Everything in
//! this module is pure and synchronous: no I/O, no randomness and no logging.
//! Targets and word lists are supplied by the caller.

mod alphabet;
mod feedback;
mod session;
mod variant;

pub use alphabet::{Alphabet, AlphabetKnowledge, AlphabetState, KnowledgeFault};
pub use feedback::{GuessRecord, LetterOutcome, score_guess};
pub use session::{GameSession, GameStatus, SessionError};
pub use variant::Variant;
