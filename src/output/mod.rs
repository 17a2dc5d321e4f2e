//! Terminal output formatting
//!
//! Colored rendering of guesses, alphabet knowledge and game status for the
//! line-mode interface.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_board, write_status};
