//! Command implementations

pub mod preload;
pub mod score;
pub mod simple;

pub use preload::preload_dictionary;
pub use score::{run_score, score_words};
pub use simple::run_simple;
