//! Dictionary preloading
//!
//! Reading a large SCOWL selection takes a noticeable moment. The words are
//! loaded once behind a spinner and kept in memory so that starting another
//! game does not touch the disk again.

use crate::wordlists::{LoadError, MemoryLoader, WordFilter, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Load every word `filter` keeps from `source` into memory
///
/// # Errors
///
/// Returns whatever error `source` reports, including
/// [`LoadError::NoWordsFound`] when nothing survives the filter.
pub fn preload_dictionary(
    source: &dyn WordSource,
    filter: &WordFilter,
) -> Result<MemoryLoader, LoadError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Loading dictionary...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let words = source.word_dictionary(filter);
    spinner.finish_and_clear();

    let words = words?;
    info!(
        words = words.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "dictionary loaded"
    );

    Ok(MemoryLoader::new(words))
}
