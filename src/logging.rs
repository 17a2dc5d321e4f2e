//! Tracing subscriber setup
//!
//! Log output goes to stderr so it never mixes with the game board on stdout.
//! `RUST_LOG` takes the usual `EnvFilter` syntax; without it only warnings are
//! shown.

use std::io;
use std::sync::OnceLock;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber
///
/// `verbose` raises this crate's own events to `debug`. Only the first call
/// has any effect.
pub fn init(verbose: bool) {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy();

        if verbose && let Ok(directive) = "wordall=debug".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(true);
        init(false);
        tracing::debug!("still fine after a second init");
    }
}
