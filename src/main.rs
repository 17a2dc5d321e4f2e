//! Wordall - CLI
//!
//! Wordle-style guessing games with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordall::{
    commands::{preload_dictionary, run_score, run_simple},
    games::{self, DEFAULT_WORD_LENGTH, GameOptions, VariantKind, wordle},
    logging,
    wordlists::{
        EmbeddedLoader, FileLoader, MultiFileLoader, ScowlLanguage, ScowlLoader, ScowlOptions,
        WordSource,
    },
};

#[derive(Parser)]
#[command(
    name = "wordall",
    about = "Wordle-style guessing games for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game to play
    #[arg(long, global = true, value_enum, default_value = "wordle")]
    variant: VariantKind,

    /// Number of symbols in the target
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Maximum number of guesses (default: 6 for wordle, 5 for numberle)
    #[arg(short, long, global = true, conflicts_with = "unlimited")]
    guess_limit: Option<usize>,

    /// Allow any number of guesses
    #[arg(long, global = true)]
    unlimited: bool,

    /// Word list file, one word per line (repeatable)
    #[arg(short, long = "dictionary", global = true, value_name = "PATH")]
    dictionaries: Vec<PathBuf>,

    /// SCOWL `final/` directory to read word lists from
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "dictionaries")]
    scowl: Option<PathBuf>,

    /// Largest SCOWL size class to include
    #[arg(long, global = true, default_value_t = 70, value_parser = clap::value_parser!(u8).range(1..=100))]
    scowl_size: u8,

    /// SCOWL regional spelling
    #[arg(long, global = true, value_enum, default_value = "british")]
    scowl_language: ScowlLanguage,

    /// Highest SCOWL spelling variant level to include
    #[arg(long, global = true, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=3))]
    scowl_variants: u8,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Score a guess against a target and print the outcomes
    Score {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },
}

impl Cli {
    fn game_options(&self) -> GameOptions {
        let guess_limit = if self.unlimited {
            None
        } else {
            Some(
                self.guess_limit
                    .unwrap_or_else(|| self.variant.default_guess_limit()),
            )
        };

        GameOptions::new(self.variant)
            .with_word_length(self.length)
            .with_guess_limit(guess_limit)
    }

    fn word_source(&self) -> Result<Box<dyn WordSource>> {
        if let Some(dir) = &self.scowl {
            let options = ScowlOptions {
                max_size: self.scowl_size,
                language: self.scowl_language,
                max_variants: self.scowl_variants,
                ..ScowlOptions::default()
            };
            let loader = ScowlLoader::new(dir, &options)
                .with_context(|| format!("Failed to read SCOWL directory {}", dir.display()))?;
            return Ok(Box::new(loader));
        }

        Ok(match self.dictionaries.as_slice() {
            [] => Box::new(EmbeddedLoader),
            [path] => Box::new(FileLoader::new(path.clone())),
            paths => Box::new(MultiFileLoader::new(paths.to_vec())),
        })
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Score { guess, target } => {
            run_score(&guess, &target);
            Ok(())
        }
        Commands::Play => {
            let (options, source) = prepare(&cli)?;
            run_play_command(options, source.as_ref())
        }
        Commands::Simple => {
            let (options, source) = prepare(&cli)?;
            run_simple_command(&options, source.as_ref())
        }
    }
}

/// Resolve the game options and load the dictionary once up front
fn prepare(cli: &Cli) -> Result<(GameOptions, Box<dyn WordSource>)> {
    let options = cli.game_options();
    info!(variant = %options.kind, length = options.word_length, "starting");

    let source = cli.word_source()?;
    if !options.kind.uses_dictionary() {
        return Ok((options, source));
    }

    let filter = wordle::dictionary_filter(options.word_length);
    let words = preload_dictionary(source.as_ref(), &filter).with_context(|| {
        format!("No usable {}-letter words in the dictionary", options.word_length)
    })?;
    Ok((options, Box::new(words)))
}

fn run_simple_command(options: &GameOptions, source: &dyn WordSource) -> Result<()> {
    let mut rng = rand::rng();
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    run_simple(&mut input, &mut out, || {
        games::new_game(options, source, &mut rng).context("Failed to start a game")
    })
}

fn run_play_command(options: GameOptions, source: &dyn WordSource) -> Result<()> {
    use wordall::interactive::{App, run_tui};

    let app = App::new(options, source).context("Failed to start a game")?;
    run_tui(app)
}
