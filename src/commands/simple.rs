//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line read is a guess, except for the
//! `:new` and `:quit` commands.

use crate::core::{GameSession, GameStatus, SessionError};
use crate::output::{write_board, write_status};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the line-mode game loop until `:quit` or end of input
///
/// `new_game` is called for the first game and for every `:new`.
///
/// # Errors
///
/// Returns an error on I/O failure, if `new_game` fails, or if the session
/// reports an internal fault.
pub fn run_simple<R, W, F>(input: &mut R, out: &mut W, mut new_game: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> Result<GameSession>,
{
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Guess the hidden word, one line per guess".bold())?;
    writeln!(out, "{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "Commands: ':new' for a new game, ':quit' to exit")?;

    let mut session = new_game()?;
    announce(out, &session)?;

    let mut played = 0_usize;
    let mut won = 0_usize;
    let mut line = String::new();

    loop {
        write!(out, "Guess> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let guess = line.trim().to_uppercase();
        match guess.as_str() {
            "" => continue,
            ":QUIT" | ":Q" | ":EXIT" => break,
            ":NEW" | ":N" => {
                session = new_game()?;
                writeln!(out, "\n🔄 New game started!")?;
                announce(out, &session)?;
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&guess) {
            Ok(_) => {
                debug!(guess = %guess, status = ?session.status(), "guess accepted");
                write_board(out, &session)?;
                write_status(out, &session)?;

                if session.is_finished() {
                    played += 1;
                    if session.status() == GameStatus::Won {
                        won += 1;
                    }
                    writeln!(out, "Games: {played} | Won: {won}")?;
                    writeln!(out, "Type ':new' to play again or ':quit' to exit")?;
                }
            }
            Err(SessionError::InvalidGuess(_)) => {
                writeln!(
                    out,
                    "{} {guess} is not a valid guess ({} symbols expected)",
                    "❌".red(),
                    session.target_len()
                )?;
            }
            Err(SessionError::GameAlreadyFinished) => {
                writeln!(out, "This game is over. Type ':new' to play again")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "👋 Thanks for playing!")?;
    Ok(())
}

fn announce<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    let limit = session
        .guess_limit()
        .map_or_else(|| "unlimited guesses".to_string(), |n| format!("{n} guesses"));
    writeln!(
        out,
        "\n{}: {} symbols, {limit}",
        session.variant().name().to_uppercase(),
        session.target_len()
    )?;
    write_board(out, session)?;
    Ok(())
}
