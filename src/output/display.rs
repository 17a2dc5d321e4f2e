//! Display functions for game state

use super::formatters::{colored_guess, colored_knowledge, placeholder_row, status_text};
use crate::core::{GameSession, GameStatus, GuessRecord};
use colored::Colorize;
use std::io::{self, Write};

/// Write the guess grid, one row per guess allowed
///
/// Unlimited games show only the guesses made so far plus one empty row.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let rows = match session.guess_limit() {
        Some(limit) => limit.max(session.history().len()),
        None if session.is_finished() => session.history().len(),
        None => session.history().len() + 1,
    };

    writeln!(out)?;
    for row in 0..rows {
        match session.history().get(row) {
            Some(record) => writeln!(out, "  {}", colored_guess(record))?,
            None => writeln!(out, "  {}", placeholder_row(session.target_len()))?,
        }
    }
    writeln!(out)?;
    writeln!(out, "  {}", colored_knowledge(session.knowledge()))?;
    writeln!(out)?;

    Ok(())
}

/// Write the status line, highlighted once the game is over
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_status<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let text = status_text(session);
    match session.status() {
        GameStatus::InProgress => writeln!(out, "{text}"),
        GameStatus::Won => writeln!(out, "{}", format!("🎉 {text}").green().bold()),
        GameStatus::Lost => writeln!(out, "{}", format!("❌ {text}").red().bold()),
    }
}

/// Print one scored guess with its share-format emoji
pub fn print_score_result(record: &GuessRecord) {
    println!("\n  {}  {}", colored_guess(record), record.to_emoji());
    for &(symbol, outcome) in record.outcomes() {
        println!("    {symbol}: {outcome:?}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Variant};

    fn render(session: &GameSession) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_board(&mut out, session).unwrap();
        write_status(&mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn game(limit: Option<usize>) -> GameSession {
        let words = ["APPLE", "BREAD"].into_iter().map(String::from).collect();
        let variant = Variant::new("wordle", Alphabet::LETTERS).with_lexicon(words);
        GameSession::new(variant, "APPLE", limit).unwrap()
    }

    #[test]
    fn board_has_a_row_per_allowed_guess() {
        let mut session = game(Some(3));
        session.submit_guess("BREAD").unwrap();
        let text = render(&session);

        assert!(text.contains(" B  R  E  A  D "));
        assert_eq!(text.matches(" #  #  #  #  # ").count(), 2);
        assert!(text.contains("In progress: 1 of 3 guesses used"));
    }

    #[test]
    fn unlimited_board_grows() {
        let mut session = game(None);
        session.submit_guess("BREAD").unwrap();
        session.submit_guess("BREAD").unwrap();
        let text = render(&session);

        assert_eq!(text.matches(" B  R  E  A  D ").count(), 2);
        assert_eq!(text.matches(" #  #  #  #  # ").count(), 1);
    }

    #[test]
    fn finished_board_reports_result() {
        let mut session = game(Some(6));
        session.submit_guess("APPLE").unwrap();
        let text = render(&session);

        assert!(text.contains("Solved in 1 guess!"));
    }
}
