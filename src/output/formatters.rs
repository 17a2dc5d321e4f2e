//! Formatting utilities for terminal output

use crate::core::{AlphabetKnowledge, AlphabetState, GameSession, GameStatus, GuessRecord, LetterOutcome};
use colored::{ColoredString, Colorize};

/// One symbol tile, colored by its outcome
#[must_use]
pub fn outcome_tile(symbol: char, outcome: LetterOutcome) -> ColoredString {
    let tile = format!(" {symbol} ");
    match outcome {
        LetterOutcome::Correct => tile.black().on_green().bold(),
        LetterOutcome::Elsewhere => tile.black().on_yellow().bold(),
        LetterOutcome::Incorrect => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    record
        .outcomes()
        .iter()
        .map(|&(symbol, outcome)| outcome_tile(symbol, outcome).to_string())
        .collect()
}

/// Placeholder row for a guess not yet made
#[must_use]
pub fn placeholder_row(length: usize) -> String {
    " # ".repeat(length).bright_black().to_string()
}

/// One alphabet symbol, colored by what is known about it
#[must_use]
pub fn knowledge_tile(symbol: char, state: AlphabetState) -> ColoredString {
    let tile = symbol.to_string();
    match state {
        AlphabetState::Found => tile.black().on_green().bold(),
        AlphabetState::FoundElsewhere => tile.black().on_yellow().bold(),
        AlphabetState::Unused => tile.bright_black(),
        AlphabetState::NotGuessed => tile.white().bold(),
    }
}

/// The whole alphabet as a strip of colored symbols
#[must_use]
pub fn colored_knowledge(knowledge: &AlphabetKnowledge) -> String {
    knowledge
        .iter()
        .map(|(symbol, state)| knowledge_tile(symbol, state).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text summary of where a game stands
#[must_use]
pub fn status_text(session: &GameSession) -> String {
    let used = session.history().len();
    let plural = if used == 1 { "guess" } else { "guesses" };

    match session.status() {
        GameStatus::InProgress => match session.guess_limit() {
            Some(limit) => format!("In progress: {used} of {limit} guesses used"),
            None => format!("In progress: {used} {plural} so far"),
        },
        GameStatus::Won => format!("Solved in {used} {plural}!"),
        GameStatus::Lost => format!(
            "Out of guesses. The answer was {}",
            session.revealed_target().unwrap_or_default()
        ),
    }
}
