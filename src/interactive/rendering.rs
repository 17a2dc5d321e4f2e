//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{AlphabetState, GameSession, GameStatus, GuessRecord, LetterOutcome};
use crate::output::formatters::status_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Guess grid
            Constraint::Length(3), // Alphabet
            Constraint::Length(3), // Input
            Constraint::Length(7), // Messages
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, &app.session, chunks[1]);
    render_alphabet(f, &app.session, chunks[2]);
    render_input(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 {} - {} symbols",
        app.session.variant().name().to_uppercase(),
        app.session.target_len()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn outcome_style(outcome: LetterOutcome) -> Style {
    let (bg, fg) = match outcome {
        LetterOutcome::Correct => (Color::Green, Color::Black),
        LetterOutcome::Elsewhere => (Color::Yellow, Color::Black),
        LetterOutcome::Incorrect => (Color::DarkGray, Color::White),
    };
    Style::new().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let spans: Vec<Span> = record
        .outcomes()
        .iter()
        .flat_map(|&(symbol, outcome)| {
            [
                Span::styled(format!(" {symbol} "), outcome_style(outcome)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn placeholder_line(length: usize) -> Line<'static> {
    Line::styled(" #  ".repeat(length), Style::default().fg(Color::DarkGray))
}

/// Rows shown: every allowed guess, or the guesses so far plus one when unlimited
fn grid_rows(session: &GameSession) -> usize {
    let used = session.history().len();
    match session.guess_limit() {
        Some(limit) => limit.max(used),
        None if session.is_finished() => used,
        None => used + 1,
    }
}

fn render_grid(f: &mut Frame, session: &GameSession, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));
    let rows = grid_rows(session);

    let lines: Vec<Line> = (rows.saturating_sub(visible)..rows)
        .map(|row| match session.history().get(row) {
            Some(record) => guess_line(record),
            None => placeholder_line(session.target_len()),
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_alphabet(f: &mut Frame, session: &GameSession, area: Rect) {
    let spans: Vec<Span> = session
        .knowledge()
        .iter()
        .flat_map(|(symbol, state)| {
            let style = match state {
                AlphabetState::Found => Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                AlphabetState::FoundElsewhere => Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                AlphabetState::Unused => Style::default().fg(Color::DarkGray),
                AlphabetState::NotGuessed => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            };
            [Span::styled(symbol.to_string(), style), Span::raw(" ")]
        })
        .collect();

    let alphabet = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Alphabet ").borders(Borders::ALL));
    f.render_widget(alphabet, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (title, content, color) = match session.status() {
        GameStatus::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Ctrl+N for a new game ".to_string(),
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            format!(
                " The answer was {} | Ctrl+N for a new game ",
                session.revealed_target().unwrap_or_default()
            ),
            String::new(),
            Color::Red,
        ),
        GameStatus::InProgress => {
            let typed = app.input_buffer.chars().count();
            let color = if typed < session.target_len() {
                Color::Yellow
            } else if app.input_is_valid() {
                Color::Green
            } else {
                Color::Red
            };
            let padding = "_".repeat(session.target_len().saturating_sub(typed));
            (
                " Enter Guess | Enter to submit ".to_string(),
                format!("{}{padding}", app.input_buffer),
                color,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let progress = Paragraph::new(status_text(&app.session)).alignment(Alignment::Center);
    f.render_widget(progress, rows[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let stats = Paragraph::new(format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
