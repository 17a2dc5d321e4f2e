//! TUI application state and logic

use crate::core::{GameSession, GameStatus, SessionError};
use crate::games::{self, GameOptions, SetupError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, warn};

/// Application state
pub struct App<'a> {
    pub options: GameOptions,
    source: &'a dyn WordSource,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Internal fault that ended the app; returned from [`run_tui`]
    pub fault: Option<SessionError>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

const MAX_MESSAGES: usize = 5;

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if no game can be started from `source`.
    pub fn new(options: GameOptions, source: &'a dyn WordSource) -> Result<Self, SetupError> {
        let session = games::new_game(&options, source, &mut rand::rng())?;
        Ok(Self::with_session(options, source, session))
    }

    /// Wrap an existing session; later games are drawn from `source`
    #[must_use]
    pub fn with_session(
        options: GameOptions,
        source: &'a dyn WordSource,
        session: GameSession,
    ) -> Self {
        let mut app = Self {
            options,
            source,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            fault: None,
        };
        app.greet();
        app
    }

    fn greet(&mut self) {
        let limit = self
            .session
            .guess_limit()
            .map_or_else(|| "as many guesses as you like".to_string(), |n| format!("{n} guesses"));
        self.add_message(
            &format!(
                "Guess the {}-symbol {} in {limit}",
                self.session.target_len(),
                self.session.variant().name()
            ),
            MessageStyle::Info,
        );
    }

    /// Whether the pending input would be accepted as a guess
    #[must_use]
    pub fn input_is_valid(&self) -> bool {
        self.session.is_valid_guess(&self.input_buffer)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only key presses; Windows also reports releases
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char(c) if !ctrl => self.push_symbol(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn push_symbol(&mut self, c: char) {
        if self.session.is_finished() || c.is_whitespace() {
            return;
        }
        // Some symbols uppercase to several (ß -> SS); take all or none
        let upper: String = c.to_uppercase().collect();
        if self.input_buffer.chars().count() + upper.chars().count() <= self.session.target_len() {
            self.input_buffer.push_str(&upper);
        }
    }

    pub fn submit(&mut self) {
        if self.session.is_finished() {
            self.add_message("Game over. Press Ctrl+N for a new game", MessageStyle::Info);
            return;
        }
        if self.input_buffer.is_empty() {
            return;
        }

        let guess = self.input_buffer.clone();
        match self.session.submit_guess(&guess) {
            Ok(_) => {
                debug!(guess = %guess, status = ?self.session.status(), "guess accepted");
                self.input_buffer.clear();
                self.record_result();
            }
            Err(err) => self.reject(&guess, err),
        }
    }

    fn reject(&mut self, guess: &str, err: SessionError) {
        match err {
            SessionError::InvalidGuess(_) => {
                self.add_message(&format!("{guess} is not a valid guess"), MessageStyle::Error);
            }
            SessionError::InconsistentKnowledge(_) => {
                error!(error = %err, guess, "internal fault, stopping");
                self.fault = Some(err);
                self.should_quit = true;
            }
            err => {
                warn!(error = %err, "guess rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn record_result(&mut self) {
        let used = self.session.history().len();
        match self.session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;

                let celebration = match used {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    n => format!("🎉 SOLVED in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press Ctrl+N for a new game or Esc to quit", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                let target = self.session.revealed_target().unwrap_or_default();
                self.add_message(
                    &format!("Out of guesses. The answer was {target}"),
                    MessageStyle::Error,
                );
                self.add_message("Press Ctrl+N for a new game or Esc to quit", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        match games::new_game(&self.options, self.source, &mut rand::rng()) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                self.greet();
            }
            Err(err) => {
                warn!(error = %err, "could not start a new game");
                self.add_message(&format!("Could not start a game: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    match app.fault.take() {
        Some(fault) => Err(fault.into()),
        None => Ok(()),
    }
}
