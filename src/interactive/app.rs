//! TUI application state and event loop

use crate::core::TRIES;
use crate::game::{Game, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Show the solution and the in-progress guess
    pub reveal: bool,
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

/// Session-only counts, never persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by slot index
    pub guess_distribution: [usize; TRIES],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Translate a terminal key into the symbol the game understands
///
/// Letters pass through unchanged, so uppercase input reaches the game and
/// is ignored there.
#[must_use]
pub fn key_symbol(key: &KeyEvent) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(reveal: bool) -> Self {
        Self {
            game: Game::new(),
            messages: vec![Message {
                text: "Guess the word! Ctrl+R restarts, Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            reveal,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            _ => {
                if let Some(symbol) = key_symbol(&key) {
                    self.dispatch(&symbol);
                }
            }
        }
    }

    /// Feed a key symbol to the game and react to the outcome
    pub fn dispatch(&mut self, symbol: &str) {
        let was_over = self.game.status().is_over();
        self.game = self.game.clone().dispatch(symbol);

        if !was_over {
            self.record_outcome();
        }
    }

    pub fn restart(&mut self) {
        self.game = self.game.clone().restart();
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn record_outcome(&mut self) {
        match self.game.status() {
            GameStatus::Won { slot } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[slot] += 1;

                let celebration = match slot + 1 {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    _ => "NICE WORK! Solved!",
                };
                debug!(slot, "game won");
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Ctrl+R for a new game or Esc to quit.", MessageStyle::Info);
            }
            GameStatus::Exhausted => {
                self.stats.total_games += 1;
                debug!("game exhausted");
                self.add_message(
                    "Out of guesses! Press Ctrl+R to try again.",
                    MessageStyle::Error,
                );
            }
            GameStatus::Empty | GameStatus::InProgress => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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

    // Restore terminal before reporting loop errors
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
