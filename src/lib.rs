//! Wordle Game
//!
//! A Wordle-style word guessing game: a fixed five-letter solution, six
//! slots, per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Game, GameStatus, Grid};
//!
//! let game = ["t", "e", "s", "t", "e", "Enter"]
//!     .iter()
//!     .fold(Game::new(), |game, key| game.dispatch(key));
//!
//! assert_eq!(game.status(), GameStatus::Won { slot: 0 });
//! let grid = Grid::project(&game);
//! assert_eq!(grid.rows[0].text(), "teste");
//! ```

// Core domain types
pub mod core;

// Game state machine and render model
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
