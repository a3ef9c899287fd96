//! Game state, input handling and projection
//!
//! Hosts feed key symbols to [`Game::dispatch`] and render [`Grid::project`].

mod hints;
mod input;
mod projection;
mod rules;
mod state;

pub use hints::{KEYBOARD_ROWS, LetterHints};
pub use input::Action;
pub use projection::{Cell, Grid, Row, RowKind};
pub use rules::{Rejection, check_submission, is_acceptable, is_winner};
pub use state::{Board, CurrentGuess, Game, GameStatus, Guess, GuessKey};
