//! Core domain types for the game
//!
//! Words, game constants and letter scoring. Everything here is pure and
//! independent of any host.

mod score;
mod word;

pub use score::{Feedback, Score};
pub use word::{Word, WordError};

/// Length of the solution and of every guess
pub const WORD_SIZE: usize = 5;

/// Number of guess slots on the board
pub const TRIES: usize = 6;

/// The fixed solution for every game
pub const SOLUTION: &str = "teste";
