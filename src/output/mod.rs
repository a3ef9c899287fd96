//! Terminal output formatting
//!
//! Display utilities for the line-oriented mode.

pub mod display;
pub mod formatters;

pub use display::{print_game, print_outcome};
