//! Command implementations

pub mod simple;

pub use simple::{LineCommand, handle_line, run_simple};
