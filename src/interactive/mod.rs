//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, key_symbol, run_tui};
