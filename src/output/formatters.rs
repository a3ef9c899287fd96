//! Formatting utilities for terminal output

use crate::core::{Feedback, Score};
use crate::game::{Grid, RowKind};

/// Emoji grid of the placed rows, one line per guess
#[must_use]
pub fn grid_to_emoji(grid: &Grid) -> String {
    grid.rows
        .iter()
        .filter(|row| row.kind == RowKind::Final)
        .filter_map(|row| row.score().map(Score::to_emoji))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-letter label for a feedback class, used where color is unavailable
#[must_use]
pub const fn feedback_label(feedback: Option<Feedback>) -> char {
    match feedback {
        Some(Feedback::Correct) => 'G',
        Some(Feedback::Present) => 'Y',
        Some(Feedback::Absent) => '-',
        None => '.',
    }
}

/// Boxed uppercase letter, e.g. " A ", or three spaces when blank
#[must_use]
pub fn letter_box(letter: Option<char>) -> String {
    format!(" {} ", letter.map_or(' ', |c| c.to_ascii_uppercase()))
}
