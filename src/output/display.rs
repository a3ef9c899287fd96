//! Colored board printing for the line-oriented mode

use super::formatters::{feedback_label, grid_to_emoji, letter_box};
use crate::core::{Feedback, SOLUTION};
use crate::game::{Cell, Game, GameStatus, Grid, KEYBOARD_ROWS, LetterHints, RowKind};
use colored::{ColoredString, Colorize};

fn paint(text: &str, feedback: Option<Feedback>) -> ColoredString {
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

fn render_cell(cell: &Cell, kind: RowKind) -> String {
    match kind {
        RowKind::Final => paint(&letter_box(cell.letter), cell.feedback).to_string(),
        RowKind::Active => {
            let letter = cell.letter.map_or(' ', |c| c.to_ascii_uppercase());
            format!("[{}]", letter.to_string().bright_white().bold())
        }
        RowKind::Blank => "[ ]".bright_black().to_string(),
    }
}

/// Render the board, one line per slot
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    grid.rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.cells.iter().map(|c| render_cell(c, row.kind)).collect();
            let labels: String = row.cells.iter().map(|c| feedback_label(c.feedback)).collect();
            format!("  {}   {}", cells.join(""), labels.bright_black())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the keyboard colored by the best feedback per letter
#[must_use]
pub fn render_keyboard(hints: &LetterHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| paint(&c.to_ascii_uppercase().to_string(), hints.get(c)).to_string())
                .collect();
            format!("  {}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print board and keyboard for `game`
pub fn print_game(game: &Game, reveal: bool) {
    let grid = Grid::project(game);

    println!("\n{}", "─".repeat(40).cyan());
    if reveal {
        println!(
            "  {} {}   {} {:?} (slot {})",
            "solution:".bright_black(),
            SOLUTION.bright_yellow(),
            "guess:".bright_black(),
            game.current().value(),
            game.current().number()
        );
    }
    println!("{}", render_grid(&grid));
    println!();
    println!("{}", render_keyboard(&LetterHints::from_board(game.board())));
    println!("{}", "─".repeat(40).cyan());
}

/// Print the end-of-game banner, if the game is over
pub fn print_outcome(game: &Game) {
    match game.status() {
        GameStatus::Won { slot } => {
            let turns = slot + 1;
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!(
                    "  Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("\n{}", grid_to_emoji(&Grid::project(game)));
            println!("{}", "═".repeat(40).bright_cyan());
        }
        GameStatus::Exhausted => {
            println!(
                "\n{}",
                "  Out of guesses. Type 'restart' to play again.".red().bold()
            );
        }
        GameStatus::Empty | GameStatus::InProgress => {}
    }
}
