//! Simple line-oriented mode
//!
//! Each input line is a word, `restart` or `quit`. Words are typed into the
//! game key by key, followed by Enter.

use crate::core::{WORD_SIZE, Word};
use crate::game::Game;
use crate::output::{print_game, print_outcome};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What a line asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    Restart,
    Quit,
    Nothing,
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Nothing,
            "quit" | "q" | "exit" => Self::Quit,
            "restart" | "new" | "n" => Self::Restart,
            word => Self::Guess(word.to_string()),
        }
    }
}

/// Feed a typed word through the key dispatcher
///
/// Pending letters are cleared first so the row holds exactly this word.
#[must_use]
pub fn enter_word(game: Game, word: &str) -> Game {
    let cleared = (0..WORD_SIZE).fold(game, |g, _| g.dispatch("Backspace"));
    word.chars()
        .fold(cleared, |g, c| g.dispatch(&c.to_string()))
        .dispatch("Enter")
}

/// Apply one input line; `None` means the session should end
#[must_use]
pub fn handle_line(game: Game, line: &str) -> Option<Game> {
    match LineCommand::parse(line) {
        LineCommand::Quit => None,
        LineCommand::Restart => Some(game.restart()),
        LineCommand::Guess(word) => match Word::new(word.as_str()) {
            Ok(_) => {
                debug!(%word, "line guess");
                Some(enter_word(game, &word))
            }
            Err(reason) => {
                debug!(%word, %reason, "line ignored");
                Some(game)
            }
        },
        LineCommand::Nothing => Some(game),
    }
}

/// Run the simple interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple(reveal: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode        ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a {WORD_SIZE}-letter word and press Enter.");
    println!("Commands: 'restart' for a new game, 'quit' to exit.");

    let mut game = Game::new();
    print_game(&game, reveal);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("guess> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let was_over = game.status().is_over();
        let Some(next) = handle_line(game, &line) else {
            break;
        };
        game = next;

        print_game(&game, reveal);
        if !was_over {
            print_outcome(&game);
        }
    }

    println!("\nThanks for playing!\n");
    Ok(())
}
