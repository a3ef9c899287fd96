//! Wordle Game - CLI
//!
//! Play in the terminal UI (default) or in a simple line-oriented mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::run_simple,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level logging (WORDLE_LOG / RUST_LOG take precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show the solution and the in-progress guess
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one word per line, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Simple) => LogTarget::Stderr,
        (None, Commands::Play) => LogTarget::Disabled,
    };
    logging::init(target, cli.verbose)?;

    match command {
        Commands::Play => run_tui(App::new(cli.reveal)),
        Commands::Simple => run_simple(cli.reveal),
    }
}
