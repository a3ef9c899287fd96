//! Tracing subscriber setup
//!
//! Filter priority (highest first):
//! 1. `WORDLE_LOG` env var
//! 2. `RUST_LOG` env var
//! 3. `--verbose` → debug, otherwise warn

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable with per-target filter directives
pub const LOG_ENV: &str = "WORDLE_LOG";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Append to a file
    File(&'a Path),
    Stderr,
    /// Install nothing (the terminal is owned by the UI)
    Disabled,
}

/// Default level when no env var is set
#[must_use]
pub const fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Pick the filter directive: first non-blank, parsable env value, else the
/// verbosity default
#[must_use]
pub fn filter_directive(get: impl Fn(&str) -> Option<String>, verbose: bool) -> String {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|var| get(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && EnvFilter::try_new(value).is_ok())
        .unwrap_or_else(|| default_level(verbose).as_str().to_lowercase())
}

/// Build the filter from env vars, falling back to the CLI verbosity
#[must_use]
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(filter_directive(|var| std::env::var(var).ok(), verbose))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let filter = build_env_filter(verbose);

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("failed to install log subscriber")
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("failed to install log subscriber")
        }
    }
}
