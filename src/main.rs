//! mutagen-locking: advisory lock probe and data directory resolver.
//!
//! This is the main entry point for the `mutagen-locking` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use env_logger::{Builder, Env};
use mutagen_locking::exit_codes;
use std::process::ExitCode;

/// Environment variable controlling log verbosity (e.g. `MUTAGEN_LOG=debug`).
const LOG_ENV: &str = "MUTAGEN_LOG";

fn init_logger() {
    Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp_millis()
        .init();
}

fn main() -> ExitCode {
    init_logger();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
