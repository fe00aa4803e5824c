//! CLI argument parsing for mutagen-locking.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advisory lock probe and data directory resolver.
///
/// Resolves paths inside the per-user data directory (honoring
/// MUTAGEN_DATA_DIRECTORY) and acquires advisory locks the same way
/// long-running components do, so locking can be checked from scripts.
#[derive(Parser, Debug)]
#[command(name = "mutagen-locking")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a path inside the data directory.
    ///
    /// Prints the root joined with the given components, optionally
    /// creating the directory tree.
    Path(PathArgs),

    /// Acquire and release an advisory lock.
    ///
    /// Exits with code 4 if the lock is held by another process.
    Lock(LockArgs),

    /// Print the path used to invoke an installed agent remotely.
    AgentPath(AgentPathArgs),
}

/// Arguments for the `path` command.
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Path components below the data directory root.
    pub components: Vec<String>,

    /// Create the directory tree if it does not exist.
    #[arg(long)]
    pub create: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lock` command.
#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Lock file path. Defaults to the daemon lock inside the data directory.
    pub path: Option<PathBuf>,

    /// Wait for the lock instead of failing if it is held.
    #[arg(long)]
    pub block: bool,

    /// Hold the lock for this many milliseconds before releasing it.
    #[arg(long, default_value_t = 0)]
    pub hold_ms: u64,

    /// Permissions (octal) for a newly created lock file.
    #[arg(long, default_value = "600", value_parser = parse_octal_mode)]
    pub mode: u32,
}

/// Arguments for the `agent-path` command.
#[derive(Parser, Debug)]
pub struct AgentPathArgs {
    /// Format for Windows `cmd.exe` instead of a POSIX shell.
    #[arg(long)]
    pub cmd_exe: bool,
}

fn parse_octal_mode(value: &str) -> Result<u32, String> {
    let mode = u32::from_str_radix(value, 8)
        .map_err(|e| format!("invalid octal mode '{}': {}", value, e))?;
    if mode > 0o777 {
        return Err(format!("mode '{}' is out of range", value));
    }
    Ok(mode)
}
