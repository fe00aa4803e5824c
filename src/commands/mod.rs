//! Command implementations for mutagen-locking.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod lock;

use crate::cli::{AgentPathArgs, Command, PathArgs};
use mutagen_locking::agent::agent_invocation_path;
use mutagen_locking::config::DataDirConfig;
use mutagen_locking::error::{MutagenError, Result};
use mutagen_locking::filesystem::DataDirectory;

/// Dispatch a command to its implementation.
///
/// The environment is captured once here; everything below receives an
/// explicit configuration.
pub fn dispatch(command: Command) -> Result<()> {
    let config = DataDirConfig::from_env();

    match command {
        Command::Path(args) => cmd_path(&config, args),
        Command::Lock(args) => lock::cmd_lock(&config, args),
        Command::AgentPath(args) => cmd_agent_path(&config, args),
    }
}

fn cmd_path(config: &DataDirConfig, args: PathArgs) -> Result<()> {
    let resolver = DataDirectory::new(config.clone());
    let resolved = resolver.resolve_path(args.create, &args.components)?;

    if args.json {
        let json = serde_json::to_string_pretty(&resolved).map_err(|e| {
            MutagenError::io(
                "failed to serialize resolved path",
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
        println!("{}", json);
    } else {
        println!("{}", resolved.path.display());
    }

    Ok(())
}

fn cmd_agent_path(config: &DataDirConfig, args: AgentPathArgs) -> Result<()> {
    println!("{}", agent_invocation_path(args.cmd_exe, config.mode));
    Ok(())
}
