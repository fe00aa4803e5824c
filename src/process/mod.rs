//! Helpers for interpreting the output of remote and local processes.
//!
//! These gate whether a caller tries to install a missing remote helper
//! (the shell reported "command not found") or reports a hard failure.

mod errors;
pub mod terminal;

pub use errors::{
    extract_exit_error_message, output_is_posix_command_not_found,
    output_is_windows_command_not_found, output_is_windows_invalid_command,
    output_is_windows_powershell_command_not_found,
};
