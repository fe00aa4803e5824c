//! "Command not found" detection across shell families.

use super::terminal::neutralize_control_characters;
use std::process::Output;

/// Fragment printed by POSIX shells for an unknown command. Capitalization of
/// "command" differs between shells, so the first letter is left off.
const POSIX_COMMAND_NOT_FOUND_FRAGMENT: &str = "ommand not found";

/// Fragment printed by `cmd.exe` for an unrecognized command.
const WINDOWS_INVALID_COMMAND_FRAGMENT: &str =
    "is not recognized as an internal or external command";

/// Fragment printed by `cmd.exe` when the command path does not exist.
const WINDOWS_COMMAND_NOT_FOUND_FRAGMENT: &str = "The system cannot find the path specified";

/// Fragment shared by PowerShell versions for an unknown command. Older
/// releases say "the name of a cmdlet, function, script file, or operable
/// program", newer ones "a name of a cmdlet, function, script file, or
/// executable program".
const WINDOWS_POWERSHELL_COMMAND_NOT_FOUND_FRAGMENT: &str = "cmdlet, function, script file, or";

/// Whether error output is a POSIX shell "command not found".
pub fn output_is_posix_command_not_found(output: &str) -> bool {
    output.contains(POSIX_COMMAND_NOT_FOUND_FRAGMENT)
}

/// Whether error output is a `cmd.exe` "not recognized" error.
pub fn output_is_windows_invalid_command(output: &str) -> bool {
    output.contains(WINDOWS_INVALID_COMMAND_FRAGMENT)
}

/// Whether error output is a `cmd.exe` "cannot find the path" error.
pub fn output_is_windows_command_not_found(output: &str) -> bool {
    output.contains(WINDOWS_COMMAND_NOT_FOUND_FRAGMENT)
}

/// Whether error output is a PowerShell "command not found".
pub fn output_is_windows_powershell_command_not_found(output: &str) -> bool {
    output.contains(WINDOWS_POWERSHELL_COMMAND_NOT_FOUND_FRAGMENT)
}

/// Extract the diagnostic text from a failed process.
///
/// Returns an empty string if the process exited successfully, if its stderr
/// is not valid UTF-8, or if stderr is blank once surrounding whitespace is
/// stripped. Control characters in the result are neutralized.
pub fn extract_exit_error_message(output: &Output) -> String {
    if output.status.success() {
        return String::new();
    }

    match std::str::from_utf8(&output.stderr) {
        Ok(stderr) => neutralize_control_characters(stderr.trim()),
        Err(_) => String::new(),
    }
}
