//! Agent installation layout.
//!
//! Agent binaries are installed per version under the data directory
//! (`<data-root>/agents/<version>/mutagen-agent`). Remote invocation names the
//! binary relative to the remote user's home directory so that no remote path
//! lookup is required.

use crate::config::BuildMode;
use crate::filesystem::{AGENTS_DIRECTORY_NAME, data_directory_name};

/// Version identifier used to key agent installations.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base name of the agent executable.
pub const AGENT_BASE_NAME: &str = "mutagen-agent";

/// Path used to invoke an installed agent over a remote shell.
///
/// POSIX shells expand `~`, so the path is rooted there. `cmd.exe` does not
/// expand `~`, but remote commands start in the user's profile directory, so
/// a relative path with backslash separators is used instead.
pub fn agent_invocation_path(cmd_exe: bool, mode: BuildMode) -> String {
    let data_directory = data_directory_name(mode);

    if cmd_exe {
        [data_directory, AGENTS_DIRECTORY_NAME, VERSION, AGENT_BASE_NAME].join("\\")
    } else {
        ["~", data_directory, AGENTS_DIRECTORY_NAME, VERSION, AGENT_BASE_NAME].join("/")
    }
}
