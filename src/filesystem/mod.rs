//! Filesystem layout for mutagen-locking.
//!
//! This module resolves paths inside the per-user data directory and applies
//! the platform's notion of a "hidden" directory to its root. Everything that
//! persists state on disk (including lock files) locates itself through here.

pub mod data_dir;
mod hidden;

pub use data_dir::{
    AGENTS_DIRECTORY_NAME, DAEMON_DIRECTORY_NAME, DAEMON_LOCK_NAME, DATA_DIRECTORY_DEVELOPMENT_NAME,
    DATA_DIRECTORY_NAME, DataDirectory, DataDirectoryPath, FORWARDING_DIRECTORY_NAME,
    GLOBAL_CONFIGURATION_NAME, LICENSING_DIRECTORY_NAME, RESERVED_IO_DIRECTORY_NAME,
    SYNCHRONIZATION_ARCHIVES_DIRECTORY_NAME, SYNCHRONIZATION_CACHES_DIRECTORY_NAME,
    SYNCHRONIZATION_SESSIONS_DIRECTORY_NAME, SYNCHRONIZATION_STAGING_DIRECTORY_NAME,
    data_directory_name,
};
pub use hidden::mark_hidden;
