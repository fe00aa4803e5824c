//! Error types for mutagen-locking.
//!
//! Uses thiserror for derive macros. Variants separate recoverable contention
//! (`WouldBlock`) from caller bugs (`AlreadyLocked`, `NotLocked`, `ClosedHandle`)
//! so callers can react without inspecting message text.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for locker and data directory operations.
#[derive(Error, Debug)]
pub enum MutagenError {
    /// The data directory override is empty or not absolute.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A filesystem or OS lock call failed for a reason other than contention.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Non-blocking acquisition found the lock held by another owner.
    #[error("lock '{}' is held by another owner", .0.display())]
    WouldBlock(PathBuf),

    /// `lock` was called on a handle that already holds the lock.
    #[error("lock '{}' is already held by this handle", .0.display())]
    AlreadyLocked(PathBuf),

    /// `unlock` was called on a handle that does not hold the lock.
    #[error("lock '{}' is not held by this handle", .0.display())]
    NotLocked(PathBuf),

    /// The handle was used after `close`.
    #[error("lock handle for '{}' is closed", .0.display())]
    ClosedHandle(PathBuf),
}

impl MutagenError {
    /// Build an `Io` error with a human-readable context prefix.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        MutagenError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns true if the error reports contention rather than failure.
    pub fn is_would_block(&self) -> bool {
        matches!(self, MutagenError::WouldBlock(_))
    }

    /// Returns true if the error indicates a programming error in the caller.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            MutagenError::AlreadyLocked(_)
                | MutagenError::NotLocked(_)
                | MutagenError::ClosedHandle(_)
        )
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MutagenError::Configuration(_) => exit_codes::USER_ERROR,
            MutagenError::Io { .. } => exit_codes::IO_FAILURE,
            MutagenError::WouldBlock(_) => exit_codes::LOCK_FAILURE,
            MutagenError::AlreadyLocked(_)
            | MutagenError::NotLocked(_)
            | MutagenError::ClosedHandle(_) => exit_codes::MISUSE,
        }
    }
}

/// Result type alias for mutagen-locking operations.
pub type Result<T> = std::result::Result<T, MutagenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn configuration_error_has_correct_exit_code() {
        let err = MutagenError::Configuration("empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(!err.is_misuse());
    }

    #[test]
    fn io_error_has_correct_exit_code_and_source() {
        let err = MutagenError::io(
            "unable to open lock file '/x'",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("unable to open lock file '/x': "));
    }

    #[test]
    fn would_block_is_recoverable() {
        let err = MutagenError::WouldBlock(PathBuf::from("/tmp/daemon.lock"));
        assert!(err.is_would_block());
        assert!(!err.is_misuse());
        assert_eq!(err.exit_code(), exit_codes::LOCK_FAILURE);
    }

    #[test]
    fn state_machine_errors_are_misuse() {
        let path = PathBuf::from("/tmp/a.lock");
        for err in [
            MutagenError::AlreadyLocked(path.clone()),
            MutagenError::NotLocked(path.clone()),
            MutagenError::ClosedHandle(path),
        ] {
            assert!(err.is_misuse());
            assert!(!err.is_would_block());
            assert_eq!(err.exit_code(), exit_codes::MISUSE);
        }
    }

    #[test]
    fn error_messages_name_the_lock_path() {
        let err = MutagenError::NotLocked(PathBuf::from("/data/daemon.lock"));
        assert_eq!(
            err.to_string(),
            "lock '/data/daemon.lock' is not held by this handle"
        );
    }
}
