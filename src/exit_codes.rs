//! Exit code constants for the mutagen-locking CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid configuration)
//! - 2: I/O failure (directory creation, lock file open, OS lock call)
//! - 4: Lock contention (lock held by another owner)
//! - 5: Locker misuse (state-machine violation)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// I/O failure unrelated to lock contention.
pub const IO_FAILURE: i32 = 2;

/// Lock acquisition failure: the lock is held by another owner.
pub const LOCK_FAILURE: i32 = 4;

/// Locker state-machine misuse (double lock, unlock while unlocked, use after close).
pub const MISUSE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE, LOCK_FAILURE, MISUSE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn lock_failure_code_is_stable() {
        // Scripts poll on this value to detect "another instance is active".
        assert_eq!(LOCK_FAILURE, 4);
    }
}
