//! Cross-process advisory file locking.
//!
//! A [`Locker`] owns one open lock file and exposes exclusive acquisition
//! (blocking or non-blocking), release, and close. The lock file's contents are
//! never read or written; it only serves as a rendezvous point for the OS lock
//! manager.
//!
//! # Platform Behavior
//!
//! - **POSIX**: whole-file `flock(LOCK_EX)`, with `LOCK_NB` for non-blocking
//!   attempts. The lock belongs to the open file description and is dropped by
//!   the kernel when the last descriptor closes, including on process crash.
//! - **Windows**: `LockFileEx` over the full byte range, failing immediately
//!   for non-blocking attempts. Windows drops the lock when the handle closes
//!   or the owning process terminates.
//!
//! Contention maps to [`MutagenError::WouldBlock`](crate::error::MutagenError)
//! on both platforms.
//!
//! # Explicit Release
//!
//! Implicit release on handle closure is a crash safety net only. Correct
//! callers call [`Locker::unlock`] (or [`LockGuard::release`]) before
//! [`Locker::close`]. Falling back to the net is reported with `log::warn!`.

mod guard;
mod locker;
mod native;


// Re-export public API
pub use guard::LockGuard;
pub use locker::{DEFAULT_LOCK_PERMISSIONS, Locker};
