//! Cross-process advisory file locking and per-user data directory resolution.
//!
//! Independent processes (CLI invocations, a background daemon, helpers)
//! coordinate access to shared on-disk state by:
//!
//! 1. Resolving a path inside the data directory with [`filesystem::DataDirectory`]
//! 2. Opening a [`locking::Locker`] over a lock file at that path
//! 3. Holding the lock around the critical section that mutates shared state
//!
//! ```no_run
//! use mutagen_locking::config::DataDirConfig;
//! use mutagen_locking::filesystem::DataDirectory;
//! use mutagen_locking::locking::Locker;
//!
//! let resolver = DataDirectory::new(DataDirConfig::from_env());
//! let mut locker = Locker::open(resolver.daemon_lock_path(true)?)?;
//! let guard = locker.guard(false)?;
//! // ... only one daemon gets here ...
//! guard.release()?;
//! locker.close()?;
//! # Ok::<(), mutagen_locking::error::MutagenError>(())
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod filesystem;
pub mod locking;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support;
