//! The lock handle state machine.

use super::guard::LockGuard;
use super::native;
use crate::error::{MutagenError, Result};
use log::{debug, warn};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Owner-only permissions for newly created lock files.
pub const DEFAULT_LOCK_PERMISSIONS: u32 = 0o600;

/// One open lock file and its acquisition state.
///
/// ```text
///   new ──► Open/Unlocked ──lock──► Open/Locked
///               ▲   │                  │
///               └───┼──────unlock──────┘
///                   └──close──► Closed (terminal)
/// ```
///
/// State-machine misuse (locking twice, unlocking while unlocked, any call
/// after close) is detected locally without an OS call. Locking a path that
/// another handle in this same process holds is not special-cased: the OS
/// reports contention, so a non-blocking attempt fails with `WouldBlock`
/// instead of silently succeeding.
///
/// A `Locker` is not meant to be shared between threads; give each thread
/// its own handle.
#[derive(Debug)]
pub struct Locker {
    /// Absolute path to the lock file.
    path: PathBuf,

    /// The open lock file, or `None` once closed.
    file: Option<File>,

    /// Whether this handle currently holds the lock.
    held: bool,
}

impl Locker {
    /// Open the lock file at `path`, creating it with `permissions` if needed.
    ///
    /// No lock is acquired.
    ///
    /// # Returns
    ///
    /// * `Ok(Locker)` - An open, unlocked handle
    /// * `Err(MutagenError::Io)` - Empty path, missing parent directory, or
    ///   permission denied
    pub fn new<P: AsRef<Path>>(path: P, permissions: u32) -> Result<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(MutagenError::io(
                "unable to open lock file",
                io::Error::new(io::ErrorKind::InvalidInput, "empty lock path"),
            ));
        }

        let path = std::path::absolute(path).map_err(|e| {
            MutagenError::io(
                format!("unable to compute absolute lock path for '{}'", path.display()),
                e,
            )
        })?;

        let file = native::open(&path, permissions).map_err(|e| {
            MutagenError::io(format!("unable to open lock file '{}'", path.display()), e)
        })?;

        Ok(Self {
            path,
            file: Some(file),
            held: false,
        })
    }

    /// Open the lock file with owner-only permissions.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(path, DEFAULT_LOCK_PERMISSIONS)
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this handle currently holds the lock.
    pub fn is_locked(&self) -> bool {
        self.held
    }

    /// Whether this handle has been closed.
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    fn file(&self) -> Result<&File> {
        self.file
            .as_ref()
            .ok_or_else(|| MutagenError::ClosedHandle(self.path.clone()))
    }

    /// Acquire the exclusive lock.
    ///
    /// With `block == true` the calling thread waits until the lock is granted;
    /// there is no timeout. With `block == false` a single attempt is made.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The lock is now held
    /// * `Err(MutagenError::WouldBlock)` - Non-blocking attempt found it held
    /// * `Err(MutagenError::AlreadyLocked)` - This handle already holds it
    /// * `Err(MutagenError::ClosedHandle)` - Called after `close`
    /// * `Err(MutagenError::Io)` - The OS lock call failed otherwise
    pub fn lock(&mut self, block: bool) -> Result<()> {
        let file = self.file()?;
        if self.held {
            return Err(MutagenError::AlreadyLocked(self.path.clone()));
        }

        native::lock_exclusive(file, block).map_err(|e| {
            if native::is_contended(&e) {
                MutagenError::WouldBlock(self.path.clone())
            } else {
                MutagenError::io(
                    format!("unable to acquire lock '{}'", self.path.display()),
                    e,
                )
            }
        })?;

        self.held = true;
        debug!("acquired lock '{}'", self.path.display());
        Ok(())
    }

    /// Release the lock acquired by [`Locker::lock`].
    ///
    /// The file stays open and on disk; the handle can lock again.
    pub fn unlock(&mut self) -> Result<()> {
        let file = self.file()?;
        if !self.held {
            return Err(MutagenError::NotLocked(self.path.clone()));
        }

        native::unlock(file).map_err(|e| {
            MutagenError::io(
                format!("unable to release lock '{}'", self.path.display()),
                e,
            )
        })?;

        self.held = false;
        debug!("released lock '{}'", self.path.display());
        Ok(())
    }

    /// Close the underlying OS handle.
    ///
    /// If the lock is still held, the OS releases it as the handle closes, but
    /// that is reported as a warning: callers should `unlock` first. A second
    /// `close` fails with `ClosedHandle` and has no other effect.
    ///
    /// Errors from the OS close itself are ignored (`std::fs::File` does not
    /// report them); the only error this returns is `ClosedHandle`.
    pub fn close(&mut self) -> Result<()> {
        let file = self
            .file
            .take()
            .ok_or_else(|| MutagenError::ClosedHandle(self.path.clone()))?;

        if self.held {
            warn!(
                "closing lock '{}' while still held; relying on implicit release",
                self.path.display()
            );
            self.held = false;
        }

        drop(file);
        Ok(())
    }

    /// Acquire the lock and return a guard that releases it.
    ///
    /// The guard borrows this handle mutably, so the handle cannot be locked,
    /// unlocked, or closed while the guard is alive.
    pub fn guard(&mut self, block: bool) -> Result<LockGuard<'_>> {
        self.lock(block)?;
        Ok(LockGuard::new(self))
    }
}

impl Drop for Locker {
    fn drop(&mut self) {
        if self.held
            && let Some(file) = &self.file
        {
            warn!(
                "lock '{}' dropped while held; releasing",
                self.path.display()
            );
            if let Err(e) = native::unlock(file) {
                warn!("failed to release lock '{}': {}", self.path.display(), e);
            }
        }
    }
}
