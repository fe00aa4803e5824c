//! RAII lock guard implementation.

use super::locker::Locker;
use crate::error::Result;
use log::warn;
use std::path::Path;

/// Scoped acquisition of a [`Locker`].
///
/// Call [`LockGuard::release`] at the end of the critical section to release
/// the lock and observe errors. If the guard is dropped instead (early return,
/// `?`, panic), the lock is still released and failures are logged, but the
/// handle itself stays open.
#[derive(Debug)]
pub struct LockGuard<'a> {
    /// The handle holding the lock.
    locker: &'a mut Locker,

    /// Whether the lock has been released manually.
    released: bool,
}

impl<'a> LockGuard<'a> {
    /// Create a new guard over a handle that already holds its lock.
    pub(super) fn new(locker: &'a mut Locker) -> Self {
        Self {
            locker,
            released: false,
        }
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        self.locker.path()
    }

    /// Explicitly release the lock.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.locker.unlock()
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if !self.released
            && let Err(e) = self.locker.unlock()
        {
            warn!(
                "failed to release lock '{}': {}",
                self.locker.path().display(),
                e
            );
        }
    }
}
