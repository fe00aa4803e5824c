//! Native lock primitives behind a single interface.
//!
//! `fs2` selects the platform call at build time (`flock` on POSIX,
//! `LockFileEx`/`UnlockFile` on Windows); this module adds lock file opening
//! and the contention check shared by both.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Open the lock file, creating it with `permissions` if it does not exist.
///
/// Existing files are opened as-is: neither truncated nor re-permissioned.
pub(super) fn open(path: &Path, permissions: u32) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(permissions);
    }
    #[cfg(not(unix))]
    let _ = permissions;

    options.open(path)
}

/// Acquire an exclusive lock over the whole file.
pub(super) fn lock_exclusive(file: &File, block: bool) -> io::Result<()> {
    if block {
        FileExt::lock_exclusive(file)
    } else {
        FileExt::try_lock_exclusive(file)
    }
}

/// Release a lock previously taken with [`lock_exclusive`].
pub(super) fn unlock(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

/// Returns true if `err` means "held by another owner".
///
/// POSIX reports `EWOULDBLOCK`; Windows reports `ERROR_LOCK_VIOLATION`, which
/// `fs2::lock_contended_error` captures for the current platform.
pub(super) fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || (err.raw_os_error().is_some()
            && err.raw_os_error() == fs2::lock_contended_error().raw_os_error())
}
