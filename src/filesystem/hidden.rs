//! Platform-specific "hidden" marking for directories.
//!
//! - **POSIX**: a leading dot already hides the entry, so this is a no-op.
//! - **Windows**: sets `FILE_ATTRIBUTE_HIDDEN` if it is not already present.
//!
//! Both implementations are idempotent, so concurrent callers racing to hide
//! the same directory all succeed.

use crate::error::Result;
use std::path::Path;

/// Mark a directory as hidden.
#[cfg(not(windows))]
pub fn mark_hidden(_path: &Path) -> Result<()> {
    Ok(())
}

/// Mark a directory as hidden.
#[cfg(windows)]
pub fn mark_hidden(path: &Path) -> Result<()> {
    use crate::error::MutagenError;
    use std::os::windows::ffi::OsStrExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    const INVALID_FILE_ATTRIBUTES: u32 = u32::MAX;

    #[link(name = "kernel32")]
    unsafe extern "system" {
        fn GetFileAttributesW(lpFileName: *const u16) -> u32;
        fn SetFileAttributesW(lpFileName: *const u16, dwFileAttributes: u32) -> i32;
    }

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    // SAFETY: `wide` is a NUL-terminated UTF-16 buffer that outlives both calls.
    unsafe {
        let attributes = GetFileAttributesW(wide.as_ptr());
        if attributes == INVALID_FILE_ATTRIBUTES {
            return Err(MutagenError::io(
                format!("unable to query attributes of '{}'", path.display()),
                std::io::Error::last_os_error(),
            ));
        }

        if attributes & FILE_ATTRIBUTE_HIDDEN != 0 {
            return Ok(());
        }

        if SetFileAttributesW(wide.as_ptr(), attributes | FILE_ATTRIBUTE_HIDDEN) == 0 {
            return Err(MutagenError::io(
                format!("unable to hide '{}'", path.display()),
                std::io::Error::last_os_error(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn mark_hidden_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data");
        std::fs::create_dir(&target).unwrap();

        mark_hidden(&target).unwrap();
        mark_hidden(&target).unwrap();

        assert!(target.is_dir());
    }

    #[cfg(windows)]
    #[test]
    fn mark_hidden_sets_attribute() {
        use std::os::windows::fs::MetadataExt;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data");
        std::fs::create_dir(&target).unwrap();

        mark_hidden(&target).unwrap();

        let attributes = std::fs::metadata(&target).unwrap().file_attributes();
        assert_ne!(attributes & 0x2, 0);
    }

    #[cfg(windows)]
    #[test]
    fn mark_hidden_missing_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = mark_hidden(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, crate::error::MutagenError::Io { .. }));
    }
}
