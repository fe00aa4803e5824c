//! Configuration for data directory resolution.
//!
//! The resolver never reads process-wide state on its own. Callers capture the
//! relevant environment once (usually at start-up via [`DataDirConfig::from_env`])
//! and pass the resulting value in, which keeps resolution a pure function of
//! its inputs and lets tests exercise every branch without touching `std::env`.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the data directory root.
pub const DATA_DIRECTORY_ENV: &str = "MUTAGEN_DATA_DIRECTORY";

/// Which flavour of build is running.
///
/// Development builds keep their state in a separate directory so that they
/// never collide with an installed production release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Release build, using `~/.mutagen`.
    #[cfg_attr(not(feature = "development"), default)]
    Production,
    /// Development build, using `~/.mutagen-dev`.
    #[cfg_attr(feature = "development", default)]
    Development,
}

impl BuildMode {
    /// Returns true for development builds.
    pub fn is_development(&self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

/// Inputs to data directory resolution.
#[derive(Debug, Clone, Default)]
pub struct DataDirConfig {
    /// Raw value of the data directory override, if one was provided.
    ///
    /// Kept unvalidated so that an empty or relative value is reported by the
    /// resolver as a configuration error rather than silently ignored.
    pub data_directory: Option<OsString>,

    /// Home directory to compute the default root from.
    ///
    /// `None` means "ask the platform" (`dirs::home_dir()`).
    pub home_directory: Option<PathBuf>,

    /// Build flavour, selecting the default root name.
    pub mode: BuildMode,
}

impl DataDirConfig {
    /// Capture configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            data_directory: std::env::var_os(DATA_DIRECTORY_ENV),
            home_directory: None,
            mode: BuildMode::default(),
        }
    }

    /// Configuration with an explicit data directory override.
    pub fn with_data_directory(path: impl Into<OsString>) -> Self {
        Self {
            data_directory: Some(path.into()),
            ..Self::default()
        }
    }

    /// Configuration rooted at an explicit home directory (no override).
    pub fn with_home_directory(home: impl Into<PathBuf>) -> Self {
        Self {
            home_directory: Some(home.into()),
            ..Self::default()
        }
    }

    /// Set the build mode.
    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_build_mode_follows_feature() {
        assert_eq!(
            BuildMode::default().is_development(),
            cfg!(feature = "development")
        );
    }

    #[test]
    fn builder_helpers_set_fields() {
        let config = DataDirConfig::with_home_directory("/home/alice").mode(BuildMode::Development);
        assert_eq!(config.home_directory, Some(PathBuf::from("/home/alice")));
        assert!(config.data_directory.is_none());
        assert_eq!(config.mode, BuildMode::Development);

        let config = DataDirConfig::with_data_directory("/srv/mutagen");
        assert_eq!(config.data_directory, Some(OsString::from("/srv/mutagen")));
    }

    #[test]
    #[serial]
    fn from_env_reads_override() {
        let previous = std::env::var_os(DATA_DIRECTORY_ENV);

        // SAFETY: serialized with other environment-touching tests.
        unsafe { std::env::set_var(DATA_DIRECTORY_ENV, "/var/lib/mutagen") };
        let config = DataDirConfig::from_env();
        assert_eq!(
            config.data_directory,
            Some(OsString::from("/var/lib/mutagen"))
        );

        unsafe { std::env::remove_var(DATA_DIRECTORY_ENV) };
        assert!(DataDirConfig::from_env().data_directory.is_none());

        if let Some(value) = previous {
            unsafe { std::env::set_var(DATA_DIRECTORY_ENV, value) };
        }
    }
}
