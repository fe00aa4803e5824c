//! Data directory resolution.
//!
//! All persisted state lives below a single per-user root:
//!
//! ```text
//! <data-root>/
//!   daemon/            daemon state, including `daemon.lock`
//!   agents/<version>/  agent binaries
//!   sessions/          synchronization session metadata
//!   caches/            synchronization caches
//!   archives/          synchronization archives
//!   staging/           synchronization staging areas
//!   forwarding/        forwarding session state
//!   licensing/         licensing state
//! ```
//!
//! The root is either the explicit override carried by [`DataDirConfig`] or
//! `<home>/.mutagen` (`<home>/.mutagen-dev` for development builds). When the
//! root is computed rather than overridden, it is marked hidden on creation.
//!
//! Resolution is recomputed on every call; nothing is cached.

use super::hidden::mark_hidden;
use crate::config::{BuildMode, DataDirConfig};
use crate::error::{MutagenError, Result};
use log::debug;
use serde::Serialize;
use std::fs::DirBuilder;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Name of the data directory inside the user's home directory.
pub const DATA_DIRECTORY_NAME: &str = ".mutagen";

/// Name of the data directory inside the user's home directory for development builds.
pub const DATA_DIRECTORY_DEVELOPMENT_NAME: &str = ".mutagen-dev";

/// Name of the global configuration file inside the user's home directory.
pub const GLOBAL_CONFIGURATION_NAME: &str = ".mutagen.yml";

/// Daemon storage directory.
pub const DAEMON_DIRECTORY_NAME: &str = "daemon";

/// Lock file inside the daemon directory that guards daemon uniqueness.
pub const DAEMON_LOCK_NAME: &str = "daemon.lock";

/// Agent binary storage directory.
pub const AGENTS_DIRECTORY_NAME: &str = "agents";

/// Synchronization session storage directory.
pub const SYNCHRONIZATION_SESSIONS_DIRECTORY_NAME: &str = "sessions";

/// Synchronization cache storage directory.
pub const SYNCHRONIZATION_CACHES_DIRECTORY_NAME: &str = "caches";

/// Synchronization archive storage directory.
pub const SYNCHRONIZATION_ARCHIVES_DIRECTORY_NAME: &str = "archives";

/// Synchronization staging storage directory.
pub const SYNCHRONIZATION_STAGING_DIRECTORY_NAME: &str = "staging";

/// Forwarding data directory.
pub const FORWARDING_DIRECTORY_NAME: &str = "forwarding";

/// Formerly used by a removed transport. Reserved so that nothing new collides
/// with directories left behind on existing installations.
pub const RESERVED_IO_DIRECTORY_NAME: &str = "mutagen.io";

/// Licensing data directory.
pub const LICENSING_DIRECTORY_NAME: &str = "licensing";

/// Name of the data directory inside the home directory for a build mode.
pub fn data_directory_name(mode: BuildMode) -> &'static str {
    match mode {
        BuildMode::Production => DATA_DIRECTORY_NAME,
        BuildMode::Development => DATA_DIRECTORY_DEVELOPMENT_NAME,
    }
}

/// A resolved location inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataDirectoryPath {
    /// Absolute path to the data directory root.
    pub root: PathBuf,

    /// Whether the root came from an explicit override.
    pub is_overridden: bool,

    /// The root joined with the requested components.
    pub path: PathBuf,
}

/// Resolver for paths inside the data directory.
#[derive(Debug, Clone, Default)]
pub struct DataDirectory {
    config: DataDirConfig,
}

impl DataDirectory {
    /// Create a resolver over the given configuration.
    pub fn new(config: DataDirConfig) -> Self {
        Self { config }
    }

    /// The configuration this resolver was built from.
    pub fn config(&self) -> &DataDirConfig {
        &self.config
    }

    /// Compute the data directory root and whether it was overridden.
    ///
    /// An override is validated before anything else happens: an empty or
    /// relative value fails with [`MutagenError::Configuration`] without
    /// touching the filesystem.
    pub fn root(&self) -> Result<(PathBuf, bool)> {
        if let Some(raw) = &self.config.data_directory {
            if raw.is_empty() {
                return Err(MutagenError::Configuration(
                    "provided data directory path is empty".to_string(),
                ));
            }
            let path = PathBuf::from(raw);
            if !path.is_absolute() {
                return Err(MutagenError::Configuration(format!(
                    "provided data directory path '{}' is not absolute",
                    path.display()
                )));
            }
            return Ok((path, true));
        }

        let home = match &self.config.home_directory {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or_else(|| {
                MutagenError::io(
                    "unable to compute path to home directory",
                    io::Error::new(io::ErrorKind::NotFound, "home directory is not available"),
                )
            })?,
        };

        Ok((home.join(data_directory_name(self.config.mode)), false))
    }

    /// Resolve (and optionally create) a path inside the data directory.
    ///
    /// With `create == false` resolution is purely lexical; nothing on disk is
    /// inspected. With `create == true` the full directory tree is created
    /// owner-only, and a computed root is marked hidden. Both steps tolerate
    /// existing directories, so concurrent callers all succeed.
    pub fn resolve_path<I, S>(&self, create: bool, components: I) -> Result<DataDirectoryPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let (root, is_overridden) = self.root()?;
        let path = join_components(&root, components);

        if create {
            create_owner_only(&path)?;

            if !is_overridden {
                mark_hidden(&root)?;
            }
        }

        Ok(DataDirectoryPath {
            root,
            is_overridden,
            path,
        })
    }

    /// Resolve (and optionally create) a path inside the data directory.
    ///
    /// Convenience wrapper around [`DataDirectory::resolve_path`] returning only
    /// the joined path.
    pub fn resolve<I, S>(&self, create: bool, components: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.resolve_path(create, components).map(|resolved| resolved.path)
    }

    /// Path of the daemon lock file, creating the daemon directory if requested.
    pub fn daemon_lock_path(&self, create: bool) -> Result<PathBuf> {
        let dir = self.resolve(create, [DAEMON_DIRECTORY_NAME])?;
        Ok(dir.join(DAEMON_LOCK_NAME))
    }

    /// Directory holding agent binaries for a particular version.
    pub fn agents_path(&self, create: bool, version: &str) -> Result<PathBuf> {
        self.resolve(create, [AGENTS_DIRECTORY_NAME, version])
    }
}

/// Lexically join caller components onto the root and clean the result.
///
/// Empty and `.` parts are skipped, separators inside a component never reset
/// the root, and `..` removes the preceding element. Like any lexical clean,
/// enough `..` parts walk above the root (`/data` + `a/../../b` is `/b`); the
/// filesystem root itself is never popped.
fn join_components<I, S>(root: &Path, components: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut result = root.to_path_buf();

    for component in components {
        for part in component.as_ref().components() {
            match part {
                Component::Normal(name) => result.push(name),
                Component::ParentDir => {
                    result.pop();
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
    }

    result
}

/// Create a directory tree with owner-only permissions.
fn create_owner_only(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder
        .create(path)
        .map_err(|e| MutagenError::io(format!("unable to create subpath '{}'", path.display()), e))?;

    debug!("ensured data directory '{}'", path.display());
    Ok(())
}
