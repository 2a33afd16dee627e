//! Locating the bundled kind binary for the current platform.
//!
//! Imports only from `crate::domain`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

use crate::domain::platform::BINARY_DIR;
use crate::domain::{BinaryName, DispatchError, PlatformKey, resolve};

/// Resolves the kind binary path once and caches it.
///
/// Only a successful lookup is cached: a missing binary is reported again on
/// the next call, so installing it mid-process is picked up.
#[derive(Debug)]
pub struct BinaryLocator {
    platform: PlatformKey,
    dir: PathBuf,
    resolved: OnceLock<PathBuf>,
}

impl BinaryLocator {
    pub fn new(platform: PlatformKey, dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            dir: dir.into(),
            resolved: OnceLock::new(),
        }
    }

    /// Locator for `platform` looking in the `kind/` directory next to the
    /// running program.
    #[must_use]
    pub fn beside_current_exe(platform: PlatformKey) -> Self {
        Self::new(platform, default_binary_dir())
    }

    #[must_use]
    pub fn platform(&self) -> &PlatformKey {
        &self.platform
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedPlatform`] for unmapped platforms.
    pub fn binary_name(&self) -> Result<BinaryName, DispatchError> {
        resolve(&self.platform)
    }

    /// Where the binary should be, whether or not it exists.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedPlatform`] for unmapped platforms.
    pub fn expected_path(&self) -> Result<PathBuf, DispatchError> {
        Ok(self.dir.join(self.binary_name()?.file_name()))
    }

    /// Path of the binary, verified to exist.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedPlatform`] for unmapped platforms,
    /// or [`DispatchError::BinaryNotFound`] if the file is absent.
    pub fn locate(&self) -> Result<&Path, DispatchError> {
        if let Some(path) = self.resolved.get() {
            return Ok(path.as_path());
        }
        let path = self.expected_path()?;
        if !path.is_file() {
            return Err(DispatchError::BinaryNotFound { path });
        }
        debug!(path = %path.display(), platform = %self.platform, "resolved kind binary");
        Ok(self.resolved.get_or_init(|| path).as_path())
    }
}

/// `<directory of the running program>/kind`, or `./kind` if the program
/// location is unavailable.
#[must_use]
pub fn default_binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(BINARY_DIR)))
        .unwrap_or_else(|| PathBuf::from(BINARY_DIR))
}
