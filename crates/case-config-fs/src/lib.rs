// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for CASE tools (uses platform config dir).

use case_app_core::config::{ConfigError, ConfigStore};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Layout {
    /// One `<key>.json` per key.
    Dir(PathBuf),
    /// Every key reads and writes the same file.
    File(PathBuf),
}

/// Store configs as JSON files under the platform config directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    layout: Layout,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g.,
    /// `~/.config/case-utils`). The directory is created on first save.
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("org", "caseontology", "case-utils")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Create a store keeping `<key>.json` files in `dir`.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            layout: Layout::Dir(dir.as_ref().to_path_buf()),
        }
    }

    /// Create a store pinned to a single file, for an explicit `--config`.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            layout: Layout::File(path.as_ref().to_path_buf()),
        }
    }

    /// Where `key` is read from and written to.
    pub fn path_for(&self, key: &str) -> PathBuf {
        match &self.layout {
            Layout::Dir(base) => base.join(format!("{key}.json")),
            Layout::File(path) => path.clone(),
        }
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key);
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}
