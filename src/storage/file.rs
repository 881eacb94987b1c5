//! File-backed key-value storage.
//!
//! Each key maps to one file inside a storage directory. The default
//! directory lives under the platform data dir so persisted sessions
//! outlive the process.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::Storage;

/// Application name used for the default storage directory path
const APP_NAME: &str = "fplsession";

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a store rooted at an explicit directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store under the platform data directory
    /// (e.g. `~/.local/share/fplsession` on Linux).
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(Self::new(data_dir.join(APP_NAME)))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create storage directory {}", self.dir.display()))?;
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write storage key {}", path.display()))?;
        debug!(key = key, "Wrote storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage key {}", path.display()))?;
            debug!(key = key, "Removed storage key");
        }
        Ok(())
    }
}
