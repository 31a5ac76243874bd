//! One JSON file per slot inside a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::{Result, StoreError};

/// Stores each slot as `<key>.json` under `base_path`. Writes go to a
/// temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileBackend {
    base_path: PathBuf,
}

impl FileBackend {
    /// Open a file backend rooted at `base_path`, creating the directory if
    /// missing.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;

        tracing::info!(path = %base_path.display(), "file backend initialized");

        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file holding `key`. Keys are used as file stems, so they
    /// must not contain path separators.
    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StoreError::InvalidConfig(format!(
                "slot key not usable as a file name: {key:?}"
            )));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.slot_path(key)?;
        // Write beside the target then rename, so a crash never leaves a
        // half-written slot behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "wrote slot file");
        Ok(())
    }
}
