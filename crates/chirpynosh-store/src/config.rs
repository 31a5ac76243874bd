//! Store configuration loaded from environment variables.
//!
//! All settings have defaults so a store can be opened with zero
//! configuration during local development.

use std::path::PathBuf;
use std::str::FromStr;

use directories::ProjectDirs;

use chirpynosh_shared::constants::STORE_KEY;

use crate::error::StoreError;

/// Which [`Backend`](crate::Backend) [`Store::open`](crate::Store::open) builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    File,
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(BackendKind::Memory),
            "file" => Ok(BackendKind::File),
            "sqlite" => Ok(BackendKind::Sqlite),
            other => Err(StoreError::InvalidConfig(format!(
                "unknown backend {other:?} (expected memory, file or sqlite)"
            ))),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Persistence backend.
    /// Env: `CHIRPYNOSH_BACKEND` (`memory` / `file` / `sqlite`)
    /// Default: `file`
    pub backend: BackendKind,

    /// Directory holding the slot file or database.
    /// Env: `CHIRPYNOSH_DATA_DIR`
    /// Default: the platform data directory, or `./data` if none exists.
    pub data_dir: PathBuf,

    /// Name of the slot the aggregate is stored under.
    /// Env: `CHIRPYNOSH_STORE_KEY`
    /// Default: `chirpynosh_store_v1`
    pub store_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            data_dir: default_data_dir(),
            store_key: STORE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through
    /// `lookup`, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("CHIRPYNOSH_BACKEND") {
            match val.parse::<BackendKind>() {
                Ok(kind) => config.backend = kind,
                Err(e) => {
                    tracing::warn!(value = %val, error = %e, "Invalid CHIRPYNOSH_BACKEND, using default");
                }
            }
        }

        if let Some(dir) = lookup("CHIRPYNOSH_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        if let Some(key) = lookup("CHIRPYNOSH_STORE_KEY") {
            if key.trim().is_empty() {
                tracing::warn!("Empty CHIRPYNOSH_STORE_KEY, using default");
            } else {
                config.store_key = key;
            }
        }

        config
    }

    /// In-memory configuration, handy for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self {
            backend: BackendKind::Memory,
            ..Self::default()
        }
    }
}

/// Platform data directory:
/// - Linux:   `~/.local/share/chirpynosh`
/// - macOS:   `~/Library/Application Support/com.chirpynosh.chirpynosh`
/// - Windows: `{FOLDERID_RoamingAppData}\chirpynosh\chirpynosh\data`
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "chirpynosh", "chirpynosh")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
