use thiserror::Error;

/// Errors produced by the store layer.
///
/// Only persistence can fail. Unknown ids and empty inputs are not errors;
/// the mutation API reports them through `Option` / `bool` return values.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error from the SQLite backend.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Generic I/O error (e.g. writing the slot file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The aggregate could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A number JSON cannot hold (NaN or infinite) was about to be written.
    #[error("Non-finite number in {field}")]
    NonFinite { field: String },

    /// A backend lock was poisoned by a panicking writer.
    #[error("Backend lock poisoned")]
    Poisoned,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
