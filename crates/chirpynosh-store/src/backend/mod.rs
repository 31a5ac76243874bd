//! Persistence backends.
//!
//! A backend stores opaque byte blobs under string slot keys. The store only
//! ever uses one slot, but backends do not assume that.

mod file;
mod memory;
mod sqlite;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use crate::error::Result;

/// Byte-level storage injected into [`Store`](crate::Store).
pub trait Backend: Send + Sync {
    /// Read the bytes stored under `key`. Returns `None` if the slot is empty.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the slot `key` with `bytes`.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(key, bytes)
    }
}
