use std::collections::HashMap;
use std::sync::RwLock;

use crate::backend::Backend;
use crate::error::{Result, StoreError};

/// In-process backend. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, bypassing the store. Useful for simulating data
    /// written by an older client or by another tab.
    pub fn with_slot(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut slots) = self.slots.write() {
            slots.insert(key.to_string(), bytes.into());
        }
        self
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let slots = self.slots.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut slots = self.slots.write().map_err(|_| StoreError::Poisoned)?;
        slots.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
