//! Expiration tracker operations.

use chrono::Utc;

use crate::backend::Backend;
use crate::error::Result;
use crate::models::{ExpirationItem, NewExpirationItem};
use crate::store::{new_id, Store};

impl<B: Backend> Store<B> {
    pub fn add_expiration_item(&self, input: NewExpirationItem) -> Result<ExpirationItem> {
        let item = ExpirationItem {
            id: new_id(),
            item: input.item,
            expires_on: input.expires_on,
            notes: input.notes,
            created_at: Utc::now(),
        };

        let created = item.clone();
        self.mutate(|agg| agg.expirations.insert(0, item))?;

        tracing::debug!(id = %created.id, expires_on = %created.expires_on, "added expiration item");
        Ok(created)
    }

    /// Remove an item. Returns `false` if it did not exist.
    pub fn delete_expiration_item(&self, id: &str) -> Result<bool> {
        self.mutate(|agg| {
            let before = agg.expirations.len();
            agg.expirations.retain(|x| x.id != id);
            agg.expirations.len() < before
        })
    }
}
