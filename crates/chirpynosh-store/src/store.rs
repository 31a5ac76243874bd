//! The persistent store: one aggregate in one backend slot, observable
//! through synchronous change listeners.
//!
//! Every write replaces the whole aggregate and then notifies every
//! listener before returning. There is no versioning: whichever caller
//! saves last wins. The built-in mutations all go through
//! [`Store::mutate`], which re-loads immediately before writing, so they
//! never save a stale copy.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use chrono::Utc;
use uuid::Uuid;

use chirpynosh_shared::constants::STORE_KEY;

use crate::backend::{Backend, FileBackend, MemoryBackend, SqliteBackend};
use crate::config::{BackendKind, StoreConfig};
use crate::error::{Result, StoreError};
use crate::models::{Aggregate, PersistedAggregate};
use crate::seed::seed_aggregate;

/// Zero-argument callback invoked after every successful save.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

type Registry = Arc<Mutex<Vec<Listener>>>;

/// File name of the SQLite database inside the configured data directory.
const SQLITE_FILE_NAME: &str = "chirpynosh.db";

/// The rescue-marketplace aggregate persisted under one slot of a
/// [`Backend`], plus the listeners told about every save.
///
/// `B` defaults to a boxed backend so [`Store::open`] can pick one at
/// runtime; tests usually name a concrete backend instead.
pub struct Store<B: Backend = Box<dyn Backend>> {
    backend: B,
    key: String,
    seed: Aggregate,
    listeners: Registry,
}

impl Store<Box<dyn Backend>> {
    /// Build the backend described by `config` and wrap it in a store.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let backend: Box<dyn Backend> = match config.backend {
            BackendKind::Memory => Box::new(MemoryBackend::new()),
            BackendKind::File => Box::new(FileBackend::new(&config.data_dir)?),
            BackendKind::Sqlite => {
                Box::new(SqliteBackend::open_at(&config.data_dir.join(SQLITE_FILE_NAME))?)
            }
        };

        tracing::info!(
            backend = ?config.backend,
            data_dir = %config.data_dir.display(),
            key = %config.store_key,
            "opening store"
        );

        Ok(Self::with_key(backend, config.store_key.clone()))
    }
}

impl<B: Backend> Store<B> {
    /// Store using the default slot key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            seed: seed_aggregate(Utc::now()),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The fixed seed. Built once per store, so repeated calls compare equal.
    pub fn seed(&self) -> Aggregate {
        self.seed.clone()
    }

    // ------------------------------------------------------------------
    // Read / write
    // ------------------------------------------------------------------

    /// Current aggregate, or the seed if the slot is empty, unreadable,
    /// unparseable, or missing `partners` / `listings`. Never fails.
    pub fn load(&self) -> Aggregate {
        let bytes = match self.backend.read(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return self.seed(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "slot read failed, using seed");
                return self.seed();
            }
        };

        match serde_json::from_slice::<PersistedAggregate>(&bytes) {
            Ok(persisted) => persisted.into_aggregate().unwrap_or_else(|| {
                tracing::warn!(key = %self.key, "persisted aggregate lacks partners or listings, using seed");
                self.seed()
            }),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "persisted aggregate is malformed, using seed");
                self.seed()
            }
        }
    }

    /// Overwrite the slot with `aggregate`, then notify every listener.
    ///
    /// Fails with [`StoreError::NonFinite`] before writing anything if a
    /// quantity, capacity or price is NaN or infinite, since JSON would
    /// store it as `null`. Listeners are not notified if the write fails.
    pub fn save(&self, aggregate: &Aggregate) -> Result<()> {
        if let Some(field) = PersistedAggregate::non_finite_field(aggregate) {
            return Err(StoreError::NonFinite { field });
        }

        let bytes = serde_json::to_vec(aggregate)?;
        self.backend.write(&self.key, &bytes)?;

        tracing::debug!(key = %self.key, size = bytes.len(), "saved aggregate");

        self.notify();
        Ok(())
    }

    /// Replace the persisted aggregate with the seed.
    pub fn reset(&self) -> Result<()> {
        tracing::info!(key = %self.key, "resetting store to seed");
        self.save(&self.seed)
    }

    /// Load, apply `f`, save, and return what `f` returned.
    ///
    /// This is the one way mutations should be written: holding an
    /// aggregate across separate calls and saving it later silently
    /// discards whatever was written in between.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut Aggregate) -> T) -> Result<T> {
        let mut aggregate = self.load();
        let out = f(&mut aggregate);
        self.save(&aggregate)?;
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    /// Register `listener` to run after every save.
    ///
    /// Registering the same `Arc` twice is a no-op. Dropping the returned
    /// [`Subscription`] does not unregister; call
    /// [`Subscription::unsubscribe`].
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        {
            let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            if !listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
                listeners.push(listener.clone());
            }
        }

        Subscription {
            registry: Arc::downgrade(&self.listeners),
            listener,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self) {
        // Snapshot first so listeners may load, subscribe or unsubscribe.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for listener in listeners {
            listener();
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[must_use = "dropping a Subscription keeps the listener registered; call unsubscribe() to remove it"]
pub struct Subscription {
    registry: Weak<Mutex<Vec<Listener>>>,
    listener: Listener,
}

impl Subscription {
    /// Remove the listener. A no-op if it was already removed or the store
    /// is gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|l| !Arc::ptr_eq(l, &self.listener));
        }
    }
}

/// Fresh record identifier (UUID v4).
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
