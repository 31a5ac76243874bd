//! # chirpynosh-store
//!
//! Local persistence for the Chirpynosh food-rescue marketplace.
//!
//! The whole dataset (partners, recipients, listings, claims, expiration
//! items and notifications) lives in one [`Aggregate`], serialized to JSON
//! and stored in a single slot of an injected [`Backend`]. [`Store`] is the
//! only way in: it loads the aggregate (falling back to a seed), replaces
//! it wholesale on every write, and synchronously notifies listeners after
//! each save. Each mutation method is one load-mutate-save cycle.

pub mod backend;
pub mod config;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod seed;

mod claims;
mod error;
mod expirations;
mod listings;
mod notifications;
mod partners;
mod store;

pub use backend::{Backend, FileBackend, MemoryBackend, SqliteBackend};
pub use config::{BackendKind, StoreConfig};
pub use error::{Result, StoreError};
pub use models::*;
pub use queries::{DashboardStats, ExpiryStatus, ListingQuery, ListingSort};
pub use store::{Listener, Store, Subscription};
