//! # chirpynosh-shared
//!
//! Domain vocabulary shared by every Chirpynosh crate: the fixed enumerations
//! stored inside the aggregate, application constants, and the small pure
//! helpers (pickup-window prediction, expiry urgency, recipe suggestions)
//! that sit next to the data model but never touch storage.

pub mod constants;
pub mod error;
pub mod expiry;
pub mod recipes;
pub mod types;
pub mod windows;

pub use error::ParseKindError;
pub use expiry::{days_until, Urgency};
pub use recipes::{suggest_recipes, RecipeSuggestion};
pub use types::*;
pub use windows::{parse_pickup_windows, predict_window};
