//! Fixed enumerations stored inside the aggregate.
//!
//! The serde representation of every variant matches the strings the
//! original browser store wrote, so aggregates persisted by either side load
//! on the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Generates `as_str`, `ALL`, `Display` and `FromStr` from one table of
/// `Variant => "wire"` pairs.
macro_rules! wire_strings {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($ty::$variant),)+
                    other => Err(ParseKindError::new($kind, other)),
                }
            }
        }
    };
}

/// Kind of business offering surplus food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerCategory {
    Restaurant,
    Supermarket,
    Bakery,
    Hotel,
    Shop,
}

wire_strings!(PartnerCategory, "partner category", {
    Restaurant => "Restaurant",
    Supermarket => "Supermarket",
    Bakery => "Bakery",
    Hotel => "Hotel",
    Shop => "Shop",
});

/// Food category of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingCategory {
    Bakery,
    Produce,
    Meals,
    Dairy,
    Mixed,
}

wire_strings!(ListingCategory, "listing category", {
    Bakery => "Bakery",
    Produce => "Produce",
    Meals => "Meals",
    Dairy => "Dairy",
    Mixed => "Mixed",
});

/// `Free` listings are for recipients only; `Discounted` ones are open to
/// the public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Free,
    Discounted,
}

wire_strings!(ListingKind, "listing kind", {
    Free => "free",
    Discounted => "discounted",
});

/// Who placed a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimerKind {
    Recipient,
    Public,
}

wire_strings!(ClaimerKind, "claimer kind", {
    Recipient => "recipient",
    Public => "public",
});

/// Claim lifecycle: `Claimed` → `PickedUp` | `Cancelled`.
///
/// Transitions are not enforced by the store; see
/// [`ClaimStatus::is_terminal`] for callers that want to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Claimed,
    PickedUp,
    Cancelled,
}

wire_strings!(ClaimStatus, "claim status", {
    Claimed => "claimed",
    PickedUp => "picked_up",
    Cancelled => "cancelled",
});

impl ClaimStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::PickedUp | ClaimStatus::Cancelled)
    }
}

/// Type tag carried by every in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ClaimCreated,
    PickupConfirmed,
    ClaimCancelled,
    PickupReminder,
    ExpirationUrgent,
}

wire_strings!(NotificationType, "notification type", {
    ClaimCreated => "claim_created",
    PickupConfirmed => "pickup_confirmed",
    ClaimCancelled => "claim_cancelled",
    PickupReminder => "pickup_reminder",
    ExpirationUrgent => "expiration_urgent",
});
