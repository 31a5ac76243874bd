//! Urgency tagging for tracked expiration items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{SOON_WITHIN_DAYS, URGENT_WITHIN_DAYS};

/// Whole calendar days from `today` until `expires_on`. Negative once the
/// date has passed.
pub fn days_until(expires_on: NaiveDate, today: NaiveDate) -> i64 {
    (expires_on - today).num_days()
}

/// How soon an item needs rescuing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Expires within a day, or already expired.
    Urgent,
    /// Expires within three days.
    Soon,
    Ok,
}

impl Urgency {
    pub fn from_days(days_left: i64) -> Self {
        if days_left <= URGENT_WITHIN_DAYS {
            Urgency::Urgent
        } else if days_left <= SOON_WITHIN_DAYS {
            Urgency::Soon
        } else {
            Urgency::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Urgent => "Urgent",
            Urgency::Soon => "Soon",
            Urgency::Ok => "OK",
        }
    }
}
