//! Domain records held in the persisted aggregate.
//!
//! Field names are serialized in camelCase, with the partner category and
//! the notification tag stored under `type`. This is the layout the slot
//! has always had. Records reference each other only through id strings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use chirpynosh_shared::{
    ClaimStatus, ClaimerKind, ListingCategory, ListingKind, NotificationType, PartnerCategory,
};

// ---------------------------------------------------------------------------
// Partner
// ---------------------------------------------------------------------------

/// A business offering surplus food.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PartnerCategory,
    pub address: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for [`Store::add_partner`](crate::Store::add_partner).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub name: String,
    #[serde(rename = "type")]
    pub category: PartnerCategory,
    pub address: String,
    pub verified: bool,
}

// ---------------------------------------------------------------------------
// Recipient
// ---------------------------------------------------------------------------

/// A receiving organisation such as a shelter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: String,
    pub org_name: String,
    pub address: String,
    /// People served. Any JSON number is kept as written; older clients
    /// never checked for negative or fractional values.
    pub capacity: f64,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipient {
    pub org_name: String,
    pub address: String,
    pub capacity: f64,
    pub verified: bool,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A surplus-food offer published by a partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    /// Owning partner. Not checked against `partners`.
    pub partner_id: String,
    pub title: String,
    pub description: String,
    pub category: ListingCategory,
    pub listing_type: ListingKind,
    /// Not validated, same as `Recipient::capacity`.
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_eur: Option<f64>,
    pub pickup_windows: Vec<String>,
    /// Derived once at creation from `pickup_windows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub partner_id: String,
    pub title: String,
    pub description: String,
    pub category: ListingCategory,
    pub listing_type: ListingKind,
    pub quantity: f64,
    #[serde(default)]
    pub price_eur: Option<f64>,
    pub pickup_windows: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Claim
// ---------------------------------------------------------------------------

/// A reservation against a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub listing_id: String,
    pub claimed_by: ClaimerKind,
    pub claimer_name: String,
    /// Not checked against the listing's windows.
    pub pickup_window: String,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    pub listing_id: String,
    pub claimed_by: ClaimerKind,
    pub claimer_name: String,
    pub pickup_window: String,
}

// ---------------------------------------------------------------------------
// Expiration item
// ---------------------------------------------------------------------------

/// A stock item tracked for expiry, independent of any listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationItem {
    pub id: String,
    pub item: String,
    /// Calendar date, `YYYY-MM-DD` on disk.
    pub expires_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewExpirationItem {
    pub item: String,
    pub expires_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// An in-app notification. Only `read` ever changes, from false to true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Every collection, persisted as one unit. Each collection is kept
/// newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Aggregate {
    pub partners: Vec<Partner>,
    pub recipients: Vec<Recipient>,
    pub listings: Vec<Listing>,
    pub claims: Vec<Claim>,
    pub expirations: Vec<ExpirationItem>,
    pub notifications: Vec<AppNotification>,
}

/// Lenient on-disk shape used when loading. Older or partial records may
/// lack collections or store them as `null`;
/// [`PersistedAggregate::into_aggregate`] decides which gaps are tolerated.
#[derive(Debug, Deserialize)]
pub(crate) struct PersistedAggregate {
    partners: Option<Vec<Partner>>,
    listings: Option<Vec<Listing>>,
    recipients: Option<Vec<Recipient>>,
    claims: Option<Vec<Claim>>,
    expirations: Option<Vec<ExpirationItem>>,
    notifications: Option<Vec<AppNotification>>,
}

impl PersistedAggregate {
    /// `None` when either required collection (`partners`, `listings`) is
    /// absent or null. Every other absent or null collection is backfilled
    /// as empty.
    pub(crate) fn into_aggregate(self) -> Option<Aggregate> {
        Some(Aggregate {
            partners: self.partners?,
            listings: self.listings?,
            recipients: self.recipients.unwrap_or_default(),
            claims: self.claims.unwrap_or_default(),
            expirations: self.expirations.unwrap_or_default(),
            notifications: self.notifications.unwrap_or_default(),
        })
    }

    /// First numeric field JSON cannot represent (NaN or infinite), as
    /// `collection[id].field`.
    pub(crate) fn non_finite_field(aggregate: &Aggregate) -> Option<String> {
        for r in &aggregate.recipients {
            if !r.capacity.is_finite() {
                return Some(format!("recipients[{}].capacity", r.id));
            }
        }
        for l in &aggregate.listings {
            if !l.quantity.is_finite() {
                return Some(format!("listings[{}].quantity", l.id));
            }
            if l.price_eur.is_some_and(|p| !p.is_finite()) {
                return Some(format!("listings[{}].priceEur", l.id));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_wire_layout() {
        let json = r#"{
            "id": "l9",
            "partnerId": "p1",
            "title": "Soup",
            "description": "Leftover soup",
            "category": "Meals",
            "listingType": "discounted",
            "quantity": 4,
            "priceEur": 2.5,
            "pickupWindows": ["18:00–19:00"],
            "predictedWindow": "18:00–19:00",
            "createdAt": "2024-05-01T10:00:00.000Z"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.partner_id, "p1");
        assert_eq!(listing.listing_type, ListingKind::Discounted);
        assert_eq!(listing.price_eur, Some(2.5));
        assert_eq!(listing.image_url, None);

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["listingType"], "discounted");
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_partner_category_stored_as_type() {
        let json = r#"{"id":"p","name":"N","type":"Hotel","address":"A","verified":false,"createdAt":"2024-05-01T10:00:00Z"}"#;
        let partner: Partner = serde_json::from_str(json).unwrap();
        assert_eq!(partner.category, PartnerCategory::Hotel);
    }

    #[test]
    fn test_persisted_requires_partners_and_listings() {
        let missing_listings: PersistedAggregate =
            serde_json::from_str(r#"{"partners": []}"#).unwrap();
        assert!(missing_listings.into_aggregate().is_none());

        let minimal: PersistedAggregate =
            serde_json::from_str(r#"{"partners": [], "listings": []}"#).unwrap();
        let agg = minimal.into_aggregate().unwrap();
        assert!(agg.notifications.is_empty());
        assert!(agg.claims.is_empty());

        let null_partners: PersistedAggregate =
            serde_json::from_str(r#"{"partners": null, "listings": []}"#).unwrap();
        assert!(null_partners.into_aggregate().is_none());
    }

    #[test]
    fn test_null_collections_are_backfilled() {
        let json = r#"{"partners": [], "listings": [], "recipients": null,
                       "claims": null, "expirations": null, "notifications": null}"#;
        let persisted: PersistedAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(persisted.into_aggregate(), Some(Aggregate::default()));
    }

    #[test]
    fn test_unchecked_numbers_deserialize() {
        let recipient: Recipient = serde_json::from_str(
            r#"{"id":"r7","orgName":"O","address":"A","capacity":-5,"verified":false,"createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(recipient.capacity, -5.0);

        let listing: Listing = serde_json::from_str(
            r#"{"id":"l7","partnerId":"p1","title":"T","description":"D","category":"Mixed",
                "listingType":"free","quantity":2.5,"pickupWindows":[],"createdAt":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(listing.quantity, 2.5);
    }

    #[test]
    fn test_non_finite_field() {
        let mut agg = Aggregate::default();
        assert_eq!(PersistedAggregate::non_finite_field(&agg), None);

        agg.recipients.push(Recipient {
            id: "r1".to_string(),
            org_name: "O".to_string(),
            address: "A".to_string(),
            capacity: f64::NAN,
            verified: false,
            created_at: chrono::Utc::now(),
        });
        assert_eq!(
            PersistedAggregate::non_finite_field(&agg).as_deref(),
            Some("recipients[r1].capacity")
        );
    }
}
