//! The fixed seed aggregate used when no valid persisted aggregate exists.

use chrono::{DateTime, Utc};

use chirpynosh_shared::constants::{
    SEED_LISTING_BAKERY, SEED_LISTING_PRODUCE, SEED_PARTNER_BAKERY, SEED_PARTNER_MARKET,
    SEED_RECIPIENT_SHELTER,
};
use chirpynosh_shared::{ListingCategory, ListingKind, PartnerCategory};

use crate::models::{Aggregate, Listing, Partner, Recipient};

/// Build the seed with every `created_at` set to `created_at`: two partners,
/// one recipient, two listings, and no claims, expirations or notifications.
pub fn seed_aggregate(created_at: DateTime<Utc>) -> Aggregate {
    Aggregate {
        partners: vec![
            Partner {
                id: SEED_PARTNER_BAKERY.to_string(),
                name: "GreenBite Bakery".to_string(),
                category: PartnerCategory::Bakery,
                address: "Central District".to_string(),
                verified: true,
                created_at,
            },
            Partner {
                id: SEED_PARTNER_MARKET.to_string(),
                name: "CityFresh Market".to_string(),
                category: PartnerCategory::Supermarket,
                address: "North Avenue".to_string(),
                verified: true,
                created_at,
            },
        ],
        recipients: vec![Recipient {
            id: SEED_RECIPIENT_SHELTER.to_string(),
            org_name: "Hope Shelter".to_string(),
            address: "Old Town".to_string(),
            capacity: 60.0,
            verified: true,
            created_at,
        }],
        listings: vec![
            Listing {
                id: SEED_LISTING_BAKERY.to_string(),
                partner_id: SEED_PARTNER_BAKERY.to_string(),
                title: "Fresh Bakery Packs".to_string(),
                description: "Assorted bread and pastries, packed and ready.".to_string(),
                category: ListingCategory::Bakery,
                listing_type: ListingKind::Free,
                quantity: 20.0,
                price_eur: None,
                pickup_windows: vec!["10:00–12:00".to_string(), "14:00–16:00".to_string()],
                predicted_window: Some("14:00–16:00".to_string()),
                image_url: Some("/foods/bakery.jpg".to_string()),
                created_at,
            },
            Listing {
                id: SEED_LISTING_PRODUCE.to_string(),
                partner_id: SEED_PARTNER_MARKET.to_string(),
                title: "Near-expiry Produce Box".to_string(),
                description: "Mixed fruits and veggies. Great for smoothies & cooking."
                    .to_string(),
                category: ListingCategory::Produce,
                listing_type: ListingKind::Discounted,
                quantity: 12.0,
                price_eur: Some(3.0),
                pickup_windows: vec!["12:00–18:00".to_string()],
                predicted_window: Some("12:00–18:00".to_string()),
                image_url: Some("/foods/produce.jpg".to_string()),
                created_at,
            },
        ],
        claims: Vec::new(),
        expirations: Vec::new(),
        notifications: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpynosh_shared::predict_window;

    #[test]
    fn test_seed_shape() {
        let seed = seed_aggregate(Utc::now());
        assert_eq!(seed.partners.len(), 2);
        assert_eq!(seed.recipients.len(), 1);
        assert_eq!(seed.listings.len(), 2);
        assert!(seed.claims.is_empty());
        assert!(seed.expirations.is_empty());
        assert!(seed.notifications.is_empty());
    }

    #[test]
    fn test_seed_predictions_follow_rule() {
        for listing in seed_aggregate(Utc::now()).listings {
            assert_eq!(listing.predicted_window, predict_window(&listing.pickup_windows));
        }
    }
}
