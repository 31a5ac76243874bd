//! Read-side views over a loaded [`Aggregate`].
//!
//! Nothing here touches the backend; callers `load()` once and query the
//! snapshot.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use chirpynosh_shared::constants::CO2_KG_PER_PORTION;
use chirpynosh_shared::{days_until, ClaimStatus, ListingCategory, ListingKind, Urgency};

use crate::models::{Aggregate, Claim, ExpirationItem, Listing, Partner};

/// Sort order for [`Aggregate::search_listings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingSort {
    #[default]
    Newest,
    QuantityDesc,
    /// Listings without a price sort as if free.
    PriceAsc,
}

/// Listing filter. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Case-insensitive match against title, description and partner name.
    pub text: Option<String>,
    pub category: Option<ListingCategory>,
    pub listing_type: Option<ListingKind>,
    pub sort: ListingSort,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_listings: usize,
    pub total_claims: usize,
    pub picked_up: usize,
    /// Sum of listing quantities, negative and fractional ones included.
    pub portions_rescued: f64,
    /// Rounded to whole kilograms.
    pub co2_kg_avoided: i64,
}

/// An expiration item tagged relative to a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryStatus<'a> {
    pub item: &'a ExpirationItem,
    /// Negative once expired.
    pub days_left: i64,
    pub urgency: Urgency,
}

impl<'a> ExpiryStatus<'a> {
    pub fn is_expired(&self) -> bool {
        self.days_left < 0
    }
}

impl Aggregate {
    pub fn partner(&self, id: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id)
    }

    /// Claims against one listing, newest first.
    pub fn claims_for_listing(&self, listing_id: &str) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| c.listing_id == listing_id)
            .collect()
    }

    pub fn listing_count_for_partner(&self, partner_id: &str) -> usize {
        self.listings
            .iter()
            .filter(|l| l.partner_id == partner_id)
            .count()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn search_listings(&self, query: &ListingQuery) -> Vec<&Listing> {
        let partner_names: HashMap<&str, String> = self
            .partners
            .iter()
            .map(|p| (p.id.as_str(), p.name.to_lowercase()))
            .collect();

        let needle = query
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|l| match &needle {
                Some(t) => {
                    l.title.to_lowercase().contains(t)
                        || l.description.to_lowercase().contains(t)
                        || partner_names
                            .get(l.partner_id.as_str())
                            .is_some_and(|name| name.contains(t))
                }
                None => true,
            })
            .filter(|l| query.category.map_or(true, |c| l.category == c))
            .filter(|l| query.listing_type.map_or(true, |k| l.listing_type == k))
            .collect();

        // Stable sorts: ties keep stored (newest-first) order.
        match query.sort {
            ListingSort::Newest => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ListingSort::QuantityDesc => items.sort_by(|a, b| {
                b.quantity
                    .partial_cmp(&a.quantity)
                    .unwrap_or(Ordering::Equal)
            }),
            ListingSort::PriceAsc => items.sort_by(|a, b| {
                let pa = a.price_eur.unwrap_or(0.0);
                let pb = b.price_eur.unwrap_or(0.0);
                pa.partial_cmp(&pb).unwrap_or(Ordering::Equal)
            }),
        }

        items
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let portions_rescued: f64 = self.listings.iter().map(|l| l.quantity).sum();

        DashboardStats {
            total_listings: self.listings.len(),
            total_claims: self.claims.len(),
            picked_up: self
                .claims
                .iter()
                .filter(|c| c.status == ClaimStatus::PickedUp)
                .count(),
            portions_rescued,
            co2_kg_avoided: (portions_rescued * CO2_KG_PER_PORTION).round() as i64,
        }
    }

    /// Expiration items soonest first, each tagged relative to `today`.
    pub fn expirations_by_date(&self, today: NaiveDate) -> Vec<ExpiryStatus<'_>> {
        let mut items: Vec<ExpiryStatus<'_>> = self
            .expirations
            .iter()
            .map(|item| {
                let days_left = days_until(item.expires_on, today);
                ExpiryStatus {
                    item,
                    days_left,
                    urgency: Urgency::from_days(days_left),
                }
            })
            .collect();
        items.sort_by_key(|s| s.item.expires_on);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::seed::seed_aggregate;

    fn seed() -> Aggregate {
        seed_aggregate(Utc::now())
    }

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_lookups() {
        let agg = seed();
        assert_eq!(agg.partner("p2").unwrap().name, "CityFresh Market");
        assert_eq!(agg.listing("l1").unwrap().quantity, 20.0);
        assert!(agg.claim("c1").is_none());
        assert_eq!(agg.listing_count_for_partner("p1"), 1);
        assert_eq!(agg.listing_count_for_partner("p9"), 0);
    }

    #[test]
    fn test_search_by_partner_name() {
        let agg = seed();
        let query = ListingQuery {
            text: Some("  cityFRESH ".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&query)), vec!["l2"]);
    }

    #[test]
    fn test_search_by_description_and_filters() {
        let agg = seed();
        let query = ListingQuery {
            text: Some("bread".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&query)), vec!["l1"]);

        let discounted = ListingQuery {
            listing_type: Some(ListingKind::Discounted),
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&discounted)), vec!["l2"]);

        let dairy = ListingQuery {
            category: Some(ListingCategory::Dairy),
            ..Default::default()
        };
        assert!(agg.search_listings(&dairy).is_empty());
    }

    #[test]
    fn test_sorts() {
        let mut agg = seed();
        agg.listings[1].created_at = agg.listings[0].created_at + Duration::seconds(5);

        let newest = ListingQuery::default();
        assert_eq!(ids(&agg.search_listings(&newest)), vec!["l2", "l1"]);

        let by_quantity = ListingQuery {
            sort: ListingSort::QuantityDesc,
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&by_quantity)), vec!["l1", "l2"]);

        // l1 has no price and sorts as free.
        let by_price = ListingQuery {
            sort: ListingSort::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&by_price)), vec!["l1", "l2"]);
    }

    #[test]
    fn test_dashboard_stats() {
        let mut agg = seed();
        agg.claims.push(Claim {
            id: "c1".to_string(),
            listing_id: "l1".to_string(),
            claimed_by: chirpynosh_shared::ClaimerKind::Recipient,
            claimer_name: "Hope Shelter".to_string(),
            pickup_window: "10:00–12:00".to_string(),
            status: ClaimStatus::PickedUp,
            created_at: Utc::now(),
        });

        let stats = agg.dashboard_stats();
        assert_eq!(stats.total_listings, 2);
        assert_eq!(stats.total_claims, 1);
        assert_eq!(stats.picked_up, 1);
        assert_eq!(stats.portions_rescued, 32.0);
        // 32 * 0.7 = 22.4
        assert_eq!(stats.co2_kg_avoided, 22);
    }

    #[test]
    fn test_unchecked_quantities_in_stats_and_sort() {
        let mut agg = seed();
        agg.listings[0].quantity = -1.0;
        agg.listings[1].quantity = 2.5;

        let stats = agg.dashboard_stats();
        assert_eq!(stats.portions_rescued, 1.5);
        // 1.5 * 0.7 = 1.05
        assert_eq!(stats.co2_kg_avoided, 1);

        let by_quantity = ListingQuery {
            sort: ListingSort::QuantityDesc,
            ..Default::default()
        };
        assert_eq!(ids(&agg.search_listings(&by_quantity)), vec!["l2", "l1"]);
    }

    #[test]
    fn test_expirations_by_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut agg = Aggregate::default();
        for (id, offset) in [("later", 10), ("past", -1), ("soon", 2)] {
            agg.expirations.push(ExpirationItem {
                id: id.to_string(),
                item: id.to_string(),
                expires_on: today + Duration::days(offset),
                notes: None,
                created_at: Utc::now(),
            });
        }

        let sorted = agg.expirations_by_date(today);
        let order: Vec<_> = sorted.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(order, vec!["past", "soon", "later"]);

        assert!(sorted[0].is_expired());
        assert_eq!(sorted[0].urgency, Urgency::Urgent);
        assert_eq!(sorted[1].days_left, 2);
        assert_eq!(sorted[1].urgency, Urgency::Soon);
        assert_eq!(sorted[2].urgency, Urgency::Ok);
    }
}
