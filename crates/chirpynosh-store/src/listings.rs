//! Listing operations.

use chrono::Utc;

use chirpynosh_shared::{predict_window, NotificationType};

use crate::backend::Backend;
use crate::error::Result;
use crate::models::{Listing, NewListing};
use crate::notifications;
use crate::store::{new_id, Store};

impl<B: Backend> Store<B> {
    /// Create a listing. `predicted_window` is fixed here and never
    /// recomputed.
    pub fn add_listing(&self, input: NewListing) -> Result<Listing> {
        let listing = Listing {
            id: new_id(),
            predicted_window: predict_window(&input.pickup_windows),
            partner_id: input.partner_id,
            title: input.title,
            description: input.description,
            category: input.category,
            listing_type: input.listing_type,
            quantity: input.quantity,
            price_eur: input.price_eur,
            pickup_windows: input.pickup_windows,
            image_url: input.image_url,
            created_at: Utc::now(),
        };

        let created = listing.clone();
        self.mutate(|agg| agg.listings.insert(0, listing))?;

        tracing::debug!(
            id = %created.id,
            partner_id = %created.partner_id,
            predicted = ?created.predicted_window,
            "added listing"
        );
        Ok(created)
    }

    /// Remove a listing together with every claim against it.
    ///
    /// A "Listing removed" notification is appended even when no listing
    /// matched. It carries the `claim_cancelled` tag; there is no
    /// dedicated tag for listing removal. Returns whether the listing
    /// existed.
    pub fn delete_listing(&self, listing_id: &str) -> Result<bool> {
        let (existed, claims_removed) = self.mutate(|agg| {
            let listings_before = agg.listings.len();
            agg.listings.retain(|l| l.id != listing_id);

            let claims_before = agg.claims.len();
            agg.claims.retain(|c| c.listing_id != listing_id);

            notifications::push(
                agg,
                NotificationType::ClaimCancelled,
                "Listing removed",
                "A listing was removed after pickup / cleanup.",
            );

            (
                agg.listings.len() < listings_before,
                claims_before - agg.claims.len(),
            )
        })?;

        tracing::debug!(listing_id, existed, claims_removed, "deleted listing");
        Ok(existed)
    }
}
