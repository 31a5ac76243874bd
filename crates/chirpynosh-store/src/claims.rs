//! Claim operations.
//!
//! A claim starts as `claimed`. Status changes are not validated: a
//! terminal claim can be moved again, and every move to `picked_up` or
//! `cancelled` appends a notification, even a repeat of the current status.

use chrono::Utc;

use chirpynosh_shared::{ClaimStatus, NotificationType};

use crate::backend::Backend;
use crate::error::Result;
use crate::models::{Claim, NewClaim};
use crate::notifications;
use crate::store::{new_id, Store};

impl<B: Backend> Store<B> {
    /// Create a claim and its `claim_created` notification in one write.
    ///
    /// Neither the listing id nor the pickup window is checked against the
    /// listing.
    pub fn add_claim(&self, input: NewClaim) -> Result<Claim> {
        let claim = Claim {
            id: new_id(),
            listing_id: input.listing_id,
            claimed_by: input.claimed_by,
            claimer_name: input.claimer_name,
            pickup_window: input.pickup_window,
            status: ClaimStatus::Claimed,
            created_at: Utc::now(),
        };

        let created = claim.clone();
        self.mutate(|agg| {
            let message = format!(
                "{} claimed a listing for {}",
                claim.claimer_name, claim.pickup_window
            );
            agg.claims.insert(0, claim);
            notifications::push(agg, NotificationType::ClaimCreated, "Food claimed", message);
        })?;

        tracing::debug!(id = %created.id, listing_id = %created.listing_id, "added claim");
        Ok(created)
    }

    /// Set a claim's status. Returns the updated claim, or `None` if no
    /// claim has that id (the aggregate is re-saved unchanged).
    pub fn update_claim_status(&self, claim_id: &str, status: ClaimStatus) -> Result<Option<Claim>> {
        let updated = self.mutate(|agg| {
            let claim = agg.claims.iter_mut().find(|c| c.id == claim_id)?;
            claim.status = status;
            let claim = claim.clone();

            match status {
                ClaimStatus::PickedUp => notifications::push(
                    agg,
                    NotificationType::PickupConfirmed,
                    "Pickup completed",
                    format!(
                        "Pickup confirmed for window {}. Great job reducing waste!",
                        claim.pickup_window
                    ),
                ),
                ClaimStatus::Cancelled => notifications::push(
                    agg,
                    NotificationType::ClaimCancelled,
                    "Claim cancelled",
                    format!("A claim was cancelled for window {}.", claim.pickup_window),
                ),
                ClaimStatus::Claimed => {}
            }

            Some(claim)
        })?;

        match &updated {
            Some(_) => tracing::debug!(claim_id, %status, "updated claim status"),
            None => tracing::debug!(claim_id, "claim not found, status unchanged"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpynosh_shared::ClaimerKind;

    use crate::backend::MemoryBackend;

    fn new_claim(name: &str) -> NewClaim {
        NewClaim {
            listing_id: "l2".to_string(),
            claimed_by: ClaimerKind::Public,
            claimer_name: name.to_string(),
            pickup_window: "12:00–18:00".to_string(),
        }
    }

    #[test]
    fn test_add_claim_creates_notification() {
        let store = Store::new(MemoryBackend::new());
        let claim = store.add_claim(new_claim("Ana")).unwrap();
        assert_eq!(claim.status, ClaimStatus::Claimed);

        let agg = store.load();
        assert_eq!(agg.claims, vec![claim]);
        assert_eq!(agg.notifications.len(), 1);
        assert_eq!(agg.notifications[0].kind, NotificationType::ClaimCreated);
        assert_eq!(
            agg.notifications[0].message,
            "Ana claimed a listing for 12:00–18:00"
        );
    }

    #[test]
    fn test_cancel_notifies() {
        let store = Store::new(MemoryBackend::new());
        let claim = store.add_claim(new_claim("Ana")).unwrap();

        let updated = store
            .update_claim_status(&claim.id, ClaimStatus::Cancelled)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, ClaimStatus::Cancelled);

        let agg = store.load();
        assert_eq!(agg.claims[0].status, ClaimStatus::Cancelled);
        assert_eq!(agg.notifications[0].kind, NotificationType::ClaimCancelled);
        assert_eq!(
            agg.notifications[0].message,
            "A claim was cancelled for window 12:00–18:00."
        );
    }

    #[test]
    fn test_back_to_claimed_is_silent() {
        let store = Store::new(MemoryBackend::new());
        let claim = store.add_claim(new_claim("Ana")).unwrap();
        store
            .update_claim_status(&claim.id, ClaimStatus::Cancelled)
            .unwrap();

        // Terminal statuses are not protected.
        store
            .update_claim_status(&claim.id, ClaimStatus::Claimed)
            .unwrap();

        let agg = store.load();
        assert_eq!(agg.claims[0].status, ClaimStatus::Claimed);
        assert_eq!(agg.notifications.len(), 2);
    }

    #[test]
    fn test_unknown_claim_resaves_unchanged() {
        let store = Store::new(MemoryBackend::new());
        store.add_claim(new_claim("Ana")).unwrap();
        let before = store.load();

        let saves = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let s = saves.clone();
        let _sub = store.subscribe(std::sync::Arc::new(move || {
            s.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }));

        let result = store
            .update_claim_status("missing", ClaimStatus::PickedUp)
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.load(), before);
        assert_eq!(saves.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
