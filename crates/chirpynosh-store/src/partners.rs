//! Partner and recipient registration. Neither has an update or delete
//! operation.

use chrono::Utc;

use crate::backend::Backend;
use crate::error::Result;
use crate::models::{NewPartner, NewRecipient, Partner, Recipient};
use crate::store::{new_id, Store};

impl<B: Backend> Store<B> {
    pub fn add_partner(&self, input: NewPartner) -> Result<Partner> {
        let partner = Partner {
            id: new_id(),
            name: input.name,
            category: input.category,
            address: input.address,
            verified: input.verified,
            created_at: Utc::now(),
        };

        let created = partner.clone();
        self.mutate(|agg| agg.partners.insert(0, partner))?;

        tracing::debug!(id = %created.id, name = %created.name, "added partner");
        Ok(created)
    }

    pub fn add_recipient(&self, input: NewRecipient) -> Result<Recipient> {
        let recipient = Recipient {
            id: new_id(),
            org_name: input.org_name,
            address: input.address,
            capacity: input.capacity,
            verified: input.verified,
            created_at: Utc::now(),
        };

        let created = recipient.clone();
        self.mutate(|agg| agg.recipients.insert(0, recipient))?;

        tracing::debug!(id = %created.id, org = %created.org_name, "added recipient");
        Ok(created)
    }
}
