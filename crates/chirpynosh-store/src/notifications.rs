//! Notification operations.

use chrono::Utc;

use chirpynosh_shared::NotificationType;

use crate::backend::Backend;
use crate::error::Result;
use crate::models::{Aggregate, AppNotification, NewNotification};
use crate::store::{new_id, Store};

impl<B: Backend> Store<B> {
    /// Append a notification (unread).
    pub fn add_notification(&self, input: NewNotification) -> Result<AppNotification> {
        let notification = build(input.kind, input.title, input.message);
        let created = notification.clone();

        self.mutate(|agg| agg.notifications.insert(0, notification))?;

        tracing::debug!(id = %created.id, kind = %created.kind, "added notification");
        Ok(created)
    }

    /// Mark a notification read. Returns `false` if no notification has
    /// that id; the aggregate is saved either way.
    pub fn mark_notification_read(&self, id: &str) -> Result<bool> {
        self.mutate(|agg| match agg.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        })
    }
}

fn build(kind: NotificationType, title: impl Into<String>, message: impl Into<String>) -> AppNotification {
    AppNotification {
        id: new_id(),
        kind,
        title: title.into(),
        message: message.into(),
        created_at: Utc::now(),
        read: false,
    }
}

/// Prepend a freshly built notification inside an ongoing mutation.
pub(crate) fn push(
    agg: &mut Aggregate,
    kind: NotificationType,
    title: impl Into<String>,
    message: impl Into<String>,
) {
    agg.notifications.insert(0, build(kind, title, message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn reminder(title: &str) -> NewNotification {
        NewNotification {
            kind: NotificationType::PickupReminder,
            title: title.to_string(),
            message: "Pickup starts in 30 minutes".to_string(),
        }
    }

    #[test]
    fn test_add_notification_prepends_unread() {
        let store = Store::new(MemoryBackend::new());
        store.add_notification(reminder("first")).unwrap();
        let second = store.add_notification(reminder("second")).unwrap();

        let agg = store.load();
        assert_eq!(agg.notifications.len(), 2);
        assert_eq!(agg.notifications[0], second);
        assert!(!second.read);
        assert_eq!(agg.unread_notification_count(), 2);
    }

    #[test]
    fn test_mark_read_is_monotonic() {
        let store = Store::new(MemoryBackend::new());
        let n = store.add_notification(reminder("r")).unwrap();

        assert!(store.mark_notification_read(&n.id).unwrap());
        assert!(store.mark_notification_read(&n.id).unwrap());
        assert!(store.load().notifications[0].read);
        assert_eq!(store.load().unread_notification_count(), 0);
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let store = Store::new(MemoryBackend::new());
        store.add_notification(reminder("r")).unwrap();
        assert!(!store.mark_notification_read("missing").unwrap());
        assert_eq!(store.load().unread_notification_count(), 1);
    }
}
