//! Process-wide notification store backing the notification center.

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::domain::models::{Notification, NotificationKind};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Global store used by the server functions.
pub static NOTIFICATIONS: Lazy<NotificationStore> = Lazy::new(NotificationStore::new);

#[derive(Default)]
pub struct NotificationStore {
    entries: DashMap<String, Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> Notification {
        let notification = Notification::new(kind, message);
        logging::log_notification_created(&notification.id, kind.as_str());
        self.entries
            .insert(notification.id.clone(), notification.clone());
        notification
    }

    /// One unread sample per kind, for demo installs without a fleet.
    pub fn seed_demo(&self) -> usize {
        for kind in NotificationKind::ALL {
            self.push(kind, demo_message(kind));
        }
        logging::log_notifications_seeded(NotificationKind::ALL.len());
        NotificationKind::ALL.len()
    }

    /// All notifications, newest first.
    pub fn list(&self) -> Vec<Notification> {
        let mut all: Vec<Notification> = self.entries.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created.cmp(&a.created));
        all
    }

    pub fn has_unread(&self) -> bool {
        self.entries.iter().any(|e| !e.value().read)
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.value().read).count()
    }

    pub fn set_read(&self, id: &str, read: bool) -> Result<Notification> {
        let mut entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| AppError::NotificationNotFound(id.to_string()))?;
        entry.read = read;
        logging::log_notification_read(id, read);
        Ok(entry.clone())
    }

    /// Marks every notification read, returning how many changed.
    pub fn mark_all_read(&self) -> usize {
        let mut changed = 0;
        for mut entry in self.entries.iter_mut() {
            if !entry.read {
                entry.read = true;
                changed += 1;
            }
        }
        logging::log_notifications_cleared(changed);
        changed
    }
}

fn demo_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::HighValueTransaction => "Transaction over the high-value threshold at Lobby ATM",
        NotificationKind::FiatBalance => "Cash cassette 1 is running low",
        NotificationKind::CryptoBalance => "Hot wallet balance below the configured minimum",
        NotificationKind::Compliance => "Customer flagged for manual ID review",
        NotificationKind::Error => "Machine stopped responding to pings",
        NotificationKind::Security => "New admin login from an unknown device",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_unread() {
        let store = NotificationStore::new();
        assert!(!store.has_unread());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_push_makes_unread() {
        let store = NotificationStore::new();
        store.push(NotificationKind::FiatBalance, "Cassette 1 low");
        assert!(store.has_unread());
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn test_set_read_toggles_both_ways() {
        let store = NotificationStore::new();
        let n = store.push(NotificationKind::Security, "New login");

        assert!(store.set_read(&n.id, true).unwrap().read);
        assert!(!store.has_unread());

        assert!(!store.set_read(&n.id, false).unwrap().read);
        assert!(store.has_unread());
    }

    #[test]
    fn test_set_read_unknown_id() {
        let store = NotificationStore::new();
        assert!(matches!(
            store.set_read("missing", true),
            Err(AppError::NotificationNotFound(_))
        ));
    }

    #[test]
    fn test_mark_all_read_counts_changes() {
        let store = NotificationStore::new();
        let first = store.push(NotificationKind::Error, "Machine offline");
        store.push(NotificationKind::Compliance, "Customer flagged");
        store.set_read(&first.id, true).unwrap();

        assert_eq!(store.mark_all_read(), 1);
        assert!(!store.has_unread());
        assert_eq!(store.mark_all_read(), 0);
    }

    #[test]
    fn test_seed_demo_covers_every_kind() {
        let store = NotificationStore::new();
        assert_eq!(store.seed_demo(), NotificationKind::ALL.len());
        assert_eq!(store.unread_count(), NotificationKind::ALL.len());

        let listed = store.list();
        for kind in NotificationKind::ALL {
            assert!(listed.iter().any(|n| n.kind == kind && !n.message.is_empty()));
        }
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = NotificationStore::new();
        let older = store.push(NotificationKind::Error, "older");
        let mut newer = store.push(NotificationKind::Error, "newer");
        newer.created = older.created + chrono::Duration::seconds(5);
        store.entries.insert(newer.id.clone(), newer);

        let listed = store.list();
        assert_eq!(listed[0].message, "newer");
        assert_eq!(listed[1].message, "older");
    }
}
