use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    HighValueTransaction,
    FiatBalance,
    CryptoBalance,
    Compliance,
    Error,
    Security,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 6] = [
        NotificationKind::HighValueTransaction,
        NotificationKind::FiatBalance,
        NotificationKind::CryptoBalance,
        NotificationKind::Compliance,
        NotificationKind::Error,
        NotificationKind::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::HighValueTransaction => "highValueTransaction",
            NotificationKind::FiatBalance => "fiatBalance",
            NotificationKind::CryptoBalance => "cryptoBalance",
            NotificationKind::Compliance => "compliance",
            NotificationKind::Error => "error",
            NotificationKind::Security => "security",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::HighValueTransaction => "💸",
            NotificationKind::FiatBalance => "🏧",
            NotificationKind::CryptoBalance => "🪙",
            NotificationKind::Compliance => "📋",
            NotificationKind::Error => "⚠️",
            NotificationKind::Security => "🔒",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub created: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            created: Utc::now(),
            read: false,
        }
    }

    /// Short relative age shown next to the message
    pub fn age_label(&self, now: &DateTime<Utc>) -> String {
        let diff = *now - self.created;
        if diff.num_minutes() < 1 {
            "just now".to_string()
        } else if diff.num_minutes() < 60 {
            format!("{}m ago", diff.num_minutes())
        } else if diff.num_hours() < 24 {
            format!("{}h ago", diff.num_hours())
        } else if diff.num_days() < 7 {
            format!("{}d ago", diff.num_days())
        } else {
            self.created.format("%Y-%m-%d").to_string()
        }
    }
}

/// Entries shown by the notification center, newest first.
pub fn visible_notifications(all: &[Notification], show_read: bool) -> Vec<Notification> {
    let mut visible: Vec<Notification> = all
        .iter()
        .filter(|n| show_read || !n.read)
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.created.cmp(&a.created));
    visible
}

/// Unread indicator state: absent while loading or on failure.
pub fn unread_or_default<E>(result: Option<&Result<bool, E>>) -> bool {
    matches!(result, Some(Ok(true)))
}
