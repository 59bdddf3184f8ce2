//! Structured logging module for the admin console
//!
//! Provides consistent, contextual logging across the server side.
//! Uses tracing spans for operation tracking and structured fields.

use std::path::Path;

/// Log operations for the different server concerns
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Config,
    Navigation,
    NotificationQuery,
    NotificationUpdate,
    Pairing,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Config => "config",
            LogOperation::Navigation => "navigation",
            LogOperation::NotificationQuery => "notification_query",
            LogOperation::NotificationUpdate => "notification_update",
            LogOperation::Pairing => "pairing",
        }
    }
}

/// Log the configuration the server started with
pub fn log_config_loaded(brand: &str, nav_tree: Option<&Path>, pairing_ttl_secs: u64) {
    let nav_tree = nav_tree
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        brand = brand,
        nav_tree = %nav_tree,
        pairing_ttl_secs = pairing_ttl_secs,
        "Configuration loaded"
    );
}

/// Log a malformed environment at startup
pub fn log_config_error(error: &str) {
    tracing::error!(
        operation = LogOperation::Config.as_str(),
        error = error,
        "Invalid configuration"
    );
}

/// Log the navigation tree served to the client
pub fn log_nav_tree_served(item_count: usize) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        item_count = item_count,
        "Navigation tree served"
    );
}

/// Log a navigation tree that could not be loaded
pub fn log_nav_tree_error(error: &str) {
    tracing::error!(
        operation = LogOperation::Navigation.as_str(),
        error = error,
        "Failed to load navigation tree"
    );
}

/// Log an unread status query
pub fn log_unread_query(unread_count: usize) {
    tracing::debug!(
        operation = LogOperation::NotificationQuery.as_str(),
        unread_count = unread_count,
        "Unread notifications queried"
    );
}

/// Log a new notification
pub fn log_notification_created(id: &str, kind: &str) {
    tracing::info!(
        operation = LogOperation::NotificationUpdate.as_str(),
        notification_id = id,
        kind = kind,
        "Notification created"
    );
}

/// Log a read/unread toggle
pub fn log_notification_read(id: &str, read: bool) {
    tracing::debug!(
        operation = LogOperation::NotificationUpdate.as_str(),
        notification_id = id,
        read = read,
        "Notification read state changed"
    );
}

/// Log demo notifications added at startup
pub fn log_notifications_seeded(count: usize) {
    tracing::info!(
        operation = LogOperation::NotificationUpdate.as_str(),
        count = count,
        "Demo notifications seeded"
    );
}

/// Log mark-all-read
pub fn log_notifications_cleared(changed: usize) {
    tracing::info!(
        operation = LogOperation::NotificationUpdate.as_str(),
        changed = changed,
        "All notifications marked read"
    );
}

/// Log a pairing totem being issued
pub fn log_totem_created(machine_name: &str) {
    tracing::info!(
        operation = LogOperation::Pairing.as_str(),
        machine_name = machine_name,
        "Pairing totem issued"
    );
}

/// Log a machine completing pairing
pub fn log_machine_paired(machine_name: &str, device_id: &str) {
    tracing::info!(
        operation = LogOperation::Pairing.as_str(),
        machine_name = machine_name,
        device_id = device_id,
        "Machine paired"
    );
}

/// Log a machine presenting an expired totem
pub fn log_totem_expired(machine_name: &str) {
    tracing::warn!(
        operation = LogOperation::Pairing.as_str(),
        machine_name = machine_name,
        "Pairing attempted with expired totem"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($operation:expr) => {
        tracing::info_span!(
            "admin_console",
            operation = $operation.as_str()
        )
    };
    ($operation:expr, $subject:expr) => {
        tracing::info_span!(
            "admin_console",
            operation = $operation.as_str(),
            subject = $subject
        )
    };
}
