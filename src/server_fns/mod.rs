//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Machine, NavTree, Notification, PairingStatus};

/// Shell settings the header needs on first render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellResponse {
    pub brand_name: String,
    pub tree: NavTree,
}

// ============================================================
// Navigation
// ============================================================

/// Brand name and navigation tree from the server configuration
#[server]
pub async fn get_shell() -> Result<ShellResponse, ServerFnError> {
    use crate::config::{CONFIG, NAV_TREE};
    use crate::shared::logging;

    let tree = match &*NAV_TREE {
        Ok(tree) => tree.clone(),
        Err(e) => {
            logging::log_nav_tree_error(e);
            return Err(ServerFnError::new(e));
        }
    };
    logging::log_nav_tree_served(tree.items().len());

    Ok(ShellResponse {
        brand_name: CONFIG.brand_name.clone(),
        tree,
    })
}

// ============================================================
// Notifications
// ============================================================

/// Whether any notification is still unread
#[server]
pub async fn has_unread_notifications() -> Result<bool, ServerFnError> {
    use crate::domain::services::NOTIFICATIONS;
    use crate::shared::logging;

    let unread = NOTIFICATIONS.unread_count();
    logging::log_unread_query(unread);
    Ok(unread > 0)
}

/// All notifications, newest first
#[server]
pub async fn list_notifications() -> Result<Vec<Notification>, ServerFnError> {
    use crate::domain::services::NOTIFICATIONS;

    Ok(NOTIFICATIONS.list())
}

/// Mark a single notification read or unread
#[server]
pub async fn set_notification_read(id: String, read: bool) -> Result<Notification, ServerFnError> {
    use crate::domain::services::NOTIFICATIONS;

    NOTIFICATIONS
        .set_read(&id, read)
        .map_err(ServerFnError::new)
}

/// Mark every notification read; returns how many changed
#[server]
pub async fn mark_all_notifications_read() -> Result<usize, ServerFnError> {
    use crate::domain::services::NOTIFICATIONS;

    Ok(NOTIFICATIONS.mark_all_read())
}

// ============================================================
// Machine pairing
// ============================================================

/// Issue a pairing totem for a new machine
#[server]
pub async fn create_pairing_totem(name: String) -> Result<String, ServerFnError> {
    use crate::domain::services::PAIRINGS;
    use crate::shared::logging::LogOperation;

    crate::log_context!(LogOperation::Pairing, name.as_str())
        .in_scope(|| PAIRINGS.create_totem(&name))
        .map_err(ServerFnError::new)
}

/// Poll the state of a pairing totem
#[server]
pub async fn pairing_status(totem: String) -> Result<PairingStatus, ServerFnError> {
    use crate::domain::services::PAIRINGS;

    PAIRINGS.status(&totem).map_err(ServerFnError::new)
}

/// Machine side of the pairing: present the totem, receive the device identity
#[server]
pub async fn pair_machine(totem: String) -> Result<Machine, ServerFnError> {
    use crate::domain::models::NotificationKind;
    use crate::domain::services::{NOTIFICATIONS, PAIRINGS};
    use crate::shared::errors::AppError;
    use crate::shared::logging::LogOperation;

    let machine = crate::log_context!(LogOperation::Pairing)
        .in_scope(|| PAIRINGS.complete(&totem))
        .map_err(|e| {
            if let AppError::TotemExpired(name) = &e {
                NOTIFICATIONS.push(
                    NotificationKind::Error,
                    format!("Machine '{}' presented an expired pairing totem", name),
                );
            }
            ServerFnError::new(e)
        })?;

    NOTIFICATIONS.push(
        NotificationKind::Security,
        format!("Machine '{}' was paired", machine.name),
    );
    Ok(machine)
}

/// Paired machines ordered by name
#[server]
pub async fn list_machines() -> Result<Vec<Machine>, ServerFnError> {
    use crate::domain::services::PAIRINGS;

    Ok(PAIRINGS.machines())
}

/// Look up a paired machine by device id
#[server]
pub async fn get_machine(device_id: String) -> Result<Machine, ServerFnError> {
    use crate::domain::services::PAIRINGS;

    PAIRINGS
        .machine(&device_id)
        .map_err(ServerFnError::new)
}
