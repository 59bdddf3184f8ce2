use dioxus::prelude::*;

use crate::domain::models::unread_or_default;
use crate::server_fns::has_unread_notifications;

/// Unread indicator state backed by a refetchable query
#[derive(Clone, Copy)]
pub struct UnreadNotifications {
    resource: Resource<Result<bool, ServerFnError>>,
}

impl UnreadNotifications {
    /// False while loading and when the query failed
    pub fn has_unread(&self) -> bool {
        let guard = self.resource.read();
        let value: &Option<Result<bool, ServerFnError>> = &guard;
        unread_or_default(value.as_ref())
    }

    /// Re-run the query, e.g. after the notification center changed something
    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

/// Hook to query unread notification status
pub fn use_unread_notifications() -> UnreadNotifications {
    let resource = use_resource(move || async move {
        let result = has_unread_notifications().await;
        if let Err(e) = &result {
            tracing::warn!("Unread notification query failed: {}", e);
        }
        result
    });

    UnreadNotifications { resource }
}
