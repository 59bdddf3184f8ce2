use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::domain::models::{Notification, visible_notifications};
use crate::server_fns::{list_notifications, mark_all_notifications_read, set_notification_read};

type NotificationsResource = Resource<Result<Vec<Notification>, ServerFnError>>;

fn refresh(mut notifications: NotificationsResource, notify_unread: EventHandler<()>) {
    notifications.restart();
    notify_unread.call(());
}

/// Popover panel listing notifications.
///
/// Every change is followed by `notify_unread` so the header can refetch its
/// unread indicator.
#[component]
pub fn NotificationCenter(close: EventHandler<()>, notify_unread: EventHandler<()>) -> Element {
    let mut show_read = use_signal(|| false);
    let notifications: NotificationsResource =
        use_resource(move || async move { list_notifications().await });

    let toggle_read = move |(id, read): (String, bool)| {
        spawn(async move {
            match set_notification_read(id, read).await {
                Ok(_) => refresh(notifications, notify_unread),
                Err(e) => tracing::warn!("Failed to update notification: {}", e),
            }
        });
    };

    let mark_all_read = move |_| {
        spawn(async move {
            match mark_all_notifications_read().await {
                Ok(changed) => {
                    tracing::debug!("Marked {} notifications read", changed);
                    refresh(notifications, notify_unread);
                }
                Err(e) => tracing::warn!("Failed to mark notifications read: {}", e),
            }
        });
    };

    let now = chrono::Utc::now();
    let body = match &*notifications.read() {
        Some(Ok(all)) => {
            let visible = visible_notifications(all, show_read());
            if visible.is_empty() {
                rsx! {
                    EmptyState { icon: "🔔".to_string(), message: "No new notifications".to_string() }
                }
            } else {
                rsx! {
                    ul { class: "c-notification-center__list",
                        for notification in visible {
                            NotificationRow {
                                key: "{notification.id}",
                                age: notification.age_label(&now),
                                notification: notification.clone(),
                                on_toggle: toggle_read,
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            ErrorMessage { message: format!("Could not load notifications: {}", e) }
        },
        None => rsx! {
            LoadingText { message: "Loading notifications...".to_string() }
        },
    };

    rsx! {
        section { class: "c-notification-center",
            div { class: "c-notification-center__header",
                h4 { class: "c-notification-center__title", "Notifications" }
                button {
                    class: "c-notification-center__close",
                    aria_label: "Close notifications",
                    onclick: move |_| close.call(()),
                    "✕"
                }
            }
            div { class: "c-notification-center__actions",
                label { class: "c-notification-center__toggle",
                    input {
                        r#type: "checkbox",
                        checked: show_read(),
                        onchange: move |evt| show_read.set(evt.checked()),
                    }
                    "Show read"
                }
                button {
                    class: "c-notification-center__mark-all",
                    onclick: mark_all_read,
                    "Mark all as read"
                }
            }
            {body}
        }
    }
}

#[component]
fn NotificationRow(
    notification: Notification,
    age: String,
    on_toggle: EventHandler<(String, bool)>,
) -> Element {
    let row_class = if notification.read {
        "c-notification c-notification--read"
    } else {
        "c-notification"
    };
    let toggle_label = if notification.read { "Mark unread" } else { "Mark read" };
    let id = notification.id.clone();
    let read = notification.read;

    rsx! {
        li { class: "{row_class}",
            span { class: "c-notification__icon", "{notification.kind.icon()}" }
            div { class: "c-notification__body",
                p { class: "c-notification__message", "{notification.message}" }
                span { class: "c-notification__age", "{age}" }
            }
            button {
                class: "c-notification__toggle",
                title: "{toggle_label}",
                onclick: move |_| on_toggle.call((id.clone(), !read)),
                if read { "○" } else { "●" }
            }
        }
    }
}
