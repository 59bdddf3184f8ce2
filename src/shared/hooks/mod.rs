// Custom Dioxus hooks
pub mod use_unread_notifications;
pub mod use_page_chrome;
pub mod use_pairing;

pub use use_unread_notifications::{use_unread_notifications, UnreadNotifications};
pub use use_page_chrome::{use_page_chrome, use_route_state, provide_shell_context};
pub use use_pairing::{use_pairing, PairingState, PairingStep};
