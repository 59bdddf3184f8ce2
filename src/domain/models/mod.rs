// Domain models (admin console entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod notification;
pub mod machine;

pub use navigation::{NavChild, NavItem, NavTree, default_tree, previous_subroute, route_matches};
pub use notification::{Notification, NotificationKind, unread_or_default, visible_notifications};
pub use machine::{Machine, PairingStatus, validate_machine_name};
