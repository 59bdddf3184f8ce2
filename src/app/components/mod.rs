pub mod action_button;
pub mod add_machine;
pub mod common;
pub mod notification_center;

pub use action_button::{ActionButton, ButtonVariant};
pub use add_machine::AddMachine;
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use notification_center::NotificationCenter;
