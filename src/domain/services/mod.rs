// Business logic services
// Framework-agnostic, 100% testable

// In-memory stores backing the server functions (server-only)
#[cfg(not(target_arch = "wasm32"))]
pub mod notification_store;
#[cfg(not(target_arch = "wasm32"))]
pub mod pairing;

#[cfg(not(target_arch = "wasm32"))]
pub use notification_store::{NotificationStore, NOTIFICATIONS};
#[cfg(not(target_arch = "wasm32"))]
pub use pairing::{PairingRegistry, PAIRINGS};
