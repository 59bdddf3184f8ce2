//! UI context state shared between the page shell and the header.

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    BODY_NOTIFCENTER_OPEN, DASHBOARD_ROUTE, MACHINE_STATUS_ROUTE, ROOT_NOTIFCENTER_OPEN,
};

/// Page-level chrome flags owned by the shell and driven by the header.
///
/// Both scroll-suppression marker classes derive from the single
/// `notification_center_open` flag, so they are always set and cleared
/// together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageChrome {
    notification_center_open: bool,
}

impl PageChrome {
    pub fn notification_center_open(&self) -> bool {
        self.notification_center_open
    }

    pub fn open_notification_center(&mut self) {
        self.notification_center_open = true;
    }

    pub fn close_notification_center(&mut self) {
        self.notification_center_open = false;
    }

    /// Flips the popover and returns the new state.
    pub fn toggle_notification_center(&mut self) -> bool {
        self.notification_center_open = !self.notification_center_open;
        self.notification_center_open
    }

    /// Marker class for the application root, if any.
    pub fn root_class(&self) -> &'static str {
        if self.notification_center_open { ROOT_NOTIFCENTER_OPEN } else { "" }
    }

    /// Marker class for the page body, if any.
    pub fn body_class(&self) -> &'static str {
        if self.notification_center_open { BODY_NOTIFCENTER_OPEN } else { "" }
    }
}

/// State payload attached to a programmatic navigation.
///
/// The payload belongs to the push that set it: `target` records where that
/// push went, and pages only see the payload while they are that target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteState {
    /// Route the payload was pushed with.
    pub target: String,
    /// Sub-route the user came from within the same section.
    pub prev: Option<String>,
    /// Device id of a freshly paired machine.
    pub machine_id: Option<String>,
}

impl RouteState {
    /// Brand link: go to the dashboard with nothing attached.
    pub fn brand() -> Self {
        Self {
            target: DASHBOARD_ROUTE.to_string(),
            ..Self::default()
        }
    }

    /// Sub-navigation link to `target`, remembering the sibling left behind.
    pub fn came_from(target: impl Into<String>, prev: Option<String>) -> Self {
        Self {
            target: target.into(),
            prev,
            machine_id: None,
        }
    }

    /// Machine status page highlighting a freshly paired device.
    pub fn paired(device_id: impl Into<String>) -> Self {
        Self {
            target: MACHINE_STATUS_ROUTE.to_string(),
            prev: None,
            machine_id: Some(device_id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.machine_id.is_none()
    }

    /// The payload as seen from `path`; `None` once the user has moved on.
    pub fn for_path(&self, path: &str) -> Option<&Self> {
        (!self.target.is_empty() && same_path(&self.target, path)).then_some(self)
    }
}

fn same_path(a: &str, b: &str) -> bool {
    fn clean(p: &str) -> &str {
        let p = p.split(['?', '#']).next().unwrap_or(p);
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
    clean(a) == clean(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_chrome_has_no_marker_classes() {
        let chrome = PageChrome::default();
        assert_eq!(chrome.root_class(), "");
        assert_eq!(chrome.body_class(), "");
    }

    #[test]
    fn test_open_sets_both_classes_and_close_clears_both() {
        let mut chrome = PageChrome::default();
        chrome.open_notification_center();
        assert_eq!(chrome.root_class(), ROOT_NOTIFCENTER_OPEN);
        assert_eq!(chrome.body_class(), BODY_NOTIFCENTER_OPEN);

        chrome.close_notification_center();
        assert_eq!(chrome.root_class(), "");
        assert_eq!(chrome.body_class(), "");
    }

    #[test]
    fn test_toggle_keeps_classes_paired() {
        let mut chrome = PageChrome::default();
        for _ in 0..4 {
            let open = chrome.toggle_notification_center();
            assert_eq!(open, !chrome.root_class().is_empty());
            assert_eq!(open, !chrome.body_class().is_empty());
        }
        assert!(!chrome.notification_center_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut chrome = PageChrome::default();
        chrome.close_notification_center();
        chrome.close_notification_center();
        assert_eq!(chrome, PageChrome::default());
    }

    #[test]
    fn test_route_state_constructors() {
        assert!(RouteState::default().is_empty());
        let from = RouteState::came_from("/settings/wallets", Some("/settings/locale".into()));
        assert_eq!(from.target, "/settings/wallets");
        assert_eq!(from.prev.as_deref(), Some("/settings/locale"));
        assert!(from.machine_id.is_none());
    }

    #[test]
    fn test_brand_targets_dashboard_and_clears_payload() {
        let state = RouteState::brand();
        assert_eq!(state.target, DASHBOARD_ROUTE);
        assert!(state.is_empty());
        assert_eq!(state.for_path("/dashboard"), Some(&state));
    }

    #[test]
    fn test_paired_targets_machine_status_with_device_id() {
        let state = RouteState::paired("abc123");
        assert_eq!(state.target, MACHINE_STATUS_ROUTE);
        let seen = state.for_path(MACHINE_STATUS_ROUTE).unwrap();
        assert_eq!(seen.machine_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_payload_ignored_on_other_paths() {
        let state = RouteState::came_from("/settings/wallets", Some("/settings/locale".into()));
        assert!(state.for_path("/settings/wallets").is_some());
        assert!(state.for_path("/settings/wallets/").is_some());
        assert!(state.for_path("/transactions").is_none());
        assert!(state.for_path("/settings").is_none());

        let paired = RouteState::paired("abc123");
        assert!(paired.for_path("/dashboard").is_none());
    }

    #[test]
    fn test_default_state_applies_nowhere() {
        assert!(RouteState::default().for_path("/").is_none());
        assert!(RouteState::default().for_path("").is_none());
    }
}
