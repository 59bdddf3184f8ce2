//! Navigation tree rendered by the header.
//!
//! The active item is always derived from the current location. Nothing here
//! is mutated while rendering.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

/// Second-level entry shown in the sub-navigation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    pub label: String,
    pub route: String,
}

impl NavChild {
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        route_matches(&self.route, path)
    }
}

/// Top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChild>,
}

impl NavItem {
    pub fn leaf(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            route: Some(route.into()),
            children: Vec::new(),
        }
    }

    pub fn section(label: impl Into<String>, route: Option<&str>, children: Vec<NavChild>) -> Self {
        Self {
            label: label.into(),
            route: route.map(str::to_string),
            children,
        }
    }

    /// Where the top-level link points: its own route, else its first child's.
    pub fn link_target(&self) -> Option<&str> {
        self.route
            .as_deref()
            .or_else(|| self.children.first().map(|c| c.route.as_str()))
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// An item matches when its link target or any of its children does.
    pub fn matches(&self, path: &str) -> bool {
        self.link_target().is_some_and(|target| route_matches(target, path))
            || self.children.iter().any(|c| c.matches(path))
    }

    /// Child whose route matches `path`. The longest route wins so that
    /// nested child routes resolve to the most specific entry.
    pub fn active_child(&self, path: &str) -> Option<&NavChild> {
        self.children
            .iter()
            .filter(|c| c.matches(path))
            .max_by_key(|c| normalize(&c.route).len())
    }
}

/// Ordered, validated navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTree {
    items: Vec<NavItem>,
}

impl NavTree {
    pub fn new(items: Vec<NavItem>) -> Result<Self> {
        let tree = Self { items };
        tree.validate()?;
        Ok(tree)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let tree: NavTree = serde_json::from_str(raw)?;
        tree.validate()?;
        Ok(tree)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item, in tree order, matching the current location.
    pub fn active_item(&self, path: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.matches(path))
    }

    /// Children to render in the sub-navigation row, if any.
    pub fn subnav_for(&self, path: &str) -> Option<&NavItem> {
        self.active_item(path).filter(|item| item.has_children())
    }

    fn validate(&self) -> Result<()> {
        for item in &self.items {
            if item.label.trim().is_empty() {
                return Err(AppError::InvalidNavigation("item with empty label".into()));
            }
            if item.link_target().is_none() {
                return Err(AppError::InvalidNavigation(format!(
                    "'{}' has neither a route nor children",
                    item.label
                )));
            }
            let routes = item
                .route
                .iter()
                .map(String::as_str)
                .chain(item.children.iter().map(|c| c.route.as_str()));
            for route in routes {
                if !route.starts_with('/') {
                    return Err(AppError::InvalidNavigation(format!(
                        "route '{}' under '{}' must be absolute",
                        route, item.label
                    )));
                }
            }
            if let Some(child) = item.children.iter().find(|c| c.label.trim().is_empty()) {
                return Err(AppError::InvalidNavigation(format!(
                    "child '{}' of '{}' has an empty label",
                    child.route, item.label
                )));
            }
        }
        Ok(())
    }
}

/// Route recorded as "came from" when a sub-navigation link is followed: the
/// child matching the current location, else the last child that matched.
pub fn previous_subroute(item: &NavItem, path: &str, last_matched: Option<&str>) -> Option<String> {
    item.active_child(path)
        .map(|c| c.route.clone())
        .or_else(|| last_matched.map(str::to_string))
}

fn normalize(route: &str) -> &str {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Prefix match on whole path segments: `/settings` matches `/settings` and
/// `/settings/locales` but not `/settings-old`. The root route only matches
/// itself.
pub fn route_matches(route: &str, path: &str) -> bool {
    let route = normalize(route);
    let path = normalize(path.split(['?', '#']).next().unwrap_or(path));

    if route == "/" {
        return path == "/";
    }

    match path.strip_prefix(route) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Built-in tree used when no tree file is configured.
pub fn default_tree() -> NavTree {
    NavTree {
        items: vec![
            NavItem::leaf("Dashboard", "/dashboard"),
            NavItem::section(
                "Maintenance",
                Some("/maintenance"),
                vec![
                    NavChild::new("Cash cassettes", "/maintenance/cash-cassettes"),
                    NavChild::new("Funding", "/maintenance/funding"),
                    NavChild::new("Machine logs", "/maintenance/logs"),
                    NavChild::new("Machine status", "/maintenance/machine-status"),
                    NavChild::new("Server", "/maintenance/server-logs"),
                ],
            ),
            NavItem::leaf("Transactions", "/transactions"),
            NavItem::section(
                "Compliance",
                None,
                vec![
                    NavChild::new("Triggers", "/compliance/triggers"),
                    NavChild::new("Customers", "/compliance/customers"),
                    NavChild::new("Blacklist", "/compliance/blacklist"),
                    NavChild::new("Promo codes", "/compliance/loyalty"),
                ],
            ),
            NavItem::section(
                "Settings",
                Some("/settings"),
                vec![
                    NavChild::new("Commissions", "/settings/commissions"),
                    NavChild::new("Locales", "/settings/locale"),
                    NavChild::new("Cash-out", "/settings/cash-out"),
                    NavChild::new("Notifications", "/settings/notifications"),
                    NavChild::new("Wallets", "/settings/wallets"),
                    NavChild::new("Operator info", "/settings/operator-info"),
                ],
            ),
            NavItem::leaf("Accounting", "/accounting"),
        ],
    }
}
