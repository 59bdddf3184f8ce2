//! Runtime configuration read from the environment.
//!
//! | Variable                   | Default          |
//! |----------------------------|------------------|
//! | `ADMIN_BRAND_NAME`         | `Lamassu Admin`  |
//! | `ADMIN_NAV_TREE`           | built-in tree    |
//! | `ADMIN_PAIRING_TTL_SECS`   | `600`            |
//! | `ADMIN_DEMO_NOTIFICATIONS` | `false`          |

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use once_cell::sync::Lazy;

use crate::domain::models::{NavTree, default_tree};
use crate::shared::constants::{DEFAULT_BRAND_NAME, DEFAULT_PAIRING_TTL_SECS};

/// Configuration loaded once per process. The server validates the
/// environment with `AppConfig::from_env` before anything reads this, so the
/// per-variable fallback only applies to non-server entry points.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::from_lookup_lenient(|key| std::env::var(key).ok())
});

/// Navigation tree validated once and served for the life of the process.
pub static NAV_TREE: Lazy<Result<NavTree, String>> =
    Lazy::new(|| CONFIG.load_nav_tree().map_err(|e| format!("{:#}", e)));

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub brand_name: String,
    pub nav_tree_path: Option<PathBuf>,
    pub pairing_ttl: Duration,
    pub demo_notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            nav_tree_path: None,
            pairing_ttl: Duration::from_secs(DEFAULT_PAIRING_TTL_SECS),
            demo_notifications: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment. The first malformed variable is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            brand_name: brand_name(&lookup)?.unwrap_or(defaults.brand_name),
            nav_tree_path: nav_tree_path(&lookup),
            pairing_ttl: pairing_ttl(&lookup)?.unwrap_or(defaults.pairing_ttl),
            demo_notifications: demo_notifications(&lookup)?.unwrap_or(defaults.demo_notifications),
        })
    }

    /// Like `from_lookup`, but a malformed variable only resets its own field.
    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            brand_name: or_default(brand_name(&lookup), defaults.brand_name),
            nav_tree_path: nav_tree_path(&lookup),
            pairing_ttl: or_default(pairing_ttl(&lookup), defaults.pairing_ttl),
            demo_notifications: or_default(demo_notifications(&lookup), defaults.demo_notifications),
        }
    }

    /// The configured tree file, or the built-in tree.
    pub fn load_nav_tree(&self) -> anyhow::Result<NavTree> {
        match &self.nav_tree_path {
            Some(path) => load_nav_tree_file(path),
            None => Ok(default_tree()),
        }
    }
}

fn brand_name(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Option<String>> {
    match lookup("ADMIN_BRAND_NAME") {
        Some(brand) if brand.trim().is_empty() => bail!("ADMIN_BRAND_NAME must not be empty"),
        Some(brand) => Ok(Some(brand.trim().to_string())),
        None => Ok(None),
    }
}

fn nav_tree_path(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    lookup("ADMIN_NAV_TREE")
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

fn pairing_ttl(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Option<Duration>> {
    let Some(ttl) = lookup("ADMIN_PAIRING_TTL_SECS") else {
        return Ok(None);
    };
    let secs: u64 = ttl
        .trim()
        .parse()
        .with_context(|| format!("ADMIN_PAIRING_TTL_SECS is not a number: {}", ttl))?;
    Ok(Some(Duration::from_secs(secs)))
}

fn demo_notifications(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Option<bool>> {
    match lookup("ADMIN_DEMO_NOTIFICATIONS").as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("1" | "true" | "yes") => Ok(Some(true)),
        Some("0" | "false" | "no") => Ok(Some(false)),
        Some(other) => bail!("ADMIN_DEMO_NOTIFICATIONS must be true or false: {}", other),
    }
}

fn or_default<T>(value: anyhow::Result<Option<T>>, default: T) -> T {
    match value {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!("Ignoring invalid configuration value: {:#}", e);
            default
        }
    }
}

pub fn load_nav_tree_file(path: &Path) -> anyhow::Result<NavTree> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation tree {}", path.display()))?;
    let tree = NavTree::from_json(&raw)
        .with_context(|| format!("Failed to parse navigation tree {}", path.display()))?;
    if tree.is_empty() {
        bail!("Navigation tree {} has no items", path.display());
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_nav_tree().unwrap(), default_tree());
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_BRAND_NAME", " Operator Console "),
            ("ADMIN_NAV_TREE", "/etc/admin/tree.json"),
            ("ADMIN_PAIRING_TTL_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.brand_name, "Operator Console");
        assert_eq!(config.nav_tree_path, Some(PathBuf::from("/etc/admin/tree.json")));
        assert_eq!(config.pairing_ttl, Duration::from_secs(30));
    }

    #[test]
    fn test_rejects_bad_ttl() {
        let err = AppConfig::from_lookup(lookup(&[("ADMIN_PAIRING_TTL_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("ADMIN_PAIRING_TTL_SECS"));
    }

    #[test]
    fn test_bad_ttl_keeps_other_settings_when_lenient() {
        let config = AppConfig::from_lookup_lenient(lookup(&[
            ("ADMIN_BRAND_NAME", "Operator Console"),
            ("ADMIN_NAV_TREE", "/etc/admin/custom-tree.json"),
            ("ADMIN_PAIRING_TTL_SECS", "10m"),
        ]));
        assert_eq!(config.brand_name, "Operator Console");
        assert_eq!(
            config.nav_tree_path,
            Some(PathBuf::from("/etc/admin/custom-tree.json"))
        );
        assert_eq!(config.pairing_ttl, Duration::from_secs(DEFAULT_PAIRING_TTL_SECS));
    }

    #[test]
    fn test_demo_notifications_flag() {
        let on = AppConfig::from_lookup(lookup(&[("ADMIN_DEMO_NOTIFICATIONS", "true")])).unwrap();
        assert!(on.demo_notifications);
        let off = AppConfig::from_lookup(lookup(&[("ADMIN_DEMO_NOTIFICATIONS", "0")])).unwrap();
        assert!(!off.demo_notifications);
        assert!(AppConfig::from_lookup(lookup(&[("ADMIN_DEMO_NOTIFICATIONS", "maybe")])).is_err());
    }

    #[test]
    fn test_loaded_tree_survives_file_edits() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"label": "Home", "route": "/home"}}]"#).unwrap();
        let config = AppConfig {
            nav_tree_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let loaded = config.load_nav_tree().unwrap();

        std::fs::write(file.path(), "not json").unwrap();
        assert!(config.load_nav_tree().is_err());
        assert_eq!(loaded.items()[0].label, "Home");
    }

    #[test]
    fn test_rejects_blank_brand() {
        assert!(AppConfig::from_lookup(lookup(&[("ADMIN_BRAND_NAME", "  ")])).is_err());
    }

    #[test]
    fn test_loads_tree_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"label": "Home", "route": "/home"}}, {{"label": "Ops", "children": [{{"label": "Logs", "route": "/ops/logs"}}]}}]"#
        )
        .unwrap();

        let config = AppConfig {
            nav_tree_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let tree = config.load_nav_tree().unwrap();
        assert_eq!(tree.items().len(), 2);
        assert_eq!(tree.active_item("/ops/logs").unwrap().label, "Ops");
    }

    #[test]
    fn test_empty_tree_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(load_nav_tree_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_tree_file_mentions_path() {
        let err = load_nav_tree_file(Path::new("/definitely/missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/missing.json"));
    }
}
