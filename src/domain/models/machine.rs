use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::constants::MACHINE_NAME_MAX_LEN;
use crate::shared::errors::{AppError, Result};

static MACHINE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ._\-]*$").expect("machine name pattern is valid")
});

/// A paired machine as shown on the machine status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub device_id: String,
    pub name: String,
    pub paired_at: DateTime<Utc>,
}

/// Result of polling a pairing totem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "machine", rename_all = "camelCase")]
pub enum PairingStatus {
    Pending,
    Paired(Machine),
    Expired,
}

/// Trims and checks a machine name typed by the operator.
pub fn validate_machine_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::InvalidMachineName("name is required".into()));
    }
    if name.chars().count() > MACHINE_NAME_MAX_LEN {
        return Err(AppError::InvalidMachineName(format!(
            "name must be at most {} characters",
            MACHINE_NAME_MAX_LEN
        )));
    }
    if !MACHINE_NAME_PATTERN.is_match(name) {
        return Err(AppError::InvalidMachineName(format!(
            "'{}' may only contain letters, digits, spaces, '.', '_' and '-'",
            name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_machine_name_trims() {
        assert_eq!(validate_machine_name("  Lobby ATM  ").unwrap(), "Lobby ATM");
    }

    #[test]
    fn test_validate_machine_name_rejects_empty() {
        assert!(matches!(
            validate_machine_name("   "),
            Err(AppError::InvalidMachineName(_))
        ));
    }

    #[test]
    fn test_validate_machine_name_rejects_long_names() {
        let long = "a".repeat(MACHINE_NAME_MAX_LEN + 1);
        assert!(validate_machine_name(&long).is_err());
        assert!(validate_machine_name(&"a".repeat(MACHINE_NAME_MAX_LEN)).is_ok());
    }

    #[test]
    fn test_validate_machine_name_rejects_symbols() {
        assert!(validate_machine_name("atm<script>").is_err());
        assert!(validate_machine_name("-leading-dash").is_err());
        assert!(validate_machine_name("store_2.front-door").is_ok());
    }

    #[test]
    fn test_pairing_status_wire_format() {
        let json = serde_json::to_value(PairingStatus::Pending).unwrap();
        assert_eq!(json["status"], "pending");
    }
}
