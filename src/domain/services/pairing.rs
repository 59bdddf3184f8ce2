//! Machine pairing registry.
//!
//! The admin asks for a totem for a named machine, the machine presents the
//! totem back through `pair_machine`, and the admin polls until the totem
//! resolves to a paired machine. Pending totems expire lazily.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::config::CONFIG;
use crate::domain::models::{Machine, PairingStatus, validate_machine_name};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

/// Global registry used by the server functions.
pub static PAIRINGS: Lazy<PairingRegistry> =
    Lazy::new(|| PairingRegistry::new(CONFIG.pairing_ttl));

struct PendingPairing {
    name: String,
    created_at: DateTime<Utc>,
    machine: Option<Machine>,
}

pub struct PairingRegistry {
    pending: DashMap<String, PendingPairing>,
    machines: DashMap<String, Machine>,
    /// Lowercased machine name -> totem holding it
    names: DashMap<String, String>,
    ttl: Duration,
}

impl PairingRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            pending: DashMap::new(),
            machines: DashMap::new(),
            names: DashMap::new(),
            ttl,
        }
    }

    /// Issues a pairing totem for a new machine name.
    pub fn create_totem(&self, raw_name: &str) -> Result<String> {
        let name = validate_machine_name(raw_name)?;
        self.prune_expired();

        // Check and reserve under one entry lock
        let totem = match self.names.entry(name.to_lowercase()) {
            Entry::Occupied(_) => return Err(AppError::DuplicateMachine(name)),
            Entry::Vacant(slot) => {
                let totem = compute_totem(&name);
                self.pending.insert(
                    totem.clone(),
                    PendingPairing {
                        name: name.clone(),
                        created_at: Utc::now(),
                        machine: None,
                    },
                );
                slot.insert(totem.clone());
                totem
            }
        };
        logging::log_totem_created(&name);
        Ok(totem)
    }

    /// Current state of a totem as seen by the admin.
    pub fn status(&self, totem: &str) -> Result<PairingStatus> {
        let entry = self.pending.get(totem).ok_or(AppError::UnknownTotem)?;
        if let Some(machine) = &entry.machine {
            return Ok(PairingStatus::Paired(machine.clone()));
        }
        if self.is_expired(entry.created_at) {
            return Ok(PairingStatus::Expired);
        }
        Ok(PairingStatus::Pending)
    }

    /// Called on behalf of the machine presenting its totem.
    pub fn complete(&self, totem: &str) -> Result<Machine> {
        let mut entry = self.pending.get_mut(totem).ok_or(AppError::UnknownTotem)?;
        if let Some(machine) = &entry.machine {
            return Ok(machine.clone());
        }
        if self.is_expired(entry.created_at) {
            logging::log_totem_expired(&entry.name);
            return Err(AppError::TotemExpired(entry.name.clone()));
        }

        let machine = Machine {
            device_id: compute_device_id(totem),
            name: entry.name.clone(),
            paired_at: Utc::now(),
        };
        entry.machine = Some(machine.clone());
        self.machines
            .insert(machine.device_id.clone(), machine.clone());
        logging::log_machine_paired(&machine.name, &machine.device_id);
        Ok(machine)
    }

    pub fn machine(&self, device_id: &str) -> Result<Machine> {
        self.machines
            .get(device_id)
            .map(|m| m.clone())
            .ok_or_else(|| AppError::MachineNotFound(device_id.to_string()))
    }

    /// Paired machines ordered by name.
    pub fn machines(&self) -> Vec<Machine> {
        let mut machines: Vec<Machine> = self.machines.iter().map(|m| m.value().clone()).collect();
        machines.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        machines
    }

    fn is_expired(&self, created_at: DateTime<Utc>) -> bool {
        let age = Utc::now().signed_duration_since(created_at);
        age.to_std().map(|age| age >= self.ttl).unwrap_or(false)
    }

    /// Drops unpaired totems past their TTL and releases their names.
    fn prune_expired(&self) {
        let expired: Vec<(String, String)> = self
            .pending
            .iter()
            .filter(|p| p.machine.is_none() && self.is_expired(p.created_at))
            .map(|p| (p.key().clone(), p.name.to_lowercase()))
            .collect();

        for (totem, name) in expired {
            self.pending
                .remove_if(&totem, |_, p| p.machine.is_none() && self.is_expired(p.created_at));
            self.names.remove_if(&name, |_, holder| *holder == totem);
        }
    }
}

fn compute_totem(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(uuid::Uuid::new_v4().as_bytes());
    hasher.update(name.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

fn compute_device_id(totem: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(totem.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PairingRegistry {
        PairingRegistry::new(Duration::from_secs(600))
    }

    #[test]
    fn test_totem_is_url_safe() {
        let totem = registry().create_totem("Lobby").unwrap();
        assert_eq!(totem.len(), 43);
        assert!(totem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_pairing_lifecycle() {
        let registry = registry();
        let totem = registry.create_totem("Lobby ATM").unwrap();
        assert_eq!(registry.status(&totem).unwrap(), PairingStatus::Pending);

        let machine = registry.complete(&totem).unwrap();
        assert_eq!(machine.name, "Lobby ATM");
        assert_eq!(machine.device_id.len(), 64);

        assert_eq!(
            registry.status(&totem).unwrap(),
            PairingStatus::Paired(machine.clone())
        );
        assert_eq!(registry.machine(&machine.device_id).unwrap(), machine);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let registry = registry();
        let totem = registry.create_totem("Kiosk").unwrap();
        let first = registry.complete(&totem).unwrap();
        let second = registry.complete(&totem).unwrap();
        assert_eq!(first, second);
        assert_eq!(registry.machines().len(), 1);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let registry = registry();
        registry.create_totem("Kiosk").unwrap();
        assert!(matches!(
            registry.create_totem("kiosk"),
            Err(AppError::DuplicateMachine(_))
        ));

        let other = registry.create_totem("Mall").unwrap();
        registry.complete(&other).unwrap();
        assert!(matches!(
            registry.create_totem("MALL"),
            Err(AppError::DuplicateMachine(_))
        ));
    }

    #[test]
    fn test_concurrent_requests_for_one_name() {
        let registry = registry();
        let issued = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.create_totem("Kiosk")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|r| r.is_ok())
                .count()
        });
        assert_eq!(issued, 1);
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert!(matches!(
            registry().create_totem(""),
            Err(AppError::InvalidMachineName(_))
        ));
    }

    #[test]
    fn test_unknown_totem() {
        let registry = registry();
        assert!(matches!(registry.status("nope"), Err(AppError::UnknownTotem)));
        assert!(matches!(registry.complete("nope"), Err(AppError::UnknownTotem)));
    }

    #[test]
    fn test_expired_totem() {
        let registry = PairingRegistry::new(Duration::ZERO);
        let totem = registry.create_totem("Late").unwrap();
        assert_eq!(registry.status(&totem).unwrap(), PairingStatus::Expired);
        assert!(matches!(
            registry.complete(&totem),
            Err(AppError::TotemExpired(_))
        ));
    }

    #[test]
    fn test_expired_totem_frees_name() {
        let registry = PairingRegistry::new(Duration::ZERO);
        registry.create_totem("Reused").unwrap();
        assert!(registry.create_totem("Reused").is_ok());
    }

    #[test]
    fn test_machines_sorted_by_name() {
        let registry = registry();
        for name in ["zeta", "Alpha", "mid"] {
            let totem = registry.create_totem(name).unwrap();
            registry.complete(&totem).unwrap();
        }
        let names: Vec<String> = registry.machines().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_unknown_machine() {
        assert!(matches!(
            registry().machine("abc"),
            Err(AppError::MachineNotFound(_))
        ));
    }
}
