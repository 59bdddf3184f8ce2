use dioxus::prelude::*;

use crate::domain::models::{Machine, PairingStatus, validate_machine_name};
use crate::server_fns::create_pairing_totem;

/// Where the pairing dialog currently is
#[derive(Clone, Debug, PartialEq)]
pub enum PairingStep {
    EnterName,
    AwaitingMachine { name: String, totem: String },
    Expired { name: String },
    Paired(Machine),
}

impl PairingStep {
    /// Totem being polled, if any
    pub fn totem(&self) -> Option<&str> {
        match self {
            PairingStep::AwaitingMachine { totem, .. } => Some(totem),
            _ => None,
        }
    }

    /// Next step after a status poll. Only an awaiting step moves.
    pub fn after_status(&self, status: PairingStatus) -> PairingStep {
        match (self, status) {
            (PairingStep::AwaitingMachine { .. }, PairingStatus::Paired(machine)) => {
                PairingStep::Paired(machine)
            }
            (PairingStep::AwaitingMachine { name, .. }, PairingStatus::Expired) => {
                PairingStep::Expired { name: name.clone() }
            }
            (step, _) => step.clone(),
        }
    }
}

/// Pairing dialog state
#[derive(Clone, Copy)]
pub struct PairingState {
    pub step: Signal<PairingStep>,
    pub error: Signal<Option<String>>,
    pub submitting: Signal<bool>,
}

impl PairingState {
    /// Validate the name locally, then ask the server for a totem
    pub fn submit(&mut self, raw_name: String) {
        let name = match validate_machine_name(&raw_name) {
            Ok(name) => name,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let mut state = *self;
        state.error.set(None);
        state.submitting.set(true);
        spawn(async move {
            match create_pairing_totem(name.clone()).await {
                Ok(totem) => {
                    tracing::info!("Pairing totem issued for machine '{}'", name);
                    state.step.set(PairingStep::AwaitingMachine { name, totem });
                }
                Err(e) => {
                    tracing::warn!("Failed to create pairing totem: {}", e);
                    state.error.set(Some(e.to_string()));
                }
            }
            state.submitting.set(false);
        });
    }

    /// Back to the name form
    pub fn reset(&mut self) {
        self.step.set(PairingStep::EnterName);
        self.error.set(None);
        self.submitting.set(false);
    }
}

/// Hook driving the pairing dialog; polls the totem while a machine is awaited
/// and calls `on_paired` once it resolves
pub fn use_pairing(on_paired: EventHandler<Machine>) -> PairingState {
    let step = use_signal(|| PairingStep::EnterName);
    let error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    // Polling only runs in the browser
    #[cfg(target_arch = "wasm32")]
    {
        use crate::server_fns::pairing_status;
        use crate::shared::constants::PAIRING_POLL_INTERVAL_MS;

        let mut step = step;
        let mut error = error;
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(PAIRING_POLL_INTERVAL_MS).await;

                let Some(totem) = step.peek().totem().map(str::to_string) else {
                    continue;
                };
                match pairing_status(totem).await {
                    Ok(status) => {
                        let next = step.peek().after_status(status);
                        if let PairingStep::Paired(machine) = &next {
                            on_paired.call(machine.clone());
                        }
                        if next != *step.peek() {
                            step.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Pairing status poll failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_paired;

    PairingState {
        step,
        error,
        submitting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn awaiting() -> PairingStep {
        PairingStep::AwaitingMachine {
            name: "Lobby".into(),
            totem: "totem".into(),
        }
    }

    fn machine() -> Machine {
        Machine {
            device_id: "abc".into(),
            name: "Lobby".into(),
            paired_at: Utc::now(),
        }
    }

    #[test]
    fn test_awaiting_step_exposes_totem() {
        assert_eq!(awaiting().totem(), Some("totem"));
        assert_eq!(PairingStep::EnterName.totem(), None);
    }

    #[test]
    fn test_pending_keeps_waiting() {
        assert_eq!(awaiting().after_status(PairingStatus::Pending), awaiting());
    }

    #[test]
    fn test_paired_resolves_machine() {
        let m = machine();
        assert_eq!(
            awaiting().after_status(PairingStatus::Paired(m.clone())),
            PairingStep::Paired(m)
        );
    }

    #[test]
    fn test_expired_keeps_name_for_retry() {
        assert_eq!(
            awaiting().after_status(PairingStatus::Expired),
            PairingStep::Expired { name: "Lobby".into() }
        );
    }

    #[test]
    fn test_other_steps_ignore_status() {
        assert_eq!(
            PairingStep::EnterName.after_status(PairingStatus::Paired(machine())),
            PairingStep::EnterName
        );
    }
}
