use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText};
use crate::server_fns::list_machines;
use crate::shared::constants::MACHINE_STATUS_ROUTE;
use crate::shared::hooks::use_route_state;

/// Paired machines, highlighting the one just paired
#[component]
pub fn MachineStatus() -> Element {
    let route_state = use_route_state();
    let highlighted = route_state
        .read()
        .for_path(MACHINE_STATUS_ROUTE)
        .and_then(|state| state.machine_id.clone());

    let machines = use_resource(move || async move { list_machines().await });

    let body = match &*machines.read() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { icon: "🏧".to_string(), message: "No machines paired yet".to_string() }
        },
        Some(Ok(list)) => rsx! {
            table { class: "c-machines",
                thead {
                    tr {
                        th { "Name" }
                        th { "Device ID" }
                        th { "Paired" }
                    }
                }
                tbody {
                    for machine in list.iter() {
                        tr {
                            key: "{machine.device_id}",
                            class: if highlighted.as_deref() == Some(machine.device_id.as_str()) {
                                "c-machines__row c-machines__row--new"
                            } else {
                                "c-machines__row"
                            },
                            td { "{machine.name}" }
                            td { code { "{machine.device_id}" } }
                            td { {machine.paired_at.format("%Y-%m-%d %H:%M").to_string()} }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: format!("Could not load machines: {}", e) }
        },
        None => rsx! {
            LoadingText { message: "Loading machines...".to_string() }
        },
    };

    rsx! {
        section { class: "c-section",
            h1 { class: "c-section__title", "Machine status" }
            {body}
        }
    }
}
