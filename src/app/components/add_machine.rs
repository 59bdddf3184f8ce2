use dioxus::prelude::*;

use crate::app::components::{ActionButton, ButtonVariant, ErrorMessage};
use crate::domain::models::Machine;
use crate::shared::constants::MACHINE_NAME_MAX_LEN;
use crate::shared::hooks::{use_pairing, PairingStep};

/// Modal that pairs a new machine: name it, show the totem, wait for the
/// machine to present it.
#[component]
pub fn AddMachine(close: EventHandler<()>, on_paired: EventHandler<Machine>) -> Element {
    let mut pairing = use_pairing(on_paired);
    let mut name = use_signal(String::new);

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            evt.prevent_default();
            close.call(());
        }
    };

    let step = pairing.step.read().clone();
    let content = match step {
        PairingStep::EnterName => rsx! {
            form {
                class: "c-add-machine__form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    pairing.submit(name());
                },
                label { class: "c-add-machine__label", r#for: "machine-name", "Machine name" }
                input {
                    id: "machine-name",
                    class: "c-add-machine__input",
                    r#type: "text",
                    maxlength: "{MACHINE_NAME_MAX_LEN}",
                    autofocus: true,
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
                ActionButton {
                    submit: true,
                    disabled: (pairing.submitting)(),
                    if (pairing.submitting)() { "Generating..." } else { "Generate pairing totem" }
                }
            }
        },
        PairingStep::AwaitingMachine { name, totem } => rsx! {
            div { class: "c-add-machine__totem",
                p { "Scan or enter this totem on " strong { "{name}" } " to finish pairing." }
                code { class: "c-add-machine__code", "{totem}" }
                p { class: "c-add-machine__waiting", "Waiting for the machine..." }
            }
        },
        PairingStep::Expired { name } => rsx! {
            div { class: "c-add-machine__expired",
                p { "The pairing totem for " strong { "{name}" } " expired." }
                ActionButton {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| pairing.reset(),
                    "Start over"
                }
            }
        },
        PairingStep::Paired(machine) => rsx! {
            p { class: "c-add-machine__done", "Machine " strong { "{machine.name}" } " paired." }
        },
    };

    rsx! {
        div { class: "c-modal__backdrop",
            div {
                class: "c-modal c-add-machine",
                role: "dialog",
                aria_modal: "true",
                tabindex: "0",
                onkeydown: handle_keydown,
                div { class: "c-modal__header",
                    h2 { class: "c-modal__title", "Add machine" }
                    button {
                        class: "c-modal__close",
                        aria_label: "Close",
                        onclick: move |_| close.call(()),
                        "✕"
                    }
                }
                if let Some(error) = (pairing.error)() {
                    ErrorMessage { message: error }
                }
                {content}
            }
        }
    }
}
