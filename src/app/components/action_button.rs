use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// Pill button with a leading icon, used for header actions
#[component]
pub fn ActionButton(
    variant: Option<ButtonVariant>,
    icon: Option<&'static str>,
    disabled: Option<bool>,
    submit: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let disabled = disabled.unwrap_or(false);
    let button_type = if submit.unwrap_or(false) { "submit" } else { "button" };

    let variant_class = match variant {
        ButtonVariant::Primary => "c-action-button--primary",
        ButtonVariant::Secondary => "c-action-button--secondary",
    };

    rsx! {
        button {
            class: "c-action-button {variant_class}",
            r#type: button_type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if let Some(icon) = icon {
                span { class: "c-action-button__icon", "{icon}" }
            }
            {children}
        }
    }
}
