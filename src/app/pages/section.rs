use dioxus::prelude::*;

use crate::shared::hooks::use_route_state;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        SectionBody { title: "Dashboard".to_string(), path: "/dashboard".to_string() }
    }
}

/// Placeholder for navigation entries whose pages live elsewhere
#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let title = segments
        .last()
        .map(|s| s.replace('-', " "))
        .unwrap_or_else(|| "Home".to_string());

    rsx! {
        SectionBody { title, path }
    }
}

#[component]
fn SectionBody(title: String, path: String) -> Element {
    let route_state = use_route_state();
    let prev = route_state
        .read()
        .for_path(&path)
        .and_then(|state| state.prev.clone());

    rsx! {
        section { class: "c-section",
            h1 { class: "c-section__title", "{title}" }
            p { class: "c-section__path", code { "{path}" } }
            if let Some(prev) = prev {
                p { class: "c-section__prev", "Came from " code { "{prev}" } }
            }
        }
    }
}
