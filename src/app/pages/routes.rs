use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::app::layouts::Header;
use crate::app::pages::{Dashboard, MachineStatus, Section};
use crate::server_fns::get_shell;
use crate::shared::hooks::provide_shell_context;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},

    // Landing page after pairing a machine
    #[route("/maintenance/machine-status")]
    MachineStatus {},

    // Every other navigation entry
    #[route("/:..segments")]
    Section { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Admin console initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Page shell: owns the UI context signals and renders the
/// scroll-suppression marker classes from the page chrome flag.
#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let (chrome, _route_state) = provide_shell_context();

    let shell = use_server_future(move || async move { get_shell().await })?;

    let chrome = chrome();
    let header = match &*shell.read() {
        Some(Ok(shell)) => rsx! {
            Header {
                brand_name: shell.brand_name.clone(),
                tree: shell.tree.clone(),
            }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: format!("Navigation unavailable: {}", e) }
        },
        None => rsx! {
            LoadingText { message: "Loading...".to_string() }
        },
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-page {chrome.body_class()}",
            div { id: "root", class: "c-root {chrome.root_class()}",
                {header}
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
