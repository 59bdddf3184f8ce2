use dioxus::prelude::*;

use crate::shared::state::{PageChrome, RouteState};

/// Installs the page chrome and route state signals. Called once by the shell.
pub fn provide_shell_context() -> (Signal<PageChrome>, Signal<RouteState>) {
    let chrome = use_context_provider(|| Signal::new(PageChrome::default()));
    let route_state = use_context_provider(|| Signal::new(RouteState::default()));
    (chrome, route_state)
}

/// Page chrome flags provided by the shell
pub fn use_page_chrome() -> Signal<PageChrome> {
    use_context::<Signal<PageChrome>>()
}

/// Navigation state payload of the last programmatic push
pub fn use_route_state() -> Signal<RouteState> {
    use_context::<Signal<RouteState>>()
}
