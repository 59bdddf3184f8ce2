//! Top navigation header.
//!
//! The active navigation item is derived from the current route on every
//! render. Opening the notification center goes through the shell's
//! `PageChrome` signal, which owns the scroll-suppression marker classes.

use dioxus::prelude::*;

use crate::app::components::{ActionButton, AddMachine, ButtonVariant, NotificationCenter};
use crate::app::pages::routes::Route;
use crate::domain::models::{Machine, NavItem, NavTree, previous_subroute};
use crate::shared::hooks::{use_page_chrome, use_route_state, use_unread_notifications};
use crate::shared::state::RouteState;

#[component]
pub fn Header(brand_name: String, tree: NavTree) -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let nav = navigator();

    let mut chrome = use_page_chrome();
    let mut route_state = use_route_state();
    let mut unread = use_unread_notifications();
    let mut pairing_open = use_signal(|| false);

    let active = tree.active_item(&path).cloned();
    let subnav = active.clone().filter(NavItem::has_children);
    let popover_open = chrome.read().notification_center_open();
    let has_unread = unread.has_unread();

    let on_brand_click = move |_| {
        let state = RouteState::brand();
        nav.push(state.target.clone());
        route_state.set(state);
    };

    let on_paired = move |machine: Machine| {
        tracing::info!("Machine '{}' paired, opening machine status", machine.name);
        pairing_open.set(false);
        let state = RouteState::paired(machine.device_id);
        nav.push(state.target.clone());
        route_state.set(state);
    };

    let toggle_notifications = move |_| {
        let open = chrome.write().toggle_notification_center();
        if !open {
            unread.refetch();
        }
    };

    // Shared by click-away and the close button
    let mut close_notifications = move || {
        chrome.write().close_notification_center();
        unread.refetch();
    };

    rsx! {
        header { class: "c-header",
            div { class: "c-header__bar",
                div { class: "c-header__content",
                    div {
                        class: "c-header__logo",
                        role: "link",
                        onclick: on_brand_click,
                        span { class: "c-header__logo-mark", "◆" }
                        h4 { class: "c-header__brand", "{brand_name}" }
                    }
                    nav { class: "c-header__nav",
                        ul { class: "c-header__nav-list",
                            for item in tree.items().iter() {
                                if let Some(target) = item.link_target() {
                                    li { key: "{item.label}", class: "c-header__nav-item",
                                        Link {
                                            to: target.to_string(),
                                            class: if active.as_ref() == Some(item) {
                                                "c-header__link c-header__link--active"
                                            } else {
                                                "c-header__link"
                                            },
                                            span {
                                                class: "c-header__link-label",
                                                "data-label": "{item.label}",
                                                "{item.label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "c-header__actions",
                        ActionButton {
                            variant: ButtonVariant::Secondary,
                            icon: "+",
                            onclick: move |_| pairing_open.set(true),
                            "Add machine"
                        }
                        div { class: "c-header__notifications",
                            button {
                                class: "c-header__bell",
                                aria_label: "Notifications",
                                aria_expanded: "{popover_open}",
                                onclick: toggle_notifications,
                                "🔔"
                                if has_unread {
                                    span { class: "c-header__unread" }
                                }
                            }
                            if popover_open {
                                div {
                                    class: "c-popover__backdrop",
                                    onclick: move |_| close_notifications(),
                                }
                                div {
                                    id: "notifications-popper",
                                    class: "c-popover",
                                    NotificationCenter {
                                        close: move |_| close_notifications(),
                                        notify_unread: move |_| unread.refetch(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(item) = subnav {
                Subheader { key: "{item.label}", item, current_path: path.clone() }
            }
            if pairing_open() {
                AddMachine {
                    close: move |_| pairing_open.set(false),
                    on_paired,
                }
            }
        }
    }
}

/// Second navigation row for the active item's children. Following a link
/// records the sibling the user came from in the shared route state.
#[component]
pub fn Subheader(item: NavItem, current_path: String) -> Element {
    let mut route_state = use_route_state();
    let mut last_matched = use_signal(|| None::<String>);

    let matched = item.active_child(&current_path).map(|c| c.route.clone());
    let prev = previous_subroute(&item, &current_path, last_matched.read().as_deref());

    // Remember the child that matched last, so a bare section route still
    // knows which sibling it came from
    use_effect(use_reactive((&item, &current_path), move |(item, current_path)| {
        let next = previous_subroute(&item, &current_path, last_matched.peek().as_deref());
        if next != *last_matched.peek() {
            last_matched.set(next);
        }
    }));

    rsx! {
        div { class: "c-subheader",
            div { class: "c-header__content",
                nav {
                    ul { class: "c-subheader__list",
                        for child in item.children.iter() {
                            li { key: "{child.route}", class: "c-subheader__item",
                                Link {
                                    to: child.route.clone(),
                                    class: if matched.as_deref() == Some(child.route.as_str()) {
                                        "c-subheader__link c-subheader__link--active"
                                    } else {
                                        "c-subheader__link"
                                    },
                                    onclick: {
                                        let target = child.route.clone();
                                        let prev = prev.clone();
                                        move |_| {
                                            route_state.set(RouteState::came_from(target.clone(), prev.clone()));
                                        }
                                    },
                                    "{child.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
