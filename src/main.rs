//! Lamassu admin console - Main Entry Point
//!
//! Serves the Dioxus application together with its server functions.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use lamassu_admin_header::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use lamassu_admin_header::config::{AppConfig, CONFIG, NAV_TREE};
    use lamassu_admin_header::domain::services::NOTIFICATIONS;
    use lamassu_admin_header::shared::logging;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting admin console...");

    // CONFIG falls back per variable; the server refuses a malformed environment
    if let Err(e) = AppConfig::from_env() {
        logging::log_config_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    logging::log_config_loaded(
        &CONFIG.brand_name,
        CONFIG.nav_tree_path.as_deref(),
        CONFIG.pairing_ttl.as_secs(),
    );

    if let Err(e) = &*NAV_TREE {
        logging::log_nav_tree_error(e);
        std::process::exit(1);
    }

    if CONFIG.demo_notifications {
        NOTIFICATIONS.seed_demo();
    }

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Admin console initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
