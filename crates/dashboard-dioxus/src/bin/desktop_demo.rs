// File: crates/dashboard-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the interactive desktop dashboard.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_dioxus=info,dashboard_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    if let Err(e) = dashboard_dioxus::ui::run_dashboard() {
        eprintln!("dashboard-dioxus error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_tracing();
    if let Err(e) = dashboard_dioxus::run_dashboard() {
        tracing::error!("{e}");
        eprintln!("This launcher requires --features desktop");
    }
}
