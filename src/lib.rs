//! Registration page for a GoTrue-compatible auth service.
//!
//! The form logic (schema, state machine, sign-up client) compiles for every
//! target so it can be tested natively; the Leptos views only build for
//! `wasm32`, where [`mount`] attaches the app to the document body.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs logging and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    let config = app_lib::config::AppConfig::load();
    app_lib::logging::init(&config);
    tracing::info!(
        version = app_lib::build_info::version(),
        commit = app_lib::build_info::git_commit_hash(),
        "mounting registro"
    );

    leptos::prelude::mount_to_body(app::App);
}
