//! TaskLift Dashboard Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filters;
mod format;
mod forms;
mod loaders;
mod models;
mod render;
mod report;
mod router;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting TaskLift dashboard");

    mount_to_body(App);
}
