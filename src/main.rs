//! Acta Diurna Frontend Entry Point

mod api;
mod app;
mod autosave;
mod components;
mod config;
mod context;
mod format;
mod logging;
mod markdown;
mod models;
mod pages;
mod storage;
mod store;
mod uploader;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("[App] Starting, backend at {}", config::API_BASE_URL);
    mount_to_body(App);
}
