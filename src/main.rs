//! Activity Board Frontend Entry Point

mod actions;
mod app;
mod cards;
mod commands;
mod components;
mod config;
mod context;
mod flash;
mod forms;
mod models;
mod store;


use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    // The backend passes everything; the facade filter does the filtering, so
    // setActivityBoardLogLevel can raise verbosity at runtime.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(config.log_level);
    log::info!("[APP] Starting, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
