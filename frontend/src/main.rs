mod api;
mod app;
mod chart;
mod components;
mod config;
mod draft;
mod error;
mod filter;
mod model;
mod store;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    console_error_panic_hook::set_once();
    log::info!(
        "starting budget view against {:?}",
        if config.api_base_url.is_empty() { "same origin" } else { config.api_base_url.as_str() }
    );

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
