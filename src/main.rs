mod components;
mod config;
mod map;
mod models;
mod services;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!("🧭 Campus Navigator starting...");

    yew::Renderer::<App>::new().render();
}
