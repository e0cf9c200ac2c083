pub mod domain;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use shared::config;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match config::load_config(None) {
        Ok(config) => config,
        Err(e) => {
            // logger is not up yet, fall back to defaults
            web_sys::console::error_1(&format!("{}", e).into());
            config::ClientConfig::default()
        }
    };
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    log::info!(
        "Client started, page size {}, search debounce {} ms",
        config.list.page_size,
        config.list.search_debounce_ms
    );
}
