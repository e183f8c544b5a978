//! Lumen UI entry point for WASM.

#![no_main]

use leptos::prelude::*;
use lumen_core::{AppConfig, Page};
use lumen_ui::{App, dom, logging};
use tracing::{info, warn};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

/// Entry point for the WASM application.
/// This function is called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    let source = dom::embedded_config_source();
    let (config, config_error) = match AppConfig::from_embedded(source.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init_logging(&config) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }
    if let Some(e) = config_error {
        warn!("Ignoring embedded config, using defaults: {}", e);
    }

    let page = Page::from_path(&dom::location_path());
    info!(?page, "Mounting page");
    dom::set_document_title(page.title());

    match dom::mount_target(&config.mount_target_id) {
        Ok(target) => leptos::mount::mount_to(target, move || view! { <App page=page /> }).forget(),
        Err(e) => {
            warn!("{}, mounting to body instead", e);
            mount_to_body(move || view! { <App page=page /> });
        }
    }
}
