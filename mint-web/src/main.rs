//! Sougen mint frontend
//!
//! Connect an injected Ethereum wallet and mint from the collection contract.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger (also receives lib-core's tracing events)
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Sougen mint starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(loading_element) => {
            if let Err(e) = loading_element.class_list().add_1("hidden") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID),
    }
}
