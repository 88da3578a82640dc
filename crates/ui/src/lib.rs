//! cosmic-toggle browser frontend
//!
//! On load, paints the cosmic backdrop and binds every command toggle on
//! the page to `POST /api/toggle/{command}`.

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod dom;
pub mod error;
pub mod network;
pub mod theme;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use client::{ToggleClient, ToggleTransport};
pub use error::UiError;

/// Panic hook and console subscriber (browser only)
fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        tracing_wasm::set_as_global_default();
    }
}

/// Run startup once the DOM is parsed
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    init_logging();

    let document = dom::get_document()?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(Box::new(move || {
            if let Err(e) = bootstrap::run(&doc) {
                tracing::error!(error = %e, "startup failed");
            }
        }) as Box<dyn FnOnce()>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        // Module loaded after parsing finished; DOMContentLoaded already fired
        bootstrap::run(&document)?;
    }

    Ok(())
}
