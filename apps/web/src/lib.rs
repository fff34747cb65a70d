//! Browser host for the portfolio navigation layer.

use site_core::Settings;
use tracing::warn;
use wasm_bindgen::prelude::*;

mod console;
mod dom;
mod wiring;

const EMBEDDED_SETTINGS: &str = include_str!("../../../site.toml");

fn load_settings() -> Settings {
    match Settings::from_toml_str(EMBEDDED_SETTINGS) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "embedded settings rejected; using defaults");
            Settings::default()
        }
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        warn!("no window; navigation layer disabled");
        return;
    };
    let Some(document) = window.document() else {
        warn!("no document; navigation layer disabled");
        return;
    };
    wiring::boot(window, document, load_settings());
}

#[wasm_bindgen(start)]
pub fn start() {
    console::init("info");

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        boot();
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let on_ready = Closure::once_into_js(boot);
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        warn!(error = ?err, "failed to wait for DOMContentLoaded");
    }
}
