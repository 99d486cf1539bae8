//! Smart-contract functions panel, WASM frontend.
//!
//! Loads the server-rendered read/write function forms for a contract and
//! drives them through the injected wallet provider.

pub mod api;
pub mod dom;
pub mod events;
pub mod functions;
pub mod loader;
pub mod modals;
pub mod state;
pub mod wallet;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );

    init();
    Ok(())
}

fn init() {
    let Some(anchor) = dom::query(loader::PANEL_SELECTOR) else {
        tracing::debug!("no smart contract functions panel on this page");
        return;
    };

    state::init_config(&anchor);

    wasm_bindgen_futures::spawn_local(async move {
        loader::load_functions(&anchor).await;
    });
}
