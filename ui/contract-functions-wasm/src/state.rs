//! Page-wide controller state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Only the configuration lives here; wallet session state is always read
//! fresh from the provider.

use scf_write_core::ControllerConfig;
use std::cell::RefCell;
use web_sys::Element;

use crate::dom;

pub const CONFIG_ATTR: &str = "data-controller-config";

thread_local! {
    static CONFIG: RefCell<ControllerConfig> = RefCell::new(ControllerConfig::default());
}

/// Read overrides from the panel anchor, keeping defaults on bad input.
pub fn init_config(anchor: &Element) {
    let Some(raw) = dom::attr(anchor, CONFIG_ATTR) else {
        return;
    };
    match ControllerConfig::from_json(&raw) {
        Ok(config) => CONFIG.with(|c| *c.borrow_mut() = config),
        Err(err) => tracing::warn!(error = %err, "ignoring malformed controller config"),
    }
}

pub fn config() -> ControllerConfig {
    CONFIG.with(|c| c.borrow().clone())
}
