//! Event binding.
//!
//! Listeners live for the rest of the page, so their closures are leaked with
//! `forget()`. Async work is spawned via `wasm_bindgen_futures::spawn_local`.

use std::future::Future;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

/// Attach a listener; failures to register are logged.
pub fn listen(el: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        tracing::warn!(event, error = ?err, "failed to bind listener");
    }
    cb.forget();
}

/// Run `handler` on each click.
pub fn on_click_async<F, Fut>(el: &Element, handler: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    listen(el, "click", move |_| {
        wasm_bindgen_futures::spawn_local(handler());
    });
}

/// Intercept form submission: the default navigation is always prevented.
pub fn on_submit_async<F, Fut>(form: &Element, handler: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    listen(form, "submit", move |event| {
        event.prevent_default();
        wasm_bindgen_futures::spawn_local(handler());
    });
}
