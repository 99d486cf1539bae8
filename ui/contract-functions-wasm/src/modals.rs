//! Modal notifications.
//!
//! Status modals are rendered by the page layout as `#errorStatusModal`,
//! `#warningStatusModal` and `#successStatusModal`, each with a
//! `.modal-status-title` and a `.modal-status-text`. Pending-transaction
//! feedback lives in the per-function `#pending-contract-write` container.

use alloy_primitives::TxHash;
use scf_write_core::{ControllerConfig, Notifier};
use web_sys::Element;

use crate::dom;

const STATUS_MODALS: [&str; 3] = ["#errorStatusModal", "#warningStatusModal", "#successStatusModal"];

/// Opens one status modal and closes the others. `fill` writes the body into
/// the emptied `.modal-status-text`.
fn open_status_modal(selector: &str, title: &str, fill: impl FnOnce(&Element)) {
    for other in STATUS_MODALS.iter().filter(|s| **s != selector) {
        if let Some(modal) = dom::query(other) {
            close_modal(&modal);
        }
    }

    let Some(modal) = dom::query(selector) else {
        tracing::warn!(selector, title, "status modal missing from page");
        return;
    };

    if let Some(el) = dom::query_within(&modal, ".modal-status-title") {
        dom::set_text(&el, title);
    }
    if let Some(el) = dom::query_within(&modal, ".modal-status-text") {
        dom::set_text(&el, "");
        fill(&el);
    }

    dom::add_class(&modal, "show");
    dom::set_display(&modal, "block");
    let _ = modal.set_attribute("aria-hidden", "false");
}

fn close_modal(modal: &Element) {
    dom::remove_class(modal, "show");
    dom::set_display(modal, "none");
    let _ = modal.set_attribute("aria-hidden", "true");
}

/// Notifier bound to one function form.
pub struct ModalNotifier {
    pending: Option<Element>,
    config: ControllerConfig,
}

impl ModalNotifier {
    pub fn new(pending: Option<Element>, config: ControllerConfig) -> Self {
        Self { pending, config }
    }
}

impl Notifier for ModalNotifier {
    fn show_error(&self, title: &str, message: &str) {
        open_status_modal("#errorStatusModal", title, |el| dom::append_text(el, message));
    }

    fn show_warning(&self, title: &str, message: &str) {
        open_status_modal("#warningStatusModal", title, |el| dom::append_text(el, message));
    }

    fn show_success(&self, title: &str, hash: &TxHash, method: &str) {
        if let Some(pending) = &self.pending {
            dom::set_hidden(pending, true);
        }
        let href = self.config.tx_link(hash);
        open_status_modal("#successStatusModal", title, |el| {
            dom::append_text(el, "Successfully sent ");
            dom::append_link(el, &href, "transaction");
            dom::append_text(el, &format!(" for method \"{method}\""));
        });
    }

    fn show_pending(&self, visible: bool, hash: &TxHash) {
        let Some(pending) = &self.pending else {
            tracing::debug!(%hash, "no pending container for this function");
            return;
        };
        if let Some(link) = dom::query_within(pending, "[data-pending-tx-link]") {
            dom::set_link(&link, &self.config.tx_link(hash), &hash.to_string());
        }
        dom::set_hidden(pending, !visible);
    }
}
