//! Function panel loader.
//!
//! Fetches the server-rendered function forms into the panel anchor, then
//! wires the wallet connection UI and every function form inside it.

use alloy_primitives::Address;
use scf_api_types::{ConnectionView, PanelQuery};
use scf_wallet_bridge::WalletBridge;
use web_sys::Element;

use crate::api;
use crate::dom;
use crate::events;
use crate::functions;
use crate::state;
use crate::wallet::Eip1193Bridge;

pub const PANEL_SELECTOR: &str = "[data-smart-contract-functions]";

/// Connection-state sections of the panel. Any of them may be absent.
#[derive(Clone)]
pub struct ConnectionElements {
    pub connect_to: Vec<Element>,
    pub connect: Vec<Element>,
    pub connected_to: Vec<Element>,
    pub reconnect: Vec<Element>,
    pub connected_to_address: Vec<Element>,
}

impl ConnectionElements {
    pub fn bind() -> Self {
        Self {
            connect_to: dom::query_all("[connect-to]"),
            connect: dom::query_all("[connect-metamask]"),
            connected_to: dom::query_all("[connected-to]"),
            reconnect: dom::query_all("[re-connect-metamask]"),
            connected_to_address: dom::query_all("[connected-to-address]"),
        }
    }

    /// Apply the three-way connect / connected toggle.
    pub fn render(&self, view: &ConnectionView) {
        let visibility = view.visibility();
        for el in &self.connect_to {
            dom::set_hidden(el, !visibility.connect_to);
        }
        for el in &self.connect {
            dom::set_hidden(el, !visibility.connect);
        }
        for el in &self.connected_to {
            dom::set_hidden(el, !visibility.connected_to);
        }

        if let Some(account) = view.account() {
            let config = state::config();
            let text = account.to_string();
            for el in &self.connected_to_address {
                dom::set_link(el, &config.address_link(&account), &text);
            }
        }
    }
}

fn panel_query(anchor: &Element) -> PanelQuery {
    PanelQuery {
        hash: dom::attr(anchor, "data-hash").unwrap_or_default(),
        contract_type: dom::attr(anchor, "data-type").unwrap_or_default(),
        action: dom::attr(anchor, "data-action").unwrap_or_default(),
    }
}

/// Load the panel into `anchor`. On failure the anchor shows the status text.
pub async fn load_functions(anchor: &Element) {
    let Some(url) = dom::attr(anchor, "data-url") else {
        tracing::warn!("functions panel has no data-url");
        return;
    };

    match api::get_html(&url, &panel_query(anchor).pairs()).await {
        Ok(html) => {
            dom::set_inner_html(anchor, &html);
            bind_panel().await;
        }
        Err(err) => {
            tracing::warn!(%url, error = %err, "failed to load contract functions");
            dom::set_text(anchor, &err.status_text());
        }
    }
}

async fn bind_panel() {
    let bridge = Eip1193Bridge;
    let els = ConnectionElements::bind();

    {
        let els = els.clone();
        let subscribed = bridge.on_accounts_changed(Box::new(move |accounts: Vec<Address>| {
            els.render(&ConnectionView::from_accounts(&accounts));
        }));
        if let Err(err) = subscribed {
            tracing::debug!(error = %err, "not subscribed to account changes");
        }
    }

    for el in els.connect.iter().chain(els.reconnect.iter()) {
        events::on_click_async(el, || async {
            if let Err(err) = Eip1193Bridge.connect().await {
                tracing::warn!(error = %err, "wallet connection request failed");
            }
        });
    }

    for function in dom::query_all("[data-function]") {
        functions::bind_function(&function);
    }

    let button_state = bridge.connect_button_state().await;
    els.render(&ConnectionView::from_button_state(&button_state));
}
