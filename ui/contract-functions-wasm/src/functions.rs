//! Read/write function forms.
//!
//! Each `[data-function]` element holds one `[data-function-form]`. Reads
//! `GET` a result fragment into `[data-function-response]`; writes run the
//! wallet flow from `scf_write_core`.

use async_trait::async_trait;
use scf_api_types::{ContractType, FunctionAction, FunctionDescriptor, ReadQuery, split_function_inputs};
use scf_write_core::{Sleeper, WriteFlow};
use serde_json::Value;
use std::time::Duration;
use web_sys::Element;

use crate::api;
use crate::dom;
use crate::events;
use crate::loader::PANEL_SELECTOR;
use crate::modals::ModalNotifier;
use crate::state;
use crate::wallet::Eip1193Bridge;

const TX_VALUE_ATTR: &str = "tx-value";

/// Browser timer for receipt polling.
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Wire the submit interceptor for one function element.
pub fn bind_function(function: &Element) {
    let Some(form) = dom::query_within(function, "[data-function-form]") else {
        tracing::debug!("function element without a form");
        return;
    };

    let function = function.clone();
    let form_el = form.clone();
    events::on_submit_async(&form, move || {
        let function = function.clone();
        let form = form_el.clone();
        async move { on_submit(&function, &form).await }
    });
}

async fn on_submit(function: &Element, form: &Element) {
    let action = dom::attr(form, "data-action").unwrap_or_default();
    match action.parse::<FunctionAction>() {
        Ok(FunctionAction::Read) => read(function, form).await,
        Ok(FunctionAction::Write) => write(function, form).await,
        Err(err) => tracing::warn!(error = %err, "ignoring form submission"),
    }
}

fn named_input(form: &Element, name: &str) -> Option<String> {
    dom::query_within(form, &format!("input[name={name}]")).and_then(|el| dom::input_value(&el))
}

fn function_inputs(form: &Element) -> Vec<Element> {
    dom::query_all_within(form, "input[name=function_input]")
}

async fn read(function: &Element, form: &Element) {
    let Some(url) = dom::attr(form, "data-url") else {
        tracing::warn!("read form has no data-url");
        return;
    };

    let query = ReadQuery {
        function_name: named_input(form, "function_name").unwrap_or_default(),
        method_id: named_input(form, "method_id").unwrap_or_default(),
        args: function_inputs(form)
            .iter()
            .filter_map(dom::input_value)
            .collect(),
    };

    match api::get_html(&url, &query.pairs()).await {
        Ok(html) => {
            if let Some(container) = dom::query_within(function, "[data-function-response]") {
                dom::set_inner_html(&container, &html);
            }
        }
        Err(err) => tracing::warn!(function = %query.function_name, error = %err, "read query failed"),
    }
}

fn json_attr(el: &Element, name: &str) -> Option<Value> {
    let raw = dom::attr(el, name)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(attribute = name, error = %err, "malformed ABI attribute");
            None
        }
    }
}

/// Snapshot the form into a descriptor. Read fresh on every submit.
pub fn describe(form: &Element) -> FunctionDescriptor {
    let (args, tx_value) = split_function_inputs(
        function_inputs(form)
            .iter()
            .filter_map(|el| dom::input_value(el).map(|v| (dom::has_attr(el, TX_VALUE_ATTR), v))),
    );

    let contract_type = dom::query(PANEL_SELECTOR)
        .and_then(|panel| dom::attr(&panel, "data-type"))
        .map(|t| ContractType::from_attr(&t))
        .unwrap_or_default();

    let chain_id = dom::attr(form, "data-chain-id")
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or_else(|| {
            tracing::warn!("form has no usable data-chain-id");
            0
        });

    FunctionDescriptor {
        name: named_input(form, "function_name"),
        method_id: named_input(form, "method_id"),
        args,
        tx_value,
        contract_address: dom::attr(form, "data-contract-address").unwrap_or_default(),
        implementation_abi: json_attr(form, "data-implementation-abi"),
        contract_abi: json_attr(form, "data-contract-abi"),
        contract_type,
        chain_id,
    }
}

async fn write(function: &Element, form: &Element) {
    let descriptor = describe(form);
    let config = state::config();
    let notifier = ModalNotifier::new(
        dom::query_within(function, "#pending-contract-write"),
        config.clone(),
    );

    let outcome = WriteFlow::new(&Eip1193Bridge, &notifier, &GlooSleeper, &config)
        .submit(&descriptor)
        .await;
    tracing::debug!(method = descriptor.display_name(), ?outcome, "write finished");
}
