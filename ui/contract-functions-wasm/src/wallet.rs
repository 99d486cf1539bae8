//! Wallet bridge over the injected EIP-1193 provider.
//!
//! Account, chain and receipt queries go through `window.ethereum.request`.
//! Contract method sends are delegated to the page's `web3` library, which
//! owns ABI encoding.

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use scf_api_types::{ConnectButtonState, TxParams, TxReceipt};
use scf_wallet_bridge::{
    AccountsListener, ContractCall, ProviderError, ProviderResult, SendError, SendResult, WalletBridge,
};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

fn get(target: &JsValue, key: &str) -> ProviderResult<JsValue> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(provider_error)
}

fn get_fn(target: &JsValue, key: &str) -> ProviderResult<Function> {
    get(target, key)?
        .dyn_into::<Function>()
        .map_err(|_| ProviderError::new(format!("`{key}` is not a function")))
}

fn flag(target: &JsValue, key: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn to_js<T: Serialize>(value: &T) -> ProviderResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ProviderError::new(e.to_string()))
}

/// Decode whatever a provider rejected with into `{ code, message }`.
pub fn provider_error(value: JsValue) -> ProviderError {
    if let Ok(err) = serde_wasm_bindgen::from_value::<ProviderError>(value.clone()) {
        if !err.message.is_empty() {
            return err;
        }
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return ProviderError::new(String::from(err.message()));
    }
    ProviderError::new(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn parse_accounts(value: &JsValue) -> Vec<Address> {
    Array::from(value)
        .iter()
        .filter_map(|v| v.as_string())
        .filter_map(|s| s.parse::<Address>().ok())
        .collect()
}

fn parse_hash(value: JsValue) -> ProviderResult<TxHash> {
    let raw = value
        .as_string()
        .ok_or_else(|| ProviderError::new("provider returned a non-string transaction hash"))?;
    raw.parse::<TxHash>()
        .map_err(|_| ProviderError::new(format!("invalid transaction hash {raw:?}")))
}

/// Bridge to `window.ethereum`. Stateless: every call looks the provider up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip1193Bridge;

impl Eip1193Bridge {
    fn ethereum(&self) -> Option<Object> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("ethereum"))
            .ok()
            .and_then(|v| v.dyn_into::<Object>().ok())
    }

    fn require_ethereum(&self) -> ProviderResult<Object> {
        self.ethereum()
            .ok_or_else(|| ProviderError::new("no wallet provider is installed"))
    }

    /// `ethereum.request({ method, params })`
    async fn request(&self, method: &str, params: Option<Array>) -> ProviderResult<JsValue> {
        let ethereum = self.require_ethereum()?;

        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into()).map_err(provider_error)?;
        if let Some(params) = params {
            Reflect::set(&args, &"params".into(), &params).map_err(provider_error)?;
        }

        let promise: Promise = get_fn(&ethereum, "request")?
            .call1(&ethereum, &args)
            .map_err(provider_error)?
            .into();

        JsFuture::from(promise).await.map_err(provider_error)
    }

    async fn accounts(&self) -> ProviderResult<Vec<Address>> {
        let result = self.request("eth_accounts", None).await?;
        Ok(parse_accounts(&result))
    }

    /// `new Web3(window.ethereum)` from the global `Web3` constructor.
    fn web3(&self) -> ProviderResult<JsValue> {
        let ethereum = self.require_ethereum()?;
        let window = web_sys::window().ok_or_else(|| ProviderError::new("no window"))?;
        let ctor = get(&window, "Web3")?
            .dyn_into::<Function>()
            .map_err(|_| ProviderError::new("web3 library is not available on the page"))?;
        Reflect::construct(&ctor, &Array::of1(&ethereum)).map_err(provider_error)
    }

    /// `new web3.eth.Contract(abi, address).methods[method](...args).send(params)`.
    /// Returns the PromiEvent; nothing has reached the wallet if this fails.
    fn contract_send(&self, call: &ContractCall<'_>) -> ProviderResult<JsValue> {
        let web3 = self.web3()?;
        let eth = get(&web3, "eth")?;
        let contract_ctor = get_fn(&eth, "Contract")?;
        let contract = Reflect::construct(
            &contract_ctor,
            &Array::of2(&to_js(call.abi)?, &JsValue::from_str(&call.address.to_string())),
        )
        .map_err(provider_error)?;

        let methods = get(&contract, "methods")?;
        let method = get_fn(&methods, call.method)
            .map_err(|_| ProviderError::new(format!("contract has no method \"{}\"", call.method)))?;
        let args: Array = call.args.iter().map(|a| JsValue::from_str(a)).collect();
        let tx_object = method.apply(&methods, &args).map_err(provider_error)?;

        let send = get_fn(&tx_object, "send")?;
        send.call1(&tx_object, &to_js(call.params)?)
            .map_err(provider_error)
    }
}

/// Wait for a web3 PromiEvent to emit `transactionHash` (resolve) or `error`
/// (reject). Only the first of the two settles the promise, so a revert after
/// the hash is out is read from the receipt status instead.
async fn transaction_hash_of(promi_event: JsValue) -> ProviderResult<TxHash> {
    let on = get_fn(&promi_event, "on")?;
    let promise = Promise::new(&mut |resolve, reject| {
        let bound = on
            .call2(&promi_event, &"transactionHash".into(), &resolve)
            .and_then(|_| on.call2(&promi_event, &"error".into(), &reject));
        if let Err(err) = bound {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let hash = JsFuture::from(promise).await.map_err(provider_error)?;
    parse_hash(hash)
}

#[async_trait(?Send)]
impl WalletBridge for Eip1193Bridge {
    async fn is_wallet_enabled(&self) -> bool {
        if self.ethereum().is_none() {
            return false;
        }
        match self.request("eth_requestAccounts", None).await {
            Ok(accounts) => !parse_accounts(&accounts).is_empty(),
            Err(err) => {
                tracing::warn!(error = %err, "wallet refused account access");
                false
            }
        }
    }

    async fn current_account(&self) -> ProviderResult<Option<Address>> {
        Ok(self.accounts().await?.into_iter().next())
    }

    async fn connect(&self) -> ProviderResult<()> {
        self.request("eth_requestAccounts", None).await.map(|_| ())
    }

    async fn chain_id(&self) -> ProviderResult<u64> {
        let result = self.request("eth_chainId", None).await?;
        if let Some(n) = result.as_f64() {
            return Ok(n as u64);
        }
        let raw = result
            .as_string()
            .ok_or_else(|| ProviderError::new("provider returned a non-string chain id"))?;
        let parsed = match raw.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => raw.parse::<u64>(),
        };
        parsed.map_err(|_| ProviderError::new(format!("invalid chain id {raw:?}")))
    }

    async fn connect_button_state(&self) -> ConnectButtonState {
        let Some(ethereum) = self.ethereum() else {
            return ConnectButtonState {
                should_hide: true,
                account: None,
            };
        };

        if flag(&ethereum, "isNiftyWallet") || !flag(&ethereum, "isMetaMask") {
            return ConnectButtonState {
                should_hide: true,
                account: None,
            };
        }

        match self.accounts().await {
            Ok(accounts) if !accounts.is_empty() => ConnectButtonState {
                should_hide: true,
                account: accounts.first().copied(),
            },
            Ok(_) => ConnectButtonState::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read wallet accounts");
                ConnectButtonState::default()
            }
        }
    }

    async fn send_transaction(&self, params: &TxParams) -> SendResult<TxHash> {
        let params = to_js(params).map_err(SendError::Build)?;
        let result = self
            .request("eth_sendTransaction", Some(Array::of1(&params)))
            .await
            .map_err(SendError::Send)?;
        parse_hash(result).map_err(SendError::Send)
    }

    async fn call_contract_method(&self, call: ContractCall<'_>) -> SendResult<TxHash> {
        let promi_event = self.contract_send(&call).map_err(SendError::Build)?;
        transaction_hash_of(promi_event).await.map_err(SendError::Send)
    }

    async fn transaction_receipt(&self, hash: TxHash) -> ProviderResult<Option<TxReceipt>> {
        let result = self
            .request(
                "eth_getTransactionReceipt",
                Some(Array::of1(&JsValue::from_str(&hash.to_string()))),
            )
            .await?;
        if result.is_null() || result.is_undefined() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(result)
            .map(Some)
            .map_err(|e| ProviderError::new(e.to_string()))
    }

    fn on_accounts_changed(&self, listener: AccountsListener) -> ProviderResult<()> {
        let ethereum = self.require_ethereum()?;

        let closure = Closure::wrap(Box::new(move |accounts: JsValue| {
            listener(parse_accounts(&accounts));
        }) as Box<dyn Fn(JsValue)>);

        get_fn(&ethereum, "on")?
            .call2(&ethereum, &"accountsChanged".into(), closure.as_ref())
            .map_err(provider_error)?;

        closure.forget();
        Ok(())
    }
}
