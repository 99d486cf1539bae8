use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use scf_api_types::{ConnectButtonState, TxParams, TxReceipt};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error object surfaced by the wallet provider (EIP-1193 `{ code, message }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure of a send, split by whether anything reached the wallet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The request could not be built (unknown method, bad arguments).
    /// Nothing was sent.
    #[error(transparent)]
    Build(ProviderError),
    /// The wallet refused or failed the send.
    #[error(transparent)]
    Send(ProviderError),
}

pub type SendResult<T> = Result<T, SendError>;

/// Listener for the provider's `accountsChanged` event.
pub type AccountsListener = Box<dyn Fn(Vec<Address>)>;

/// Contract method invocation handed to the provider's contract library.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCall<'a> {
    pub abi: &'a Value,
    pub address: Address,
    pub method: &'a str,
    pub args: &'a [String],
    pub params: &'a TxParams,
}

/// Facade over the injected wallet provider.
///
/// Futures are `?Send`: provider handles are JS objects bound to the UI thread.
#[async_trait(?Send)]
pub trait WalletBridge {
    async fn is_wallet_enabled(&self) -> bool;
    async fn current_account(&self) -> ProviderResult<Option<Address>>;
    async fn connect(&self) -> ProviderResult<()>;
    async fn chain_id(&self) -> ProviderResult<u64>;
    async fn connect_button_state(&self) -> ConnectButtonState;
    /// Plain value transfer. Resolves once the transaction hash is known.
    async fn send_transaction(&self, params: &TxParams) -> SendResult<TxHash>;
    /// Contract method send. Resolves once the transaction hash is known.
    async fn call_contract_method(&self, call: ContractCall<'_>) -> SendResult<TxHash>;
    async fn transaction_receipt(&self, hash: TxHash) -> ProviderResult<Option<TxReceipt>>;
    /// Register for account changes for the rest of the page's lifetime.
    fn on_accounts_changed(&self, listener: AccountsListener) -> ProviderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_message() {
        let err = ProviderError::with_code(4001, "User denied transaction signature");
        assert_eq!(err.to_string(), "User denied transaction signature");
    }

    #[test]
    fn send_error_keeps_provider_message() {
        let err = SendError::Build(ProviderError::new("contract has no method \"mint\""));
        assert_eq!(err.to_string(), "contract has no method \"mint\"");
    }

    #[test]
    fn provider_error_decodes_partial_object() {
        let err: ProviderError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(err, ProviderError::new("boom"));
    }
}
