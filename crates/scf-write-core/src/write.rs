//! Write path for state-changing function forms.
//!
//! Steps: wallet enabled → tx value → chain id check → account → dispatch →
//! pending modal → receipt polling → success modal (or an error modal when
//! the receipt reports a revert). Each rejection ends the
//! submission with one notification.

use alloy_primitives::{Address, TxHash, U64, U256};
use scf_api_types::{FunctionDescriptor, TxParams, TxReceipt};
use scf_wallet_bridge::{ContractCall, SendError, SendResult, WalletBridge};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::error::{WriteError, format_error};
use crate::networks::network_display_name;
use crate::notify::{Notifier, REVERTED_MESSAGE, SUCCESS_TITLE, UNAUTHORIZED_TITLE};
use crate::poll::{Sleeper, wait_for_receipt};
use crate::value::tx_value;

pub const WALLET_NOT_ENABLED: &str = "You haven't approved the reading of account list from your MetaMask or MetaMask/Nifty wallet is locked or is not installed.";

/// Terminal state of one write submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    WalletDisabled,
    /// Rejected before or while preparing the send; carries the warning text.
    Rejected(String),
    /// The provider refused the send, or the mined transaction reverted;
    /// carries the error text.
    DispatchFailed(String),
    Confirmed { hash: TxHash, receipt: TxReceipt },
}

struct PreparedTx<'d> {
    from: Address,
    to: Address,
    value: U256,
    method: Option<(&'d Value, &'d str)>,
}

pub struct WriteFlow<'a, B: ?Sized, N: ?Sized, S: ?Sized> {
    bridge: &'a B,
    notifier: &'a N,
    sleeper: &'a S,
    config: &'a ControllerConfig,
}

impl<'a, B, N, S> WriteFlow<'a, B, N, S>
where
    B: WalletBridge + ?Sized,
    N: Notifier + ?Sized,
    S: Sleeper + ?Sized,
{
    pub fn new(bridge: &'a B, notifier: &'a N, sleeper: &'a S, config: &'a ControllerConfig) -> Self {
        Self {
            bridge,
            notifier,
            sleeper,
            config,
        }
    }

    pub async fn submit(&self, descriptor: &FunctionDescriptor) -> WriteOutcome {
        let name = descriptor.display_name();

        if !self.bridge.is_wallet_enabled().await {
            warn!(method = name, "wallet not enabled");
            self.notifier.show_warning(UNAUTHORIZED_TITLE, WALLET_NOT_ENABLED);
            return WriteOutcome::WalletDisabled;
        }

        let prepared = match self.prepare(descriptor).await {
            Ok(prepared) => prepared,
            Err(err) => return self.reject(name, &err),
        };

        let hash = match self.dispatch(descriptor, &prepared).await {
            Ok(hash) => hash,
            Err(SendError::Build(err)) => return self.reject(name, &WriteError::from(err)),
            Err(SendError::Send(err)) => {
                warn!(method = name, error = %err, "transaction dispatch failed");
                return self.fail(name, format_error(&err));
            }
        };

        info!(method = name, %hash, "transaction broadcast");
        self.notifier.show_pending(true, &hash);

        let receipt = wait_for_receipt(
            self.bridge,
            self.sleeper,
            hash,
            self.config.receipt_poll_interval(),
        )
        .await;

        if receipt.status == Some(U64::ZERO) {
            warn!(method = name, %hash, "transaction reverted");
            self.notifier.show_pending(false, &hash);
            return self.fail(name, REVERTED_MESSAGE.to_owned());
        }

        self.notifier.show_success(SUCCESS_TITLE, &hash, name);
        WriteOutcome::Confirmed { hash, receipt }
    }

    fn reject(&self, name: &str, err: &WriteError) -> WriteOutcome {
        let message = format_error(err);
        warn!(method = name, error = %err, "write rejected");
        self.notifier.show_warning(UNAUTHORIZED_TITLE, &message);
        WriteOutcome::Rejected(message)
    }

    fn fail(&self, name: &str, message: String) -> WriteOutcome {
        self.notifier.show_error(
            &format!("Error in sending transaction for method \"{name}\""),
            &message,
        );
        WriteOutcome::DispatchFailed(message)
    }

    async fn prepare<'d>(&self, descriptor: &'d FunctionDescriptor) -> Result<PreparedTx<'d>, WriteError> {
        let value = tx_value(descriptor.tx_value.as_deref())?;

        let wallet_chain = self.bridge.chain_id().await?;
        if wallet_chain != descriptor.chain_id {
            return Err(WriteError::ChainMismatch {
                wallet: network_display_name(wallet_chain),
                expected: network_display_name(descriptor.chain_id),
            });
        }

        let from = self.bridge.current_account().await?.ok_or(WriteError::NoAccount)?;
        debug!(%from, chain_id = wallet_chain, "resolved sender");

        let to = descriptor
            .contract_address
            .trim()
            .parse::<Address>()
            .map_err(|_| WriteError::InvalidAddress(descriptor.contract_address.clone()))?;

        let method = match descriptor.name.as_deref() {
            Some(name) if !name.is_empty() => {
                let abi = descriptor
                    .effective_abi()
                    .ok_or_else(|| WriteError::MissingAbi(name.to_owned()))?;
                Some((abi, name))
            }
            _ => None,
        };

        Ok(PreparedTx {
            from,
            to,
            value,
            method,
        })
    }

    async fn dispatch(&self, descriptor: &FunctionDescriptor, prepared: &PreparedTx<'_>) -> SendResult<TxHash> {
        match prepared.method {
            Some((abi, method)) => {
                let params = TxParams {
                    from: prepared.from,
                    to: None,
                    value: prepared.value,
                };
                self.bridge
                    .call_contract_method(ContractCall {
                        abi,
                        address: prepared.to,
                        method,
                        args: &descriptor.args,
                        params: &params,
                    })
                    .await
            }
            None => {
                let params = TxParams {
                    from: prepared.from,
                    to: Some(prepared.to),
                    value: prepared.value,
                };
                self.bridge.send_transaction(&params).await
            }
        }
    }
}
