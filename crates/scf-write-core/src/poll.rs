use alloy_primitives::TxHash;
use async_trait::async_trait;
use scf_api_types::TxReceipt;
use scf_wallet_bridge::WalletBridge;
use std::time::Duration;
use tracing::{debug, warn};

/// Timer used between receipt polls.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Poll the wallet for `hash` every `interval` until a receipt shows up.
///
/// There is no attempt bound. Polls are serial, so the loop ends exactly once,
/// on the first non-null receipt. Failed queries are logged and retried on the
/// next tick.
pub async fn wait_for_receipt<B, S>(
    bridge: &B,
    sleeper: &S,
    hash: TxHash,
    interval: Duration,
) -> TxReceipt
where
    B: WalletBridge + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut attempt: u64 = 0;
    loop {
        sleeper.sleep(interval).await;
        attempt += 1;

        match bridge.transaction_receipt(hash).await {
            Ok(Some(receipt)) => {
                debug!(%hash, attempt, "transaction receipt observed");
                return receipt;
            }
            Ok(None) => debug!(%hash, attempt, "receipt not yet available"),
            Err(err) => warn!(%hash, attempt, error = %err, "receipt query failed"),
        }
    }
}
