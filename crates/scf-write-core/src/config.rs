use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_RECEIPT_POLL_MS: u64 = 5_000;

/// Tunables read from the panel anchor's `data-controller-config` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub receipt_poll_interval_ms: u64,
    pub address_path: String,
    pub tx_path: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_MS,
            address_path: "/address/".to_owned(),
            tx_path: "/tx/".to_owned(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }

    pub fn address_link(&self, account: &Address) -> String {
        format!("{}{account}", self.address_path)
    }

    pub fn tx_link(&self, hash: &TxHash) -> String {
        format!("{}{hash}", self.tx_path)
    }
}
