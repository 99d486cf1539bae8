use scf_wallet_bridge::ProviderError;
use std::fmt;

const ERROR_MARKER: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    #[error(
        "You connected to {wallet} chain in the wallet, but the current instance of Blockscout is for {expected} chain"
    )]
    ChainMismatch { wallet: String, expected: String },
    #[error("invalid transaction value {0:?}")]
    InvalidValue(String),
    #[error("invalid contract address {0:?}")]
    InvalidAddress(String),
    #[error("no ABI available for method \"{0}\"")]
    MissingAbi(String),
    #[error("no account is connected in the wallet")]
    NoAccount,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Human-readable part of a provider error message.
///
/// Providers wrap the useful text as `"...Error: <reason>"`; everything up to
/// and including the first marker is dropped.
pub fn format_error(error: impl fmt::Display) -> String {
    let message = error.to_string();
    match message.split_once(ERROR_MARKER) {
        Some((_, rest)) => rest.to_owned(),
        None => message,
    }
}
