//! Controller logic for the smart-contract functions panel.
//!
//! Nothing here touches the DOM: the browser crate supplies a
//! [`WalletBridge`](scf_wallet_bridge::WalletBridge), a [`Notifier`] and a
//! [`Sleeper`] and drives [`WriteFlow`] from its submit handlers.

pub mod config;
pub mod error;
pub mod networks;
pub mod notify;
pub mod poll;
pub mod value;
pub mod write;

pub use config::ControllerConfig;
pub use error::{WriteError, format_error};
pub use networks::network_display_name;
pub use notify::Notifier;
pub use poll::{Sleeper, wait_for_receipt};
pub use value::to_minimal_units;
pub use write::{WriteFlow, WriteOutcome};
