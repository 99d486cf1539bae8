use alloy_primitives::{Address, TxHash, U64, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FunctionAction {
    Read,
    Write,
}

impl FromStr for FunctionAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown function action: {0:?}")]
pub struct UnknownAction(pub String);

/// Contract kind carried by the functions panel (`data-type`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContractType {
    Proxy,
    #[default]
    Regular,
}

impl ContractType {
    pub fn from_attr(value: &str) -> Self {
        if value.trim() == "proxy" {
            Self::Proxy
        } else {
            Self::Regular
        }
    }
}

/// Query parameters for the functions panel fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelQuery {
    pub hash: String,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub action: String,
}

impl PanelQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("hash", self.hash.clone()),
            ("type", self.contract_type.clone()),
            ("action", self.action.clone()),
        ]
    }
}

/// Query parameters for a read-function result fragment.
///
/// Arguments are encoded the way jQuery serialises arrays (`args[]=a&args[]=b`),
/// which is what the backend expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadQuery {
    pub function_name: String,
    pub method_id: String,
    pub args: Vec<String>,
}

impl ReadQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.args.len() + 2);
        pairs.push(("function_name", self.function_name.clone()));
        pairs.push(("method_id", self.method_id.clone()));
        pairs.extend(self.args.iter().map(|arg| ("args[]", arg.clone())));
        pairs
    }
}

/// Split a form's `function_input` values into call arguments and the
/// transaction value.
///
/// Each item is `(is_tx_value, value)`. Inputs flagged as carrying the value
/// never become arguments, and only the first flagged input is used.
pub fn split_function_inputs<I>(inputs: I) -> (Vec<String>, Option<String>)
where
    I: IntoIterator<Item = (bool, String)>,
{
    let mut args = Vec::new();
    let mut tx_value = None;
    for (is_tx_value, value) in inputs {
        if !is_tx_value {
            args.push(value);
        } else if tx_value.is_none() {
            tx_value = Some(value);
        }
    }
    (args, tx_value)
}

/// Everything a write submission needs, read from one function form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDescriptor {
    pub name: Option<String>,
    pub method_id: Option<String>,
    /// Ordered inputs, excluding the transaction-value input.
    pub args: Vec<String>,
    /// Raw text of the first `tx-value` input, whole native units.
    pub tx_value: Option<String>,
    pub contract_address: String,
    pub implementation_abi: Option<Value>,
    pub contract_abi: Option<Value>,
    pub contract_type: ContractType,
    pub chain_id: u64,
}

impl FunctionDescriptor {
    /// ABI to call through: proxies use the implementation ABI.
    pub fn effective_abi(&self) -> Option<&Value> {
        match self.contract_type {
            ContractType::Proxy => self.implementation_abi.as_ref(),
            ContractType::Regular => self.contract_abi.as_ref(),
        }
    }

    /// Function name used in notifications; empty for plain transfers.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn is_method_call(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Send parameters, serialised in the EIP-1193 `eth_sendTransaction` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxParams {
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    pub value: U256,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub status: Option<U64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectButtonState {
    pub should_hide: bool,
    #[serde(default)]
    pub account: Option<Address>,
}

/// Which connection sections of the panel are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionView {
    /// No usable wallet: prompt shown, connect button hidden.
    NoWallet,
    ConnectAvailable,
    Connected(Address),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub connect_to: bool,
    pub connect: bool,
    pub connected_to: bool,
}

impl ConnectionView {
    pub fn from_button_state(state: &ConnectButtonState) -> Self {
        match (state.should_hide, state.account) {
            (true, Some(account)) => Self::Connected(account),
            (true, None) => Self::NoWallet,
            (false, _) => Self::ConnectAvailable,
        }
    }

    pub fn from_accounts(accounts: &[Address]) -> Self {
        match accounts.first() {
            Some(account) => Self::Connected(*account),
            None => Self::ConnectAvailable,
        }
    }

    pub fn visibility(&self) -> SectionVisibility {
        match self {
            Self::NoWallet => SectionVisibility {
                connect_to: true,
                connect: false,
                connected_to: false,
            },
            Self::ConnectAvailable => SectionVisibility {
                connect_to: true,
                connect: true,
                connected_to: false,
            },
            Self::Connected(_) => SectionVisibility {
                connect_to: false,
                connect: true,
                connected_to: true,
            },
        }
    }

    pub fn account(&self) -> Option<Address> {
        match self {
            Self::Connected(account) => Some(*account),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use serde_json::json;

    const ACCOUNT: Address = address!("0x00000000000000000000000000000000000000aa");

    #[test]
    fn read_query_keeps_argument_order() {
        let query = ReadQuery {
            function_name: "balanceOf".to_owned(),
            method_id: "70a08231".to_owned(),
            args: vec!["0x01".to_owned(), "7".to_owned()],
        };

        assert_eq!(
            query.pairs(),
            vec![
                ("function_name", "balanceOf".to_owned()),
                ("method_id", "70a08231".to_owned()),
                ("args[]", "0x01".to_owned()),
                ("args[]", "7".to_owned()),
            ]
        );
    }

    #[test]
    fn tx_value_inputs_are_not_arguments() {
        let (args, tx_value) = split_function_inputs([
            (false, "0xabc".to_owned()),
            (true, "1.5".to_owned()),
            (false, "7".to_owned()),
            (true, "9".to_owned()),
        ]);

        assert_eq!(args, vec!["0xabc".to_owned(), "7".to_owned()]);
        assert_eq!(tx_value, Some("1.5".to_owned()));
    }

    #[test]
    fn inputs_without_tx_value_have_no_value() {
        let (args, tx_value) = split_function_inputs([(false, "a".to_owned())]);
        assert_eq!(args, vec!["a".to_owned()]);
        assert_eq!(tx_value, None);
    }

    #[test]
    fn proxy_panel_prefers_implementation_abi() {
        let descriptor = FunctionDescriptor {
            implementation_abi: Some(json!([{"name": "impl"}])),
            contract_abi: Some(json!([{"name": "parent"}])),
            contract_type: ContractType::from_attr("proxy"),
            ..Default::default()
        };
        assert_eq!(descriptor.effective_abi(), Some(&json!([{"name": "impl"}])));

        let regular = FunctionDescriptor {
            contract_type: ContractType::from_attr("regular"),
            ..descriptor
        };
        assert_eq!(regular.effective_abi(), Some(&json!([{"name": "parent"}])));
    }

    #[test]
    fn empty_name_is_plain_transfer() {
        let descriptor = FunctionDescriptor {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!descriptor.is_method_call());
        assert_eq!(descriptor.display_name(), "");
    }

    #[test]
    fn connection_view_from_button_state() {
        let connected = ConnectButtonState {
            should_hide: true,
            account: Some(ACCOUNT),
        };
        assert_eq!(ConnectionView::from_button_state(&connected), ConnectionView::Connected(ACCOUNT));

        let no_wallet = ConnectButtonState {
            should_hide: true,
            account: None,
        };
        let view = ConnectionView::from_button_state(&no_wallet);
        assert_eq!(view, ConnectionView::NoWallet);
        assert!(!view.visibility().connect);

        let available = ConnectButtonState::default();
        assert_eq!(
            ConnectionView::from_button_state(&available).visibility(),
            SectionVisibility {
                connect_to: true,
                connect: true,
                connected_to: false
            }
        );
    }

    #[test]
    fn connection_view_from_accounts() {
        assert_eq!(ConnectionView::from_accounts(&[]), ConnectionView::ConnectAvailable);

        let view = ConnectionView::from_accounts(&[ACCOUNT]);
        assert_eq!(view.account(), Some(ACCOUNT));
        assert!(view.visibility().connected_to);
        assert!(!view.visibility().connect_to);
    }

    #[test]
    fn tx_params_omit_missing_recipient() {
        let params = TxParams {
            from: ACCOUNT,
            to: None,
            value: U256::from(16u64),
        };
        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(encoded["value"], json!("0x10"));
        assert!(encoded.get("to").is_none());
    }

    #[test]
    fn receipt_decodes_provider_json() {
        let receipt: TxReceipt = serde_json::from_value(json!({
            "transactionHash": "0x00000000000000000000000000000000000000000000000000000000000000ff",
            "blockNumber": "0x10",
            "status": "0x1",
            "gasUsed": "0x5208"
        }))
        .unwrap();
        assert_eq!(receipt.block_number, Some(U64::from(16u64)));
        assert_eq!(receipt.status, Some(U64::from(1u64)));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!("write".parse::<FunctionAction>(), Ok(FunctionAction::Write));
        let err = "call".parse::<FunctionAction>().unwrap_err();
        assert_eq!(err.to_string(), "unknown function action: \"call\"");
    }
}
