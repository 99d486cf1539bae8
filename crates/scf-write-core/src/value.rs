use alloy_primitives::U256;
use alloy_primitives::utils::parse_ether;

use crate::error::WriteError;

/// Convert a whole-unit amount (as typed into a `tx-value` input) to wei.
///
/// The multiplier is fixed at 10^18 regardless of the chain's native token.
pub fn to_minimal_units(input: &str) -> Result<U256, WriteError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(WriteError::InvalidValue(input.to_owned()));
    }
    parse_ether(trimmed).map_err(|_| WriteError::InvalidValue(input.to_owned()))
}

/// Value for a submission: absent or blank input means zero.
pub fn tx_value(input: Option<&str>) -> Result<U256, WriteError> {
    match input.map(str::trim) {
        Some(text) if !text.is_empty() => to_minimal_units(text),
        _ => Ok(U256::ZERO),
    }
}
