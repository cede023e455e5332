// Path: crates/types/src/primitives/uint.rs

use crate::error::CodecError;

pub use alloy_primitives::U256;

/// Parses a base-10 digit string into a `U256`.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no separators. Redundant
/// leading zeros are allowed and dropped. Values above 2^256 - 1 are rejected.
pub fn parse_u256(raw: &str) -> Result<U256, CodecError> {
    let invalid = |reason| CodecError::InvalidNumber {
        input: raw.to_string(),
        reason,
    };
    if raw.is_empty() {
        return Err(invalid("empty input"));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("non-digit character"));
    }
    U256::from_str_radix(raw, 10).map_err(|_| invalid("exceeds 2^256 - 1"))
}

/// Formats a `U256` as its canonical decimal string.
pub fn format_u256(value: &U256) -> String {
    value.to_string()
}
