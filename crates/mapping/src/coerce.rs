// Path: crates/mapping/src/coerce.rs

//! Coercion of dynamically typed host values onto the canonical mapping kinds.
//!
//! Keys and values go through the same rules. A key is reduced to the canonical
//! string that identifies its slot; a value is reduced to a [`MappingValue`].

use tos_types::error::{CodecError, MappingError};
use tos_types::kind::Slot;
use tos_types::primitives::{format_u256, parse_u256};
use tos_types::{Address, Bytes32, MappingKind, U256};
use tos_vm_host::Value;

/// A canonical value of one [`MappingKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingValue {
    /// Value of a `u256` mapping.
    U256(U256),
    /// Value of a `bool` mapping.
    Bool(bool),
    /// Value of a `string` mapping.
    String(String),
    /// Value of an `address` mapping.
    Address(Address),
    /// Value of a `bytes32` mapping.
    Bytes32(Bytes32),
}

impl MappingValue {
    pub fn kind(&self) -> MappingKind {
        match self {
            Self::U256(_) => MappingKind::U256,
            Self::Bool(_) => MappingKind::Bool,
            Self::String(_) => MappingKind::String,
            Self::Address(_) => MappingKind::Address,
            Self::Bytes32(_) => MappingKind::Bytes32,
        }
    }

    /// Converts back into a host value.
    ///
    /// `bytes32` has no host kind of its own and is handed back as its canonical
    /// hex string.
    pub fn into_host(self) -> Value {
        match self {
            Self::U256(n) => Value::Number(n),
            Self::Bool(b) => Value::Bool(b),
            Self::String(s) => Value::from(s),
            Self::Address(a) => Value::Address(a),
            Self::Bytes32(h) => Value::from(h.to_hex()),
        }
    }
}

/// The value a mapping of kind `kind` reports for a slot that was never written.
pub fn zero_value(kind: MappingKind) -> MappingValue {
    match kind {
        MappingKind::U256 => MappingValue::U256(U256::ZERO),
        MappingKind::Bool => MappingValue::Bool(false),
        MappingKind::String => MappingValue::String(String::new()),
        MappingKind::Address => MappingValue::Address(Address::ZERO),
        MappingKind::Bytes32 => MappingValue::Bytes32(Bytes32::ZERO),
    }
}

/// Reduces `value` to the canonical key string of a `kind` mapping.
///
/// Bool keys become `"0"`/`"1"`, numbers their decimal digits and the hex kinds
/// their lowercase `0x` form, so differently spelled host values that denote
/// the same scalar land in the same slot.
pub fn coerce_key(value: &Value, kind: MappingKind) -> Result<String, MappingError> {
    let slot = Slot::Key;
    match kind {
        MappingKind::U256 => to_u256(value, slot).map(|n| format_u256(&n)),
        MappingKind::Bool => match value {
            Value::Bool(true) => Ok("1".to_string()),
            Value::Bool(false) => Ok("0".to_string()),
            other => Err(mismatch(slot, kind, other)),
        },
        MappingKind::String => match value {
            Value::String(s) => Ok(s.to_string()),
            other => Err(mismatch(slot, kind, other)),
        },
        MappingKind::Address => to_address(value, slot).map(|a| a.to_hex()),
        MappingKind::Bytes32 => to_bytes32(value, slot).map(|h| h.to_hex()),
    }
}

/// Reduces `value` to a canonical value of a `kind` mapping.
pub fn coerce_value(value: &Value, kind: MappingKind) -> Result<MappingValue, MappingError> {
    let slot = Slot::Value;
    match kind {
        MappingKind::U256 => to_u256(value, slot).map(MappingValue::U256),
        MappingKind::Bool => match value {
            Value::Bool(b) => Ok(MappingValue::Bool(*b)),
            other => Err(mismatch(slot, kind, other)),
        },
        MappingKind::String => match value {
            Value::String(s) => Ok(MappingValue::String(s.to_string())),
            other => Err(mismatch(slot, kind, other)),
        },
        MappingKind::Address => to_address(value, slot).map(MappingValue::Address),
        MappingKind::Bytes32 => to_bytes32(value, slot).map(MappingValue::Bytes32),
    }
}

/// Accepts a host string or an existing address. Shared with the `address`
/// constructor.
pub(crate) fn to_address(value: &Value, slot: Slot) -> Result<Address, MappingError> {
    match value {
        Value::Address(a) => Ok(*a),
        Value::String(s) => Address::parse(s).map_err(|e| codec(slot, e)),
        other => Err(mismatch(slot, MappingKind::Address, other)),
    }
}

fn to_u256(value: &Value, slot: Slot) -> Result<U256, MappingError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::String(s) => parse_u256(s).map_err(|e| codec(slot, e)),
        other => Err(mismatch(slot, MappingKind::U256, other)),
    }
}

fn to_bytes32(value: &Value, slot: Slot) -> Result<Bytes32, MappingError> {
    match value {
        Value::String(s) => Bytes32::parse(s).map_err(|e| codec(slot, e)),
        other => Err(mismatch(slot, MappingKind::Bytes32, other)),
    }
}

fn mismatch(slot: Slot, kind: MappingKind, got: &Value) -> MappingError {
    MappingError::TypeMismatch {
        slot,
        expected: kind.name(),
        got: got.type_name(),
    }
}

fn codec(slot: Slot, source: CodecError) -> MappingError {
    MappingError::Codec { slot, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tos_test_utils::fixtures::{ADDR_20_BYTES, ADDR_A_LOWER, ADDR_A_UPPER, ZERO_HEX};
    use tos_test_utils::{assert_canonical_hex, assert_err};

    #[test]
    fn u256_keys_accept_numbers_and_decimal_strings() {
        assert_eq!(coerce_key(&Value::from(42u64), MappingKind::U256).unwrap(), "42");
        assert_eq!(coerce_key(&Value::from("0042"), MappingKind::U256).unwrap(), "42");
        assert_eq!(coerce_key(&Value::from("0"), MappingKind::U256).unwrap(), "0");
    }

    #[test]
    fn u256_rejects_garbage_and_other_types() {
        let err = assert_err!(coerce_key(&Value::from("abc"), MappingKind::U256));
        assert!(matches!(
            err,
            MappingError::Codec {
                slot: Slot::Key,
                source: CodecError::InvalidNumber { .. }
            }
        ));

        let err = assert_err!(coerce_value(&Value::Bool(true), MappingKind::U256));
        assert_eq!(
            err,
            MappingError::TypeMismatch {
                slot: Slot::Value,
                expected: "u256",
                got: "boolean"
            }
        );
    }

    #[test]
    fn bool_keys_are_zero_and_one() {
        assert_eq!(coerce_key(&Value::Bool(true), MappingKind::Bool).unwrap(), "1");
        assert_eq!(coerce_key(&Value::Bool(false), MappingKind::Bool).unwrap(), "0");
        let err = assert_err!(coerce_key(&Value::from(1u64), MappingKind::Bool));
        assert_eq!(err.to_string(), "expected bool key, got number");
    }

    #[test]
    fn strings_pass_through_untouched() {
        let raw = "  Mixed Case  ";
        assert_eq!(coerce_key(&Value::from(raw), MappingKind::String).unwrap(), raw);
        assert_eq!(
            coerce_value(&Value::from(""), MappingKind::String).unwrap(),
            MappingValue::String(String::new())
        );
        assert!(coerce_value(&Value::Nil, MappingKind::String).is_err());
    }

    #[test]
    fn address_keys_are_case_insensitive() {
        let upper = coerce_key(&Value::from(ADDR_A_UPPER), MappingKind::Address).unwrap();
        let lower = coerce_key(&Value::from(ADDR_A_LOWER), MappingKind::Address).unwrap();
        assert_eq!(upper, lower);
        assert_canonical_hex!(upper);

        let addr = Address::parse(ADDR_A_UPPER).unwrap();
        assert_eq!(
            coerce_key(&Value::Address(addr), MappingKind::Address).unwrap(),
            ADDR_A_LOWER
        );
    }

    #[test]
    fn malformed_hex_surfaces_the_codec_error() {
        let err = assert_err!(coerce_key(&Value::from(ADDR_20_BYTES), MappingKind::Address));
        assert_eq!(err.to_string(), "expected address with 64 hex chars, got 40");

        let err = assert_err!(coerce_value(&Value::from("1234"), MappingKind::Bytes32));
        assert_eq!(err.slot(), Some(Slot::Value));
        assert_eq!(err.to_string(), "expected bytes32 with 0x prefix");
    }

    #[test]
    fn bytes32_only_accepts_strings() {
        let addr = Address::parse(ADDR_A_LOWER).unwrap();
        let err = assert_err!(coerce_key(&Value::Address(addr), MappingKind::Bytes32));
        assert!(matches!(err, MappingError::TypeMismatch { got: "address", .. }));
    }

    #[test]
    fn zero_values_convert_to_host_zeros() {
        assert_eq!(zero_value(MappingKind::U256).into_host(), Value::from(0u64));
        assert_eq!(zero_value(MappingKind::Bool).into_host(), Value::Bool(false));
        assert_eq!(zero_value(MappingKind::String).into_host(), Value::from(""));
        assert_eq!(
            zero_value(MappingKind::Address).into_host(),
            Value::Address(Address::ZERO)
        );
        assert_eq!(zero_value(MappingKind::Bytes32).into_host(), Value::from(ZERO_HEX));
        for kind in MappingKind::ALL {
            assert_eq!(zero_value(kind).kind(), kind);
        }
    }
}
