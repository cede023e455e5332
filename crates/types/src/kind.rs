// Path: crates/types/src/kind.rs

//! The closed set of kinds a mapping key or value can be declared with.

use crate::error::MappingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a mapping's key domain or value domain.
///
/// Chosen independently for keys and values when a mapping is created and fixed
/// for the mapping's whole lifetime.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    /// Unsigned 256-bit integer, canonically a decimal digit string.
    #[default]
    #[serde(alias = "uint256")]
    U256,
    /// Boolean.
    Bool,
    /// Arbitrary UTF-8 string.
    String,
    /// 32-byte address, canonically `0x` + 64 lowercase hex chars.
    Address,
    /// 32-byte fixed hash with the same encoding as `Address`.
    Bytes32,
}

impl MappingKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::U256,
        Self::Bool,
        Self::String,
        Self::Address,
        Self::Bytes32,
    ];

    /// The canonical name used in introspection and string conversion.
    pub fn name(self) -> &'static str {
        match self {
            Self::U256 => "u256",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Address => "address",
            Self::Bytes32 => "bytes32",
        }
    }

    /// Parses a kind name given for the key or value position of a constructor.
    ///
    /// Surrounding whitespace is ignored, matching is case-insensitive and
    /// `uint256` is accepted as an alias of `u256`.
    pub fn parse(name: &str, slot: Slot) -> Result<Self, MappingError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "u256" | "uint256" => Ok(Self::U256),
            "bool" => Ok(Self::Bool),
            "string" => Ok(Self::String),
            "address" => Ok(Self::Address),
            "bytes32" => Ok(Self::Bytes32),
            _ => Err(MappingError::UnsupportedKind {
                slot,
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The position a host value occupies when it is coerced.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// A mapping key.
    Key,
    /// A mapping value.
    Value,
    /// A plain argument to a native constructor such as `address`.
    Argument,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Key => write!(f, "key"),
            Slot::Value => write!(f, "value"),
            Slot::Argument => write!(f, "argument"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_lenient_about_case_and_whitespace() {
        assert_eq!(MappingKind::parse(" Address ", Slot::Key), Ok(MappingKind::Address));
        assert_eq!(MappingKind::parse("UINT256", Slot::Key), Ok(MappingKind::U256));
        assert_eq!(MappingKind::parse("bytes32", Slot::Value), Ok(MappingKind::Bytes32));
    }

    #[test]
    fn unknown_kind_names_the_position() {
        let err = MappingKind::parse("badtype", Slot::Key).unwrap_err();
        assert_eq!(err.to_string(), "unsupported mapping key type: badtype");

        let err = MappingKind::parse("int", Slot::Value).unwrap_err();
        assert_eq!(err.to_string(), "unsupported mapping value type: int");
    }

    #[test]
    fn names_round_trip_through_parse() {
        for kind in MappingKind::ALL {
            assert_eq!(MappingKind::parse(kind.name(), Slot::Value), Ok(kind));
        }
        assert_eq!(MappingKind::default(), MappingKind::U256);
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&MappingKind::Bytes32).unwrap();
        assert_eq!(json, "\"bytes32\"");
        let kind: MappingKind = serde_json::from_str("\"uint256\"").unwrap();
        assert_eq!(kind, MappingKind::U256);
    }
}
