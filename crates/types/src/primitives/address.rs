// Path: crates/types/src/primitives/address.rs

//! Defines the canonical `Address` and `Bytes32` scalars.
//!
//! Both are 32 bytes wide and share a single validation routine, so they accept
//! exactly the same inputs and fail with the same errors. They stay distinct types
//! so an address can never be passed where a hash is expected.

use super::fixed::fixed_hex_scalar;

fixed_hex_scalar!(
    /// An account address, represented as a 32-byte array.
    ///
    /// The canonical form is `0x` followed by 64 lowercase hex characters. Parsing is
    /// case-insensitive, so equality is case-insensitive on the original text.
    Address,
    "address",
    32
);

fixed_hex_scalar!(
    /// A fixed 32-byte hash, the payload of the `bytes32` mapping kind.
    Bytes32,
    "bytes32",
    32
);
