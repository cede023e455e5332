// Path: crates/types/src/primitives/mod.rs
//! Canonical scalar codec.
//!
//! Every scalar that can be stored in a mapping has exactly one canonical textual
//! form. That form is what a mapping uses as its internal key, so two host values
//! refer to the same slot if and only if their canonical forms are byte-equal.

mod address;
mod fixed;
mod uint;

pub use address::{Address, Bytes32};
pub use fixed::parse_fixed_hex;
pub use uint::{format_u256, parse_u256, U256};
