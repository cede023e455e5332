// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # TOS Storage Types
//!
//! This crate is the foundational library for TOS typed storage. It contains the
//! canonical scalar codec (addresses, fixed 32-byte hashes and unsigned 256-bit
//! integers), the closed set of mapping kinds, the configuration objects, and the
//! error types shared by every other crate in the workspace.
//!
//! ## Architectural Role
//!
//! `tos-types` knows nothing about the host runtime. The host value model lives in
//! `tos-vm-host` and the coercion from host values onto the canonical forms defined
//! here lives in `tos-mapping`. Keeping the codec free of host concerns means the
//! validation rules have exactly one definition.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::CodecError> = std::result::Result<T, E>;

/// Configuration for the mapping library and the `address` constructor.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// The closed set of key/value kinds a mapping can be declared with.
pub mod kind;
/// Canonical scalar codec: `Address`, `Bytes32` and unsigned 256-bit integers.
pub mod primitives;

pub use kind::MappingKind;
pub use primitives::{Address, Bytes32, U256};
