// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # TOS Test Utilities
//!
//! Shared assertions, canonical fixtures and deterministic randomness for the
//! workspace's tests.

pub mod assertions;
pub mod fixtures;
pub mod randomness;
