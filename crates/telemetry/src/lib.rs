// Path: crates/telemetry/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # TOS Telemetry
//!
//! Structured logging initialization for embedders of the TOS script host.
//! Library crates only emit `tracing` events; installing a subscriber is left to
//! the process that embeds them.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::{init_test_tracing, init_tracing};
