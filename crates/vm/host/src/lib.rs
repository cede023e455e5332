// Path: crates/vm/host/src/lib.rs
#![forbid(unsafe_code)]
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

//! # TOS Script Host
//!
//! The native boundary of the script runtime: the host value model, native
//! callables, opaque userdata handles and the metatables that attach index,
//! new-index and tostring behaviour to them.
//!
//! Script-facing libraries (such as `tos-mapping`) are installed by registering
//! global functions, module namespaces and type metatables on a [`Runtime`].

/// Native callables and their argument view.
pub mod native;
/// Registration and operator dispatch.
pub mod runtime;
/// Opaque handles and type metatables.
pub mod userdata;
/// The host value model.
pub mod value;

pub use native::{Args, NativeFn};
pub use runtime::Runtime;
pub use userdata::{Metatable, UserData};
pub use value::Value;
