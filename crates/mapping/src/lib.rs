// Path: crates/mapping/src/lib.rs
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

//! # TOS Typed Mappings
//!
//! Contract-style storage for scripts: a `mapping` module whose containers have a
//! key kind and a value kind fixed at creation, and a global `address`
//! constructor. Unwritten slots read as the value kind's zero, keys are compared
//! by their canonical form, and containers cannot be enumerated.
//!
//! ```ignore
//! let mut rt = Runtime::new();
//! tos_mapping::open_libs(&mut rt, &MappingConfig::default())?;
//! let m = rt.call("mapping", "new", &[Value::from("address"), Value::from("u256")])?;
//! ```

/// The global `address` constructor.
pub mod address;
/// Coercion of host values onto mapping kinds.
pub mod coerce;
/// The typed mapping container.
pub mod mapping;
/// The `mapping` native module.
pub mod module;

pub use address::open_address;
pub use coerce::{coerce_key, coerce_value, zero_value, MappingValue};
pub use mapping::{TypedMapping, TypedStorage};
pub use module::open_mapping;

use tos_types::config::MappingConfig;
use tos_types::error::ConfigError;
use tos_vm_host::Runtime;

/// Installs the mapping module and the address constructor into `runtime`.
pub fn open_libs(runtime: &mut Runtime, config: &MappingConfig) -> Result<(), ConfigError> {
    config.validate()?;
    open_mapping(runtime, config);
    open_address(runtime, config);
    tracing::info!(
        target: "mapping",
        module = %config.module_name,
        constructor = %config.address_constructor,
        "typed storage libraries installed"
    );
    Ok(())
}
