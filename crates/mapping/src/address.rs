// Path: crates/mapping/src/address.rs

//! The global `address` constructor.

use crate::coerce::to_address;
use tos_types::config::MappingConfig;
use tos_types::error::{MappingError, RuntimeError};
use tos_types::kind::Slot;
use tos_vm_host::{Args, NativeFn, Runtime, Value};

/// Installs the address constructor as a global function.
pub fn open_address(runtime: &mut Runtime, config: &MappingConfig) {
    runtime.register_global(NativeFn::new(&config.address_constructor, address));
}

/// `address(raw)`: canonicalizes a hex string (or an existing address) into an
/// address value.
fn address(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let raw = args.check_any(1)?;
    match to_address(raw, Slot::Argument) {
        Ok(addr) => Ok(Value::Address(addr)),
        Err(MappingError::TypeMismatch { .. }) => Err(args.wrong_type(1, "string", raw)),
        Err(e) => Err(args.error(1, e)),
    }
}
