// Path: crates/mapping/src/mapping.rs

//! The typed mapping container.

use crate::coerce::{coerce_key, coerce_value, zero_value, MappingValue};
use std::collections::HashMap;
use std::fmt;
use tos_types::error::MappingError;
use tos_types::MappingKind;
use tos_vm_host::Value;

/// Keyed access to a typed store, addressed by host values.
///
/// Keys and values are coerced onto the store's declared kinds before use, and a
/// failed coercion leaves the store untouched. There is no way to walk the
/// stored entries; `Display` describes the store's shape only.
pub trait TypedStorage: fmt::Display {
    /// Reads the value at `key`, or the value kind's zero if it was never written.
    fn get(&self, key: &Value) -> Result<MappingValue, MappingError>;

    /// Writes `value` at `key`.
    fn set(&mut self, key: &Value, value: &Value) -> Result<(), MappingError>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &Value) -> Result<(), MappingError>;

    /// Returns true if `key` has been written and not deleted since.
    fn has(&self, key: &Value) -> Result<bool, MappingError>;
}

/// An associative container whose key and value kinds are fixed at creation.
///
/// Entries are keyed by the canonical string of the coerced key, so host values
/// that denote the same scalar (`0xAB..` and `0xab..`, `7` and `"007"`) share a
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedMapping {
    key_kind: MappingKind,
    value_kind: MappingKind,
    entries: HashMap<String, MappingValue>,
}

impl TypedMapping {
    pub fn new(key_kind: MappingKind, value_kind: MappingKind) -> Self {
        Self {
            key_kind,
            value_kind,
            entries: HashMap::new(),
        }
    }

    pub fn key_kind(&self) -> MappingKind {
        self.key_kind
    }

    pub fn value_kind(&self) -> MappingKind {
        self.value_kind
    }
}

impl Default for TypedMapping {
    fn default() -> Self {
        Self::new(MappingKind::default(), MappingKind::default())
    }
}

impl TypedStorage for TypedMapping {
    fn get(&self, key: &Value) -> Result<MappingValue, MappingError> {
        let key = coerce_key(key, self.key_kind)?;
        Ok(self
            .entries
            .get(&key)
            .cloned()
            .unwrap_or_else(|| zero_value(self.value_kind)))
    }

    fn set(&mut self, key: &Value, value: &Value) -> Result<(), MappingError> {
        let key = coerce_key(key, self.key_kind)?;
        let value = coerce_value(value, self.value_kind)?;
        tracing::trace!(target: "mapping", key = %key, "set");
        self.entries.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &Value) -> Result<(), MappingError> {
        let key = coerce_key(key, self.key_kind)?;
        if self.entries.remove(&key).is_some() {
            tracing::trace!(target: "mapping", key = %key, "delete");
        }
        Ok(())
    }

    fn has(&self, key: &Value) -> Result<bool, MappingError> {
        let key = coerce_key(key, self.key_kind)?;
        Ok(self.entries.contains_key(&key))
    }
}

impl fmt::Display for TypedMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mapping<{}=>{}>", self.key_kind, self.value_kind)
    }
}
