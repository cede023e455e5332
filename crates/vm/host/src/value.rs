// Path: crates/vm/host/src/value.rs

//! The dynamically typed values scripts pass across the native boundary.

use crate::userdata::UserData;
use std::fmt;
use std::rc::Rc;
use tos_types::{Address, U256};

/// A host runtime value.
///
/// Numbers are unsigned 256-bit integers. Addresses are a first-class kind that
/// introspection names distinctly from strings.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// An unsigned 256-bit integer.
    Number(U256),
    /// An immutable UTF-8 string.
    String(Rc<str>),
    /// A canonical address.
    Address(Address),
    /// An opaque handle to a native payload.
    UserData(UserData),
}

impl Value {
    /// The name reported by the runtime's `type()` introspection.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Address(_) => "address",
            Value::UserData(_) => "userdata",
        }
    }

    /// Returns true unless the value is `nil` or `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&U256> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Value::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_userdata(&self) -> Option<&UserData> {
        match self {
            Value::UserData(ud) => Some(ud),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Address(a), Value::Address(b)) => a == b,
            (Value::UserData(a), Value::UserData(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Raw string conversion, ignoring any metatable.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Address(a) => write!(f, "{}", a),
            Value::UserData(ud) => write!(f, "userdata: {:p}", ud.as_ptr()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(U256::from(n))
    }
}

impl From<U256> for Value {
    fn from(n: U256) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<Address> for Value {
    fn from(a: Address) -> Self {
        Value::Address(a)
    }
}

impl From<UserData> for Value {
    fn from(ud: UserData) -> Self {
        Value::UserData(ud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_not_strings() {
        let raw = format!("0x{}", "1".repeat(64));
        let addr = Value::from(Address::parse(&raw).unwrap());
        assert_eq!(addr.type_name(), "address");
        assert_ne!(addr, Value::from(raw.as_str()));
        assert_eq!(addr.to_string(), raw);
    }

    #[test]
    fn scalar_equality_is_structural() {
        assert_eq!(Value::from(7u64), Value::Number(U256::from(7u64)));
        assert_eq!(Value::from("abc"), Value::from("abc".to_string()));
        assert_ne!(Value::from(1u64), Value::from("1"));
        assert_ne!(Value::Nil, Value::Bool(false));
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::from(0u64).is_truthy());
        assert!(Value::from("").is_truthy());
    }
}
