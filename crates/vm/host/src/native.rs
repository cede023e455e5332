// Path: crates/vm/host/src/native.rs

//! Native callables and the positional argument view they receive.

use crate::runtime::Runtime;
use crate::userdata::UserData;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;
use tos_types::error::{ArgumentError, RuntimeError};

/// The signature every native callable implements.
pub type NativeFnInner = dyn Fn(&Runtime, &Args<'_>) -> Result<Value, RuntimeError>;

/// A named native function that scripts can call.
#[derive(Clone)]
pub struct NativeFn {
    name: String,
    func: Rc<NativeFnInner>,
}

impl NativeFn {
    pub fn new(
        name: impl Into<String>,
        f: impl Fn(&Runtime, &Args<'_>) -> Result<Value, RuntimeError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function with `args`, attributing argument errors to its name.
    pub fn call(&self, runtime: &Runtime, args: &[Value]) -> Result<Value, RuntimeError> {
        (self.func)(runtime, &Args::new(&self.name, args))
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native-fn {}>", self.name)
    }
}

/// The arguments of one native call, addressed by 1-based position.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    function: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(function: &'a str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    /// The number of arguments actually passed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn function(&self) -> &'a str {
        self.function
    }

    /// The argument at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<&'a Value> {
        position.checked_sub(1).and_then(|i| self.values.get(i))
    }

    /// Requires an argument of any type at `position`.
    pub fn check_any(&self, position: usize) -> Result<&'a Value, RuntimeError> {
        self.get(position)
            .ok_or_else(|| self.error(position, ArgumentError::Missing))
    }

    /// Requires a string argument at `position`.
    pub fn check_string(&self, position: usize) -> Result<&'a str, RuntimeError> {
        let value = self.check_any(position)?;
        value
            .as_str()
            .ok_or_else(|| self.wrong_type(position, "string", value))
    }

    /// Requires a userdata argument at `position`.
    pub fn check_userdata(&self, position: usize) -> Result<&'a UserData, RuntimeError> {
        let value = self.check_any(position)?;
        value
            .as_userdata()
            .ok_or_else(|| self.wrong_type(position, "userdata", value))
    }

    /// Builds a `BadArgument` error for `position`.
    pub fn error(&self, position: usize, source: impl Into<ArgumentError>) -> RuntimeError {
        RuntimeError::BadArgument {
            position,
            function: self.function.to_string(),
            source: source.into(),
        }
    }

    /// Builds a `BadArgument` error stating what type was expected at `position`.
    pub fn wrong_type(&self, position: usize, expected: &'static str, got: &Value) -> RuntimeError {
        self.error(
            position,
            ArgumentError::WrongType {
                expected,
                got: got.type_name(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tos_types::error::MappingError;
    use tos_types::kind::Slot;

    #[test]
    fn positions_are_one_based() {
        let values = [Value::from("a"), Value::from(2u64)];
        let args = Args::new("f", &values);
        assert_eq!(args.len(), 2);
        assert!(args.get(0).is_none());
        assert_eq!(args.check_string(1).unwrap(), "a");
        assert_eq!(args.get(2), Some(&Value::from(2u64)));
        assert!(args.get(3).is_none());
    }

    #[test]
    fn missing_and_mistyped_arguments_name_the_position() {
        let values = [Value::from(1u64)];
        let args = Args::new("new", &values);

        let err = args.check_string(1).unwrap_err();
        assert_eq!(err.to_string(), "bad argument #1 to 'new' (string expected, got number)");

        let err = args.check_any(2).unwrap_err();
        assert_eq!(err.to_string(), "bad argument #2 to 'new' (value expected)");

        let err = args.check_userdata(1).unwrap_err();
        assert!(matches!(err, RuntimeError::BadArgument { position: 1, .. }));
    }

    #[test]
    fn mapping_failures_convert_into_argument_errors() {
        let args = Args::new("set", &[]);
        let err = args.error(
            3,
            MappingError::TypeMismatch {
                slot: Slot::Value,
                expected: "bool",
                got: "number",
            },
        );
        assert_eq!(
            err.to_string(),
            "bad argument #3 to 'set' (expected bool value, got number)"
        );
    }

    #[test]
    fn native_fn_passes_its_name_to_args() {
        let f = NativeFn::new("echo_name", |_rt, args| Ok(Value::from(args.function())));
        let rt = Runtime::new();
        assert_eq!(f.call(&rt, &[]).unwrap(), Value::from("echo_name"));
        assert_eq!(format!("{f:?}"), "<native-fn echo_name>");
    }
}
