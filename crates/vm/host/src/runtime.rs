// Path: crates/vm/host/src/runtime.rs

//! The registration surface and operator dispatch of the host runtime.

use crate::native::NativeFn;
use crate::userdata::{Metatable, UserData};
use crate::value::Value;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use tos_types::error::{ArgumentError, RuntimeError};

/// A single script execution context.
///
/// Holds the global functions, the registered native modules and the type
/// metatables for userdata. Everything is single-threaded: values and handles
/// are `Rc`-based and must not leave the runtime that created them.
#[derive(Debug, Default)]
pub struct Runtime {
    globals: HashMap<String, NativeFn>,
    modules: HashMap<String, BTreeMap<String, NativeFn>>,
    metatables: HashMap<String, Rc<Metatable>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `f` in the global namespace under its own name.
    pub fn register_global(&mut self, f: NativeFn) {
        tracing::debug!(target: "vm", function = f.name(), "registered global function");
        self.globals.insert(f.name().to_string(), f);
    }

    /// Installs `functions` under the module namespace `name`, merging with any
    /// functions already registered there.
    pub fn register_module(&mut self, name: &str, functions: impl IntoIterator<Item = NativeFn>) {
        let module = self.modules.entry(name.to_string()).or_default();
        for f in functions {
            module.insert(f.name().to_string(), f);
        }
        tracing::debug!(
            target: "vm",
            module = name,
            functions = module.len(),
            "registered native module"
        );
    }

    /// Names of the functions in module `name`, sorted.
    pub fn module_functions(&self, name: &str) -> Option<Vec<&str>> {
        self.modules
            .get(name)
            .map(|m| m.keys().map(String::as_str).collect())
    }

    /// Registers a type metatable under its name, replacing any previous one.
    pub fn register_type_metatable(&mut self, metatable: Metatable) -> Rc<Metatable> {
        let metatable = Rc::new(metatable);
        tracing::debug!(
            target: "vm",
            type_name = metatable.name(),
            protected = metatable.protection().is_some(),
            "registered type metatable"
        );
        self.metatables
            .insert(metatable.name().to_string(), Rc::clone(&metatable));
        metatable
    }

    pub fn type_metatable(&self, name: &str) -> Option<Rc<Metatable>> {
        self.metatables.get(name).cloned()
    }

    /// Wraps `payload` in a new handle carrying the metatable registered as `type_name`.
    pub fn new_userdata<T: Any>(&self, payload: T, type_name: &str) -> Value {
        Value::UserData(UserData::new(payload, self.type_metatable(type_name)))
    }

    /// Calls a global function.
    pub fn call_global(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let f = self
            .globals
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))?;
        f.call(self, args)
    }

    /// Calls `module.function`.
    pub fn call(&self, module: &str, function: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let functions = self
            .modules
            .get(module)
            .ok_or_else(|| RuntimeError::UndefinedModule(module.to_string()))?;
        let f = functions
            .get(function)
            .ok_or_else(|| RuntimeError::UndefinedFunction(format!("{module}.{function}")))?;
        f.call(self, args)
    }

    /// Evaluates `target[key]`.
    pub fn index(&self, target: &Value, key: &Value) -> Result<Value, RuntimeError> {
        let hook = Self::hook(target, Metatable::index)?;
        hook.call(self, &[target.clone(), key.clone()])
    }

    /// Evaluates `target[key] = value`.
    pub fn set_index(&self, target: &Value, key: Value, value: Value) -> Result<(), RuntimeError> {
        let hook = Self::hook(target, Metatable::new_index)?;
        hook.call(self, &[target.clone(), key, value]).map(|_| ())
    }

    /// Evaluates `tostring(value)`, honouring a userdata's tostring hook.
    pub fn tostring(&self, value: &Value) -> Result<String, RuntimeError> {
        let hook = value
            .as_userdata()
            .and_then(UserData::metatable)
            .and_then(|mt| mt.to_string_hook().cloned());
        match hook {
            Some(hook) => Ok(hook.call(self, std::slice::from_ref(value))?.to_string()),
            None => Ok(value.to_string()),
        }
    }

    /// Evaluates `type(value)`.
    pub fn type_of(&self, value: &Value) -> &'static str {
        value.type_name()
    }

    /// Evaluates the generic iteration protocol (`pairs(value)`).
    ///
    /// No value kind of this runtime is enumerable: scalars have no entries and
    /// metatables carry no enumeration hook, so this always fails.
    pub fn pairs(&self, value: &Value) -> Result<Vec<(Value, Value)>, RuntimeError> {
        let type_name = match value {
            Value::UserData(ud) => ud.type_name(),
            other => other.type_name().to_string(),
        };
        tracing::debug!(target: "vm", type_name = %type_name, "rejected enumeration");
        Err(RuntimeError::NotEnumerable { type_name })
    }

    /// Evaluates `getmetatable(value)`.
    ///
    /// Returns the protection label for protected metatables, the metatable name
    /// otherwise, and `nil` for values without one.
    pub fn get_metatable(&self, value: &Value) -> Value {
        match value.as_userdata().and_then(UserData::metatable) {
            Some(mt) => match mt.protection() {
                Some(label) => Value::from(label),
                None => Value::from(mt.name()),
            },
            None => Value::Nil,
        }
    }

    /// Evaluates `setmetatable(value, <registered type_name>)`.
    pub fn set_metatable(&self, value: &Value, type_name: &str) -> Result<(), RuntimeError> {
        let ud = value.as_userdata().ok_or_else(|| RuntimeError::BadArgument {
            position: 1,
            function: "setmetatable".to_string(),
            source: ArgumentError::WrongType {
                expected: "userdata",
                got: value.type_name(),
            },
        })?;
        ud.set_metatable(self.type_metatable(type_name))
    }

    fn hook(
        target: &Value,
        select: fn(&Metatable) -> Option<&NativeFn>,
    ) -> Result<NativeFn, RuntimeError> {
        target
            .as_userdata()
            .and_then(UserData::metatable)
            .and_then(|mt| select(&mt).cloned())
            .ok_or(RuntimeError::NotIndexable {
                type_name: target.type_name(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tos_test_utils::assert_err;
    use tos_types::U256;

    // A tiny keyed store exposing index operators, used to exercise dispatch.
    struct Bag(HashMap<String, Value>);

    fn bag_runtime() -> Runtime {
        let mut rt = Runtime::new();
        rt.register_type_metatable(
            Metatable::new("__bag")
                .with_index(NativeFn::new("__index", |_rt, args| {
                    let bag = args.check_userdata(1)?.borrow::<Bag>()?;
                    let key = args.check_string(2)?;
                    Ok(bag.0.get(key).cloned().unwrap_or_default())
                }))
                .with_new_index(NativeFn::new("__newindex", |_rt, args| {
                    let mut bag = args.check_userdata(1)?.borrow_mut::<Bag>()?;
                    let key = args.check_string(2)?.to_string();
                    bag.0.insert(key, args.check_any(3)?.clone());
                    Ok(Value::Nil)
                }))
                .with_to_string(NativeFn::new("__tostring", |_rt, args| {
                    let bag = args.check_userdata(1)?.borrow::<Bag>()?;
                    Ok(Value::from(format!("bag({})", bag.0.len())))
                })),
        );
        rt.register_module(
            "bag",
            [NativeFn::new("new", |rt, _args| {
                Ok(rt.new_userdata(Bag(HashMap::new()), "__bag"))
            })],
        );
        rt
    }

    #[test]
    fn module_functions_are_callable() {
        let rt = bag_runtime();
        assert_eq!(rt.module_functions("bag"), Some(vec!["new"]));
        let bag = rt.call("bag", "new", &[]).unwrap();
        assert_eq!(rt.type_of(&bag), "userdata");
    }

    #[test]
    fn index_operators_dispatch_to_hooks() {
        let rt = bag_runtime();
        let bag = rt.call("bag", "new", &[]).unwrap();
        assert_eq!(rt.index(&bag, &Value::from("x")).unwrap(), Value::Nil);
        rt.set_index(&bag, Value::from("x"), Value::from(3u64)).unwrap();
        assert_eq!(
            rt.index(&bag, &Value::from("x")).unwrap(),
            Value::Number(U256::from(3u64))
        );
        assert_eq!(rt.tostring(&bag).unwrap(), "bag(1)");
    }

    #[test]
    fn scalars_are_not_indexable() {
        let rt = Runtime::new();
        let err = assert_err!(rt.index(&Value::from(1u64), &Value::from(1u64)));
        assert_eq!(err, RuntimeError::NotIndexable { type_name: "number" });
        let err = assert_err!(rt.set_index(&Value::Nil, Value::Nil, Value::Nil));
        assert_eq!(err.to_string(), "attempt to index a nil value");
    }

    #[test]
    fn unknown_functions_and_modules() {
        let rt = bag_runtime();
        assert_eq!(
            rt.call_global("nope", &[]).unwrap_err(),
            RuntimeError::UndefinedFunction("nope".into())
        );
        assert_eq!(
            rt.call("nope", "new", &[]).unwrap_err(),
            RuntimeError::UndefinedModule("nope".into())
        );
        assert_eq!(
            rt.call("bag", "old", &[]).unwrap_err(),
            RuntimeError::UndefinedFunction("bag.old".into())
        );
    }

    #[test]
    fn nothing_is_enumerable() {
        let rt = bag_runtime();
        let bag = rt.call("bag", "new", &[]).unwrap();
        assert_eq!(
            rt.pairs(&bag).unwrap_err(),
            RuntimeError::NotEnumerable {
                type_name: "__bag".into()
            }
        );
        assert!(rt.pairs(&Value::from("abc")).is_err());
    }

    #[test]
    fn metatable_visibility_and_replacement() {
        let mut rt = bag_runtime();
        rt.register_type_metatable(Metatable::new("__plain"));
        let bag = rt.call("bag", "new", &[]).unwrap();
        assert_eq!(rt.get_metatable(&bag), Value::from("__bag"));
        assert_eq!(rt.get_metatable(&Value::from(1u64)), Value::Nil);

        rt.set_metatable(&bag, "__plain").unwrap();
        assert_eq!(rt.get_metatable(&bag), Value::from("__plain"));
        assert!(rt.index(&bag, &Value::from("x")).is_err());

        let err = assert_err!(rt.set_metatable(&Value::from(true), "__plain"));
        assert!(matches!(err, RuntimeError::BadArgument { position: 1, .. }));
    }

    #[test]
    fn tostring_without_hook_is_raw() {
        let rt = Runtime::new();
        assert_eq!(rt.tostring(&Value::from(12u64)).unwrap(), "12");
        assert_eq!(rt.tostring(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(rt.tostring(&Value::Nil).unwrap(), "nil");
    }
}
