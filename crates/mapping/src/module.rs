// Path: crates/mapping/src/module.rs

//! The `mapping` native module and the metatable behind mapping handles.

use crate::mapping::{TypedMapping, TypedStorage};
use tos_types::config::MappingConfig;
use tos_types::error::{MappingError, RuntimeError};
use tos_types::kind::Slot;
use tos_types::MappingKind;
use tos_vm_host::{Args, Metatable, NativeFn, Runtime, UserData, Value};

/// Installs the mapping module and its protected type metatable.
pub fn open_mapping(runtime: &mut Runtime, config: &MappingConfig) {
    runtime.register_type_metatable(
        Metatable::new(&config.type_name)
            .with_index(NativeFn::new("__index", meta_index))
            .with_new_index(NativeFn::new("__newindex", meta_new_index))
            .with_to_string(NativeFn::new("__tostring", meta_to_string))
            .protect(&config.metatable_label),
    );

    let type_name = config.type_name.clone();
    runtime.register_module(
        &config.module_name,
        [
            NativeFn::new("new", move |rt, args| new(rt, args, &type_name)),
            NativeFn::new("get", get),
            NativeFn::new("set", set),
            NativeFn::new("delete", delete),
            NativeFn::new("has", has),
            NativeFn::new("key_type", key_type),
            NativeFn::new("val_type", val_type),
        ],
    );
}

fn new(rt: &Runtime, args: &Args<'_>, type_name: &str) -> Result<Value, RuntimeError> {
    if args.len() > 2 {
        return Err(MappingError::Arity { got: args.len() }.into());
    }
    let key_kind = kind_arg(args, 1, Slot::Key)?;
    let value_kind = kind_arg(args, 2, Slot::Value)?;

    tracing::debug!(
        target: "mapping",
        key_kind = %key_kind,
        value_kind = %value_kind,
        "created mapping"
    );
    Ok(rt.new_userdata(TypedMapping::new(key_kind, value_kind), type_name))
}

fn get(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    let value = m
        .borrow::<TypedMapping>()?
        .get(key)
        .map_err(|e| args.error(2, e))?;
    Ok(value.into_host())
}

fn set(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    let value = args.check_any(3)?;
    m.borrow_mut::<TypedMapping>()?
        .set(key, value)
        .map_err(|e| args.error(operand_position(&e), e))?;
    Ok(Value::Nil)
}

fn delete(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    m.borrow_mut::<TypedMapping>()?
        .delete(key)
        .map_err(|e| args.error(2, e))?;
    Ok(Value::Nil)
}

fn has(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    let present = m
        .borrow::<TypedMapping>()?
        .has(key)
        .map_err(|e| args.error(2, e))?;
    Ok(Value::Bool(present))
}

fn key_type(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let kind = check_mapping(args, 1)?.borrow::<TypedMapping>()?.key_kind();
    Ok(Value::from(kind.name()))
}

fn val_type(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let kind = check_mapping(args, 1)?.borrow::<TypedMapping>()?.value_kind();
    Ok(Value::from(kind.name()))
}

fn meta_index(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    let value = m
        .borrow::<TypedMapping>()?
        .get(key)
        .map_err(operator_error)?;
    Ok(value.into_host())
}

fn meta_new_index(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let key = args.check_any(2)?;
    let value = args.check_any(3)?;
    m.borrow_mut::<TypedMapping>()?
        .set(key, value)
        .map_err(operator_error)?;
    Ok(Value::Nil)
}

fn meta_to_string(_rt: &Runtime, args: &Args<'_>) -> Result<Value, RuntimeError> {
    let m = check_mapping(args, 1)?;
    let rendered = m.borrow::<TypedMapping>()?.to_string();
    Ok(Value::from(rendered))
}

/// Requires a mapping handle at `position`.
fn check_mapping<'a>(args: &Args<'a>, position: usize) -> Result<&'a UserData, RuntimeError> {
    let value = args.check_any(position)?;
    match value.as_userdata() {
        Some(ud) if ud.is::<TypedMapping>() => Ok(ud),
        _ => Err(args.wrong_type(position, "mapping", value)),
    }
}

/// An omitted kind argument defaults to `u256`.
fn kind_arg(args: &Args<'_>, position: usize, slot: Slot) -> Result<MappingKind, RuntimeError> {
    if args.get(position).is_none() {
        return Ok(MappingKind::default());
    }
    let name = args.check_string(position)?;
    Ok(MappingKind::parse(name, slot)?)
}

fn operand_position(err: &MappingError) -> usize {
    match err.slot() {
        Some(Slot::Value) => 3,
        _ => 2,
    }
}

fn operator_error(err: MappingError) -> RuntimeError {
    RuntimeError::OperatorCoercion {
        slot: err.slot().unwrap_or(Slot::Key),
        source: err,
    }
}
