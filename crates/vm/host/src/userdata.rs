// Path: crates/vm/host/src/userdata.rs

//! Opaque handles and the per-type metatables that give them operator behaviour.

use crate::native::NativeFn;
use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use tos_types::error::RuntimeError;

/// Operator hooks shared by every userdata of one registered type.
///
/// Only the index, new-index and tostring operators can be overridden. There is
/// no enumeration hook, so userdata are never enumerable.
#[derive(Clone)]
pub struct Metatable {
    name: String,
    index: Option<NativeFn>,
    new_index: Option<NativeFn>,
    to_string: Option<NativeFn>,
    protection: Option<String>,
}

impl Metatable {
    /// Creates an empty metatable registered under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
            new_index: None,
            to_string: None,
            protection: None,
        }
    }

    /// Sets the hook for `handle[key]`. It receives `(handle, key)`.
    pub fn with_index(mut self, hook: NativeFn) -> Self {
        self.index = Some(hook);
        self
    }

    /// Sets the hook for `handle[key] = value`. It receives `(handle, key, value)`.
    pub fn with_new_index(mut self, hook: NativeFn) -> Self {
        self.new_index = Some(hook);
        self
    }

    /// Sets the hook for `tostring(handle)`. It receives `(handle)`.
    pub fn with_to_string(mut self, hook: NativeFn) -> Self {
        self.to_string = Some(hook);
        self
    }

    /// Prevents scripts from reading or replacing this metatable. Reads observe `label`.
    pub fn protect(mut self, label: impl Into<String>) -> Self {
        self.protection = Some(label.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> Option<&NativeFn> {
        self.index.as_ref()
    }

    pub fn new_index(&self) -> Option<&NativeFn> {
        self.new_index.as_ref()
    }

    pub fn to_string_hook(&self) -> Option<&NativeFn> {
        self.to_string.as_ref()
    }

    /// The label scripts see instead of the metatable, if protected.
    pub fn protection(&self) -> Option<&str> {
        self.protection.as_deref()
    }
}

impl fmt::Debug for Metatable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metatable")
            .field("name", &self.name)
            .field("index", &self.index.is_some())
            .field("new_index", &self.new_index.is_some())
            .field("to_string", &self.to_string.is_some())
            .field("protection", &self.protection)
            .finish()
    }
}

struct Inner {
    payload: RefCell<Box<dyn Any>>,
    metatable: RefCell<Option<Rc<Metatable>>>,
}

/// A reference-counted opaque handle to a native payload.
///
/// Cloning the handle shares the payload. The payload is dropped with the last
/// handle; nothing frees it explicitly.
#[derive(Clone)]
pub struct UserData {
    inner: Rc<Inner>,
}

impl UserData {
    pub fn new<T: Any>(payload: T, metatable: Option<Rc<Metatable>>) -> Self {
        Self {
            inner: Rc::new(Inner {
                payload: RefCell::new(Box::new(payload)),
                metatable: RefCell::new(metatable),
            }),
        }
    }

    /// The metatable name, or `userdata` for a bare handle.
    pub fn type_name(&self) -> String {
        self.metatable()
            .map(|mt| mt.name().to_string())
            .unwrap_or_else(|| "userdata".to_string())
    }

    pub fn metatable(&self) -> Option<Rc<Metatable>> {
        self.inner.metatable.borrow().clone()
    }

    /// Replaces the metatable unless the current one is protected.
    pub fn set_metatable(&self, metatable: Option<Rc<Metatable>>) -> Result<(), RuntimeError> {
        if let Some(current) = self.metatable() {
            if current.protection().is_some() {
                return Err(RuntimeError::ProtectedMetatable {
                    type_name: current.name().to_string(),
                });
            }
        }
        *self.inner.metatable.borrow_mut() = metatable;
        Ok(())
    }

    /// Returns true if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner
            .payload
            .try_borrow()
            .map(|b| (**b).is::<T>())
            .unwrap_or(false)
    }

    /// Borrows the payload as a `T`.
    pub fn borrow<T: Any>(&self) -> Result<Ref<'_, T>, RuntimeError> {
        self.inner
            .payload
            .try_borrow()
            .ok()
            .and_then(|b| Ref::filter_map(b, |b| (**b).downcast_ref::<T>()).ok())
            .ok_or_else(|| self.conflict())
    }

    /// Mutably borrows the payload as a `T`.
    pub fn borrow_mut<T: Any>(&self) -> Result<RefMut<'_, T>, RuntimeError> {
        self.inner
            .payload
            .try_borrow_mut()
            .ok()
            .and_then(|b| RefMut::filter_map(b, |b| (**b).downcast_mut::<T>()).ok())
            .ok_or_else(|| self.conflict())
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.inner).cast()
    }

    fn conflict(&self) -> RuntimeError {
        RuntimeError::BorrowConflict {
            type_name: self.type_name(),
        }
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserData({})", self.type_name())
    }
}
