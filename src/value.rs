// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Host values: the things the containers are asked to hold.
//!
//! The host environment is dynamically typed. A single variable can hold null,
//! a number, a string, a list, an object, an open file handle, or a function.
//! `Value` is the closed set of those shapes. Type expressions in [`crate::types`]
//! classify a `Value`; containers store them.
//!
//! Values are cheap to clone. Objects and callables are reference-counted, so
//! cloning a `Value::Object` hands out another reference to the same instance.
//! That matters for identity comparison: two clones are identical, two objects
//! built separately with the same fields are only loosely equal.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::object::Object;

/// A dynamically typed host value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    Object(Rc<dyn Object>),
    Resource(Resource),
    Callable(Callable),
}

/// The fundamental runtime kind of a value.
///
/// Two values of different kinds are never equal under the strict equality
/// service, whatever their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Resource,
    Callable,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Resource => "resource",
            Kind::Callable => "callable",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Wrap a Rust object as a host object.
    pub fn object<T: Object>(object: T) -> Self {
        Value::Object(Rc::new(object))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Resource(_) => Kind::Resource,
            Value::Callable(_) => Kind::Callable,
        }
    }

    /// The name used for this value in diagnostics.
    ///
    /// Scalars report their kind, objects their class name, resources their
    /// resource kind and callables `Closure`.
    pub fn debug_type(&self) -> Cow<'static, str> {
        match self {
            Value::Object(object) => Cow::Borrowed(object.class().name()),
            Value::Resource(resource) => Cow::Owned(format!("resource ({})", resource.kind())),
            Value::Callable(_) => Cow::Borrowed("Closure"),
            other => Cow::Borrowed(other.kind().name()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<dyn Object>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Borrow the concrete Rust type behind an object value.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_object()
            .and_then(|object| object.as_any().downcast_ref::<T>())
    }

    /// Truthiness as the host's boolean conversion defines it.
    ///
    /// `0`, `0.0`, `""`, `"0"`, empty arrays and null are false; everything
    /// else, including every object, is true.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(x) => *x != 0.0,
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::Array(items) => !items.is_empty(),
            Value::Object(_) | Value::Resource(_) | Value::Callable(_) => true,
        }
    }
}

/// Strict identity, the host's `===`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::cmp::identical(self, other)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Rc<dyn Object>> for Value {
    fn from(object: Rc<dyn Object>) -> Self {
        Value::Object(object)
    }
}

impl From<Resource> for Value {
    fn from(resource: Resource) -> Self {
        Value::Resource(resource)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Callable(callable)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// An opaque handle to something outside the host's memory (a stream, a socket).
///
/// Resources compare by id. The kind is only used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    id: u64,
    kind: Cow<'static, str>,
}

impl Resource {
    pub fn new(id: u64, kind: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// A host function value.
#[derive(Clone)]
pub struct Callable {
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callable {
    pub fn new(func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Whether both handles refer to the same function instance.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Closure")
    }
}
