// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides a small class hierarchy and one object per capability so
//! tests don't each declare their own.
//!
//! ```text
//! FooInterface   BarInterface
//!      │    ╲     ╱
//!     Foo    FooBar        Fractal ── FooInterface
//!
//! Bar (no supertypes)
//! ```

#![doc(hidden)]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use crate::object::{
    ClassInfo, Countable, EqualityTestable, Hashable, Invocable, Object, Stringable, Traversable,
};
use crate::types::TypeRegistry;
use crate::value::Value;

// ============================================================================
// CLASS DESCRIPTORS
// ============================================================================

pub static FOO_INTERFACE: ClassInfo = ClassInfo::interface("FooInterface", &[]);
pub static BAR_INTERFACE: ClassInfo = ClassInfo::interface("BarInterface", &[]);
pub static FOO: ClassInfo = ClassInfo::class("Foo", &[&FOO_INTERFACE]);
pub static BAR: ClassInfo = ClassInfo::class("Bar", &[]);
pub static FOOBAR: ClassInfo = ClassInfo::class("FooBar", &[&FOO_INTERFACE, &BAR_INTERFACE]);
pub static FRACTAL: ClassInfo = ClassInfo::class("Fractal", &[&FOO_INTERFACE]);
pub static CUSTOMER: ClassInfo = ClassInfo::class("Customer", &[]);
pub static COMPARABLE_CUSTOMER: ClassInfo = ClassInfo::class("ComparableCustomer", &[]);
pub static CUSTOMER_IDENTITY: ClassInfo = ClassInfo::class("CustomerIdentity", &[]);
pub static STRINGABLE_KEY: ClassInfo = ClassInfo::class("StringableKey", &[]);
pub static SIZED3: ClassInfo = ClassInfo::class("Sized3", &[]);
pub static PROBE: ClassInfo = ClassInfo::class("Probe", &[]);

/// A registry holding the built-in capability interfaces and every fixture class.
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();
    for class in [
        &FOO,
        &BAR,
        &FOOBAR,
        &FRACTAL,
        &CUSTOMER,
        &COMPARABLE_CUSTOMER,
        &CUSTOMER_IDENTITY,
        &STRINGABLE_KEY,
        &SIZED3,
        &PROBE,
    ] {
        if let Err(err) = registry.register(class) {
            unreachable!("fixture classes have unique names: {err}");
        }
    }
    registry
}

// ============================================================================
// HIERARCHY FIXTURES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Foo {
    pub val: i64,
}

impl Foo {
    pub fn new(val: i64) -> Self {
        Self { val }
    }
}

impl Object for Foo {
    fn class(&self) -> &'static ClassInfo {
        &FOO
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![("val", Value::from(self.val))]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bar {
    pub label: String,
}

impl Object for Bar {
    fn class(&self) -> &'static ClassInfo {
        &BAR
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![("label", Value::from(self.label.as_str()))]
    }
}

/// Implements both fixture interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FooBar;

impl Object for FooBar {
    fn class(&self) -> &'static ClassInfo {
        &FOOBAR
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Implements `FooInterface` only.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fractal;

impl Object for Fractal {
    fn class(&self) -> &'static ClassInfo {
        &FRACTAL
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// EQUALITY AND KEY FIXTURES
// ============================================================================

/// Plain object: equality falls back to its members.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
}

impl Customer {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Object for Customer {
    fn class(&self) -> &'static ClassInfo {
        &CUSTOMER
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![("id", Value::from(self.id.as_str()))]
    }
}

/// Equal to any `ComparableCustomer` with the same id, whatever the name.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparableCustomer {
    pub id: String,
    pub name: String,
}

impl ComparableCustomer {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

impl Object for ComparableCustomer {
    fn class(&self) -> &'static ClassInfo {
        &COMPARABLE_CUSTOMER
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::from(self.id.as_str())),
            ("name", Value::from(self.name.as_str())),
        ]
    }

    fn as_equality_testable(&self) -> Option<&dyn EqualityTestable> {
        Some(self)
    }
}

impl EqualityTestable for ComparableCustomer {
    fn is_equal_to(&self, other: &Value) -> bool {
        other
            .downcast_ref::<ComparableCustomer>()
            .is_some_and(|other| other.id == self.id)
    }
}

/// A map key with both capabilities. The hash is `namespace:id`, the string
/// form `namespace/id`, so tests can tell which one was used.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerIdentity {
    pub namespace: String,
    pub id: i64,
}

impl CustomerIdentity {
    pub fn new(namespace: &str, id: i64) -> Self {
        Self {
            namespace: namespace.to_string(),
            id,
        }
    }
}

impl Object for CustomerIdentity {
    fn class(&self) -> &'static ClassInfo {
        &CUSTOMER_IDENTITY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("namespace", Value::from(self.namespace.as_str())),
            ("id", Value::from(self.id)),
        ]
    }

    fn as_hashable(&self) -> Option<&dyn Hashable> {
        Some(self)
    }

    fn as_stringable(&self) -> Option<&dyn Stringable> {
        Some(self)
    }
}

impl Hashable for CustomerIdentity {
    fn get_hash(&self) -> String {
        format!("{}:{}", self.namespace, self.id)
    }
}

impl Stringable for CustomerIdentity {
    fn to_host_string(&self) -> String {
        format!("{}/{}", self.namespace, self.id)
    }
}

/// A map key that converts to a fixed string.
#[derive(Debug, Clone, PartialEq)]
pub struct StringableKey {
    pub text: String,
}

impl StringableKey {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Object for StringableKey {
    fn class(&self) -> &'static ClassInfo {
        &STRINGABLE_KEY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn members(&self) -> Vec<(&'static str, Value)> {
        vec![("text", Value::from(self.text.as_str()))]
    }

    fn as_stringable(&self) -> Option<&dyn Stringable> {
        Some(self)
    }
}

impl Stringable for StringableKey {
    fn to_host_string(&self) -> String {
        self.text.clone()
    }
}

// ============================================================================
// SHAPE FIXTURES
// ============================================================================

/// Countable, traversable and invocable, always with the values 1, 2, 3.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sized3;

impl Object for Sized3 {
    fn class(&self) -> &'static ClassInfo {
        &SIZED3
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_countable(&self) -> Option<&dyn Countable> {
        Some(self)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }

    fn as_invocable(&self) -> Option<&dyn Invocable> {
        Some(self)
    }
}

impl Countable for Sized3 {
    fn count(&self) -> usize {
        3
    }
}

impl Traversable for Sized3 {
    fn values(&self) -> Vec<Value> {
        vec![Value::from(1), Value::from(2), Value::from(3)]
    }
}

impl Invocable for Sized3 {
    fn invoke(&self, args: &[Value]) -> Value {
        Value::from(args.len() as i64)
    }
}

/// Counts how often its `Hashable` accessor is asked. It never is hashable.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    hashable_calls: Rc<Cell<usize>>,
}

impl Probe {
    /// Shared counter; stays valid after the probe is moved into a `Value`.
    pub fn hashable_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.hashable_calls)
    }
}

impl Object for Probe {
    fn class(&self) -> &'static ClassInfo {
        &PROBE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_hashable(&self) -> Option<&dyn Hashable> {
        self.hashable_calls.set(self.hashable_calls.get() + 1);
        None
    }
}
