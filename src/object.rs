// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Host objects, their class descriptors, and the optional capabilities they opt into.
//!
//! A host object is any Rust type implementing [`Object`]. It names its class
//! through a `&'static ClassInfo`, which in turn names its supertypes. That gives
//! nominal type checks a hierarchy to walk without any runtime reflection:
//!
//! ```ignore
//! pub static SHAPE: ClassInfo = ClassInfo::interface("Shape", &[]);
//! pub static CIRCLE: ClassInfo = ClassInfo::class("Circle", &[&SHAPE]);
//! ```
//!
//! # Capabilities
//!
//! | Capability         | Accessor                 | Used by                        |
//! |--------------------|--------------------------|--------------------------------|
//! | `EqualityTestable` | `as_equality_testable`   | equality service               |
//! | `Hashable`         | `as_hashable`            | map key projection             |
//! | `Stringable`       | `as_stringable`          | map key projection, loose `==` |
//! | `Countable`        | `as_countable`           | `countable` atomic type        |
//! | `Traversable`      | `as_traversable`         | `iterable` atomic type         |
//! | `Invocable`        | `as_invocable`           | `callable` atomic type         |
//!
//! Capabilities are discovered by calling the accessor, never by looking at names.
//! Each one also has a built-in interface descriptor (`STRINGABLE`, `HASHABLE`, ...)
//! so it can be used inside a nominal type expression.

use std::any::Any;
use std::fmt;

use crate::value::Value;

/// What a class descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    /// A tagged variant type.
    Enum,
    /// A built-in interface satisfied structurally through an `Object` accessor.
    Capability(Capability),
}

/// Optional behaviours an object may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EqualityTestable,
    Hashable,
    Stringable,
    Countable,
    Traversable,
    Invocable,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::EqualityTestable,
        Capability::Hashable,
        Capability::Stringable,
        Capability::Countable,
        Capability::Traversable,
        Capability::Invocable,
    ];

    pub fn name(self) -> &'static str {
        self.class().name()
    }

    /// The built-in interface descriptor for this capability.
    pub fn class(self) -> &'static ClassInfo {
        match self {
            Capability::EqualityTestable => &EQUALITY_TESTABLE,
            Capability::Hashable => &HASHABLE,
            Capability::Stringable => &STRINGABLE,
            Capability::Countable => &COUNTABLE,
            Capability::Traversable => &TRAVERSABLE,
            Capability::Invocable => &INVOCABLE,
        }
    }
}

/// Static descriptor of a class, interface or enum.
///
/// Descriptors must live in `static` items: a type is its descriptor's address.
/// Two descriptors that share a name are still two unrelated types, and a
/// [`crate::TypeRegistry`] refuses to hold both.
#[derive(Debug)]
pub struct ClassInfo {
    name: &'static str,
    kind: ClassKind,
    supertypes: &'static [&'static ClassInfo],
}

impl ClassInfo {
    pub const fn class(name: &'static str, supertypes: &'static [&'static ClassInfo]) -> Self {
        Self {
            name,
            kind: ClassKind::Class,
            supertypes,
        }
    }

    pub const fn interface(name: &'static str, supertypes: &'static [&'static ClassInfo]) -> Self {
        Self {
            name,
            kind: ClassKind::Interface,
            supertypes,
        }
    }

    pub const fn enumeration(
        name: &'static str,
        supertypes: &'static [&'static ClassInfo],
    ) -> Self {
        Self {
            name,
            kind: ClassKind::Enum,
            supertypes,
        }
    }

    const fn capability(name: &'static str, capability: Capability) -> Self {
        Self {
            name,
            kind: ClassKind::Capability(capability),
            supertypes: &[],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn supertypes(&self) -> &'static [&'static ClassInfo] {
        self.supertypes
    }

    /// Whether `self` is `other` or declares it somewhere up its hierarchy.
    pub fn is_subtype_of(&self, other: &ClassInfo) -> bool {
        self == other || self.supertypes.iter().any(|s| s.is_subtype_of(other))
    }
}

impl PartialEq for ClassInfo {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for ClassInfo {}

impl fmt::Display for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub static EQUALITY_TESTABLE: ClassInfo =
    ClassInfo::capability("EqualityTestable", Capability::EqualityTestable);
pub static HASHABLE: ClassInfo = ClassInfo::capability("Hashable", Capability::Hashable);
pub static STRINGABLE: ClassInfo = ClassInfo::capability("Stringable", Capability::Stringable);
pub static COUNTABLE: ClassInfo = ClassInfo::capability("Countable", Capability::Countable);
pub static TRAVERSABLE: ClassInfo = ClassInfo::capability("Traversable", Capability::Traversable);
pub static INVOCABLE: ClassInfo = ClassInfo::capability("Invocable", Capability::Invocable);

/// A host object.
///
/// Only `class` and `as_any` are required. `members` feeds structural equality
/// and serialization; leave it empty for objects without observable state.
pub trait Object: fmt::Debug + 'static {
    fn class(&self) -> &'static ClassInfo;

    fn as_any(&self) -> &dyn Any;

    /// Named members in declaration order.
    fn members(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    fn as_equality_testable(&self) -> Option<&dyn EqualityTestable> {
        None
    }

    fn as_hashable(&self) -> Option<&dyn Hashable> {
        None
    }

    fn as_stringable(&self) -> Option<&dyn Stringable> {
        None
    }

    fn as_countable(&self) -> Option<&dyn Countable> {
        None
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        None
    }

    fn as_invocable(&self) -> Option<&dyn Invocable> {
        None
    }
}

impl dyn Object {
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::EqualityTestable => self.as_equality_testable().is_some(),
            Capability::Hashable => self.as_hashable().is_some(),
            Capability::Stringable => self.as_stringable().is_some(),
            Capability::Countable => self.as_countable().is_some(),
            Capability::Traversable => self.as_traversable().is_some(),
            Capability::Invocable => self.as_invocable().is_some(),
        }
    }

    /// Dynamic `instanceof`: class hierarchy for declared types, the accessor
    /// for capability interfaces.
    pub fn is_instance_of(&self, class: &ClassInfo) -> bool {
        match class.kind() {
            ClassKind::Capability(capability) => self.has_capability(capability),
            _ => self.class().is_subtype_of(class),
        }
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Custom value equality, consulted by the equality service for objects of the same class.
pub trait EqualityTestable {
    fn is_equal_to(&self, other: &Value) -> bool;
}

/// Map keys that project to an explicit hash string.
pub trait Hashable {
    fn get_hash(&self) -> String;
}

/// Objects with a string conversion.
pub trait Stringable {
    fn to_host_string(&self) -> String;
}

pub trait Countable {
    fn count(&self) -> usize;
}

/// Objects that can be iterated like an array.
pub trait Traversable {
    fn values(&self) -> Vec<Value>;
}

/// Objects that can be called like a function.
pub trait Invocable {
    fn invoke(&self, args: &[Value]) -> Value;
}
