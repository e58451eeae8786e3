// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type expressions: what a container is allowed to hold.
//!
//! A type expression is a membership predicate over [`Value`] plus a display
//! name. The family is closed:
//!
//! ```text
//!            TypeDef
//!   ┌──────────┬──┴───────────┬──────────────┐
//! Atomic    Nominal     Intersection       Union
//! (int,     (Foo,       (Nominal &         (Atomic | Nominal |
//!  string…)  Shape…)     Nominal …)         (Intersection) …)
//! ```
//!
//! Names are for diagnostics only. Nothing dispatches on them.

mod atomic;
mod composite;
mod nominal;
mod registry;

use std::fmt;

use tracing::debug;

use crate::error::TypeMismatch;
use crate::value::Value;

pub use atomic::{is_numeric_str, parse_numeric, Atomic, Numeric};
pub use composite::{Intersection, Union, UnionMember};
pub use nominal::Nominal;
pub use registry::TypeRegistry;

/// The contract every type expression satisfies.
///
/// `is_of_type` must be pure and deterministic: asking twice about the same
/// value gives the same answer.
pub trait TypeDefinition {
    fn is_of_type(&self, value: &Value) -> bool;

    fn type_name(&self) -> String;
}

/// Any type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    Atomic(Atomic),
    Nominal(Nominal),
    Intersection(Intersection),
    Union(Union),
}

impl TypeDef {
    pub fn is_of_type(&self, value: &Value) -> bool {
        match self {
            TypeDef::Atomic(t) => t.is_of_type(value),
            TypeDef::Nominal(t) => t.is_of_type(value),
            TypeDef::Intersection(t) => t.is_of_type(value),
            TypeDef::Union(t) => t.is_of_type(value),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            TypeDef::Atomic(t) => t.name().to_string(),
            TypeDef::Nominal(t) => t.name().to_string(),
            TypeDef::Intersection(t) => t.type_name(),
            TypeDef::Union(t) => t.type_name(),
        }
    }

    /// Check a call argument against this type.
    ///
    /// `position` is the argument's 1-based position, used only for the error.
    pub fn guard(
        &self,
        value: &Value,
        position: usize,
        param: Option<&'static str>,
    ) -> Result<(), TypeMismatch> {
        if self.is_of_type(value) {
            return Ok(());
        }

        let mut mismatch = TypeMismatch::new(position, self, value);
        mismatch.param = param;
        debug!(
            position,
            expected = %mismatch.expected,
            observed = %mismatch.observed,
            param = param.unwrap_or(""),
            "value rejected by declared type"
        );
        Err(mismatch)
    }
}

impl TypeDefinition for TypeDef {
    fn is_of_type(&self, value: &Value) -> bool {
        TypeDef::is_of_type(self, value)
    }

    fn type_name(&self) -> String {
        TypeDef::type_name(self)
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

impl From<Atomic> for TypeDef {
    fn from(t: Atomic) -> Self {
        TypeDef::Atomic(t)
    }
}

impl From<Nominal> for TypeDef {
    fn from(t: Nominal) -> Self {
        TypeDef::Nominal(t)
    }
}

impl From<Intersection> for TypeDef {
    fn from(t: Intersection) -> Self {
        TypeDef::Intersection(t)
    }
}

impl From<Union> for TypeDef {
    fn from(t: Union) -> Self {
        TypeDef::Union(t)
    }
}
