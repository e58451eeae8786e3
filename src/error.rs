// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three kinds, all programmer-error signals surfaced straight to the caller:
//!
//! | Kind            | Raised when                                              |
//! |-----------------|----------------------------------------------------------|
//! | `Configuration` | a type expression cannot be built (unknown name, empty)  |
//! | `TypeMismatch`  | a value fails the declared type of a container argument  |
//! | `Range`         | `current`/`key` is read while the cursor is undefined    |
//!
//! None of them is transient. Nothing here is retried or rolled back.

use std::fmt;

use thiserror::Error;

use crate::types::TypeDef;
use crate::value::Value;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
    #[error(transparent)]
    Range(#[from] RangeError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("given type name {name} is not a class, interface or enum that exists")]
    UnknownType { name: String },
    #[error("{kind} type needs at least one member")]
    EmptyComposite { kind: &'static str },
    #[error("type name {name} is already registered to a different definition")]
    DuplicateType { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("called {operation} on empty {container}")]
    EmptyContainer {
        operation: &'static str,
        container: &'static str,
    },
    #[error("pointer moved beyond end of elements")]
    BeyondEnd,
}

/// A value was rejected by a declared type.
///
/// `position` is the 1-based argument position within the call that supplied
/// the value. `param` names the parameter when the operation has named ones
/// (map operations); variadic operations leave it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub position: usize,
    pub expected: String,
    pub observed: String,
    pub param: Option<&'static str>,
}

impl TypeMismatch {
    pub fn new(position: usize, expected: &TypeDef, value: &Value) -> Self {
        Self {
            position,
            expected: expected.type_name(),
            observed: value.debug_type().into_owned(),
            param: None,
        }
    }

    pub fn with_param(mut self, param: &'static str) -> Self {
        self.param = Some(param);
        self
    }

    /// Render with a caller-supplied formatter instead of the default one.
    pub fn render(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.format(self.position, &self.expected, &self.observed, self.param)
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&TypeErrorFormatter))
    }
}

impl std::error::Error for TypeMismatch {}

/// Turns the parts of a type mismatch into a human-readable message.
pub trait MessageFormatter {
    fn format(
        &self,
        position: usize,
        expected: &str,
        observed: &str,
        param: Option<&str>,
    ) -> String;
}

/// `Argument #2 (value) must be of type Foo, Bar given`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeErrorFormatter;

impl MessageFormatter for TypeErrorFormatter {
    fn format(
        &self,
        position: usize,
        expected: &str,
        observed: &str,
        param: Option<&str>,
    ) -> String {
        match param {
            Some(param) => format!(
                "Argument #{} ({}) must be of type {}, {} given",
                position, param, expected, observed
            ),
            None => format!(
                "Argument #{} must be of type {}, {} given",
                position, expected, observed
            ),
        }
    }
}
