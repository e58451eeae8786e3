// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::error::Result;
use crate::object::ClassInfo;
use crate::value::Value;

use super::{TypeDefinition, TypeRegistry};

/// A class, interface or enum type.
///
/// Build one from a descriptor you can name in code with [`Nominal::of`], or
/// from a runtime string through a [`TypeRegistry`] with [`Nominal::named`],
/// which fails for names the registry does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nominal {
    class: &'static ClassInfo,
}

impl Nominal {
    pub const fn of(class: &'static ClassInfo) -> Self {
        Self { class }
    }

    pub fn named(registry: &TypeRegistry, name: &str) -> Result<Self> {
        registry.resolve(name)
    }

    pub fn class(&self) -> &'static ClassInfo {
        self.class
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn is_of_type(&self, value: &Value) -> bool {
        match value {
            Value::Object(object) => object.is_instance_of(self.class),
            _ => false,
        }
    }
}

impl TypeDefinition for Nominal {
    fn is_of_type(&self, value: &Value) -> bool {
        Nominal::is_of_type(self, value)
    }

    fn type_name(&self) -> String {
        self.name().to_string()
    }
}

impl fmt::Display for Nominal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
