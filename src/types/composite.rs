// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite types: intersections of nominal types and unions of anything but unions.
//!
//! Both evaluate members in declaration order and stop at the first member that
//! decides the answer. Members may have observable side effects through
//! capability accessors, so the order is part of the contract.

use std::fmt;

use crate::error::{ConfigurationError, Result};
use crate::value::Value;

use super::{Atomic, Nominal, TypeDefinition};

/// `A&B&C`: a value must satisfy every member.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    members: Vec<Nominal>,
}

impl Intersection {
    pub fn new(members: impl IntoIterator<Item = Nominal>) -> Result<Self> {
        let members: Vec<Nominal> = members.into_iter().collect();
        if members.is_empty() {
            return Err(ConfigurationError::EmptyComposite {
                kind: "intersection",
            }
            .into());
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[Nominal] {
        &self.members
    }

    pub fn is_of_type(&self, value: &Value) -> bool {
        self.members.iter().all(|member| member.is_of_type(value))
    }

    pub fn type_name(&self) -> String {
        self.members
            .iter()
            .map(|member| member.name())
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl TypeDefinition for Intersection {
    fn is_of_type(&self, value: &Value) -> bool {
        Intersection::is_of_type(self, value)
    }

    fn type_name(&self) -> String {
        Intersection::type_name(self)
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

/// What may appear inside a union.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionMember {
    Atomic(Atomic),
    Nominal(Nominal),
    Intersection(Intersection),
}

impl UnionMember {
    pub fn is_of_type(&self, value: &Value) -> bool {
        match self {
            UnionMember::Atomic(t) => t.is_of_type(value),
            UnionMember::Nominal(t) => t.is_of_type(value),
            UnionMember::Intersection(t) => t.is_of_type(value),
        }
    }

    /// Display form inside a union; intersections are parenthesized.
    fn display_name(&self) -> String {
        match self {
            UnionMember::Atomic(t) => t.name().to_string(),
            UnionMember::Nominal(t) => t.name().to_string(),
            UnionMember::Intersection(t) => format!("({})", t.type_name()),
        }
    }
}

impl From<Atomic> for UnionMember {
    fn from(t: Atomic) -> Self {
        UnionMember::Atomic(t)
    }
}

impl From<Nominal> for UnionMember {
    fn from(t: Nominal) -> Self {
        UnionMember::Nominal(t)
    }
}

impl From<Intersection> for UnionMember {
    fn from(t: Intersection) -> Self {
        UnionMember::Intersection(t)
    }
}

/// `A|B|(C&D)`: a value must satisfy at least one member.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    members: Vec<UnionMember>,
}

impl Union {
    pub fn new(members: impl IntoIterator<Item = UnionMember>) -> Result<Self> {
        let members: Vec<UnionMember> = members.into_iter().collect();
        if members.is_empty() {
            return Err(ConfigurationError::EmptyComposite { kind: "union" }.into());
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[UnionMember] {
        &self.members
    }

    pub fn is_of_type(&self, value: &Value) -> bool {
        self.members.iter().any(|member| member.is_of_type(value))
    }

    pub fn type_name(&self) -> String {
        self.members
            .iter()
            .map(UnionMember::display_name)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl TypeDefinition for Union {
    fn is_of_type(&self, value: &Value) -> bool {
        Union::is_of_type(self, value)
    }

    fn type_name(&self) -> String {
        Union::type_name(self)
    }
}

impl fmt::Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
