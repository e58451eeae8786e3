// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name lookup for nominal types.
//!
//! Type expressions built from strings (configuration files, user input) need a
//! way to tell a real class name from a typo. The registry is that check: a
//! name resolves only if a descriptor for it was registered.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConfigurationError, Result};
use crate::object::{Capability, ClassInfo};

use super::{Intersection, Nominal};

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    classes: HashMap<&'static str, &'static ClassInfo>,
}

impl TypeRegistry {
    /// An empty registry. Not even the capability interfaces resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that already knows every capability interface.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for capability in Capability::ALL {
            registry.classes.insert(capability.name(), capability.class());
        }
        registry
    }

    /// Register a descriptor and, transitively, its supertypes.
    ///
    /// Registering the same descriptor twice is fine. A different descriptor
    /// under an already registered name is rejected, and the registry is left
    /// untouched.
    pub fn register(&mut self, class: &'static ClassInfo) -> Result<()> {
        let mut pending: HashMap<&'static str, &'static ClassInfo> = HashMap::new();
        let mut stack = vec![class];
        while let Some(next) = stack.pop() {
            let known = self
                .classes
                .get(next.name())
                .or_else(|| pending.get(next.name()));
            match known {
                Some(existing) if std::ptr::eq(*existing, next) => continue,
                Some(_) => {
                    debug!(name = next.name(), "conflicting type descriptor");
                    return Err(ConfigurationError::DuplicateType {
                        name: next.name().to_string(),
                    }
                    .into());
                }
                None => {
                    pending.insert(next.name(), next);
                    stack.extend(next.supertypes().iter().copied());
                }
            }
        }

        self.classes.extend(pending);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'static ClassInfo> {
        self.classes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Resolve a name to a nominal type.
    pub fn resolve(&self, name: &str) -> Result<Nominal> {
        match self.get(name) {
            Some(class) => Ok(Nominal::of(class)),
            None => {
                debug!(name, "unknown type name");
                Err(ConfigurationError::UnknownType {
                    name: name.to_string(),
                }
                .into())
            }
        }
    }

    /// Resolve every name and intersect them. Fails on the first unknown name.
    pub fn intersection<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Intersection> {
        let members = names
            .into_iter()
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<_>>>()?;
        Intersection::new(members)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
