// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Associative container keyed by string projection.
//!
//! # Key projection
//!
//! Keys are stored under a string derived from them, checked in this order:
//!
//! | Key                       | Projection            |
//! |---------------------------|-----------------------|
//! | object with `Hashable`    | `get_hash()`          |
//! | object with `Stringable`  | `to_host_string()`    |
//! | string                    | the string itself     |
//!
//! Anything else is rejected. Two different keys with the same projection are
//! the same entry: the later write wins and replaces the stored key object
//! too. The original key is kept next to the value in an [`Entry`], so
//! `keys()` and the cursor's `key()` hand back the rich key, not its projection.
//!
//! # Order
//!
//! Entries iterate in insertion order. Overwriting an existing entry keeps its
//! place; removing and re-inserting moves it to the end.
//!
//! # Equality
//!
//! Value-based operations (`contains`, `remove_if_mapped_to_key`,
//! `replace_if_old_val_matches`) ask the map's [`EqualityService`], [`Cmp`] by
//! default.

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::cmp::{Cmp, EqualityService};
use crate::contracts;
use crate::error::{RangeError, Result, TypeMismatch};
use crate::positions::Positions;
use crate::types::TypeDef;
use crate::value::Value;

/// Expected-type name reported for keys that have no projection.
pub const KEY_PROJECTION_TYPE: &str = "string|Stringable|Hashable";

/// A key as given, with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    key: Value,
    value: Value,
}

impl Entry {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &Value {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_parts(self) -> (Value, Value) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.key.debug_type(), self.value.debug_type())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) projection: String,
    pub(crate) entry: Entry,
}

/// The projection of a key, or `None` if the key cannot be projected.
pub fn project_key(key: &Value) -> Option<String> {
    match key {
        Value::Object(object) => {
            if let Some(hashable) = object.as_hashable() {
                Some(hashable.get_hash())
            } else {
                object
                    .as_stringable()
                    .map(|stringable| stringable.to_host_string())
            }
        }
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Map<E = Cmp> {
    key_type: TypeDef,
    value_type: TypeDef,
    entries: Positions<Slot>,
    index: HashMap<String, usize>,
    equality: E,
}

impl Map<Cmp> {
    pub fn new(key_type: impl Into<TypeDef>, value_type: impl Into<TypeDef>) -> Self {
        Self::with_equality(key_type, value_type, Cmp)
    }
}

impl<E: EqualityService> Map<E> {
    /// A map whose value comparisons go through `equality`.
    pub fn with_equality(
        key_type: impl Into<TypeDef>,
        value_type: impl Into<TypeDef>,
        equality: E,
    ) -> Self {
        Self {
            key_type: key_type.into(),
            value_type: value_type.into(),
            entries: Positions::new(),
            index: HashMap::new(),
            equality,
        }
    }

    pub fn key_type(&self) -> &TypeDef {
        &self.key_type
    }

    pub fn value_type(&self) -> &TypeDef {
        &self.value_type
    }

    pub fn equality(&self) -> &E {
        &self.equality
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        trace!("map cleared");
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    pub fn get(&self, key: impl Into<Value>) -> Result<Option<&Value>> {
        let projection = self.check_key(&key.into(), 1)?;
        Ok(self.entry_at(&projection).map(Entry::value))
    }

    pub fn contains_key(&self, key: impl Into<Value>) -> Result<bool> {
        let projection = self.check_key(&key.into(), 1)?;
        Ok(self.index.contains_key(&projection))
    }

    /// Whether any stored value is equal to `value`. Linear in the size of the map.
    pub fn contains(&self, value: impl Into<Value>) -> Result<bool> {
        let value = value.into();
        self.value_type.guard(&value, 1, Some("value"))?;
        Ok(self
            .entries
            .values()
            .any(|slot| self.equality.are_equal(&value, &slot.entry.value)))
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Insert, or overwrite the entry with the same projection.
    pub fn put(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let (key, value) = (key.into(), value.into());
        let projection = self.check_key(&key, 1)?;
        self.value_type.guard(&value, 2, Some("value"))?;

        self.store(projection, key, value);
        Ok(())
    }

    /// Insert only if nothing is stored under the key's projection.
    ///
    /// Returns `None` when the entry was inserted, or the value already
    /// present, in which case the map is untouched.
    pub fn put_if_absent(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        let (key, value) = (key.into(), value.into());
        let projection = self.check_key(&key, 1)?;
        self.value_type.guard(&value, 2, Some("value"))?;

        if let Some(existing) = self.entry_at(&projection) {
            return Ok(Some(existing.value.clone()));
        }
        self.store(projection, key, value);
        Ok(None)
    }

    /// Remove the entry and return its value.
    pub fn remove(&mut self, key: impl Into<Value>) -> Result<Option<Value>> {
        let projection = self.check_key(&key.into(), 1)?;
        Ok(self.take(&projection).map(|entry| entry.value))
    }

    /// Remove the entry only if its value equals `value`.
    pub fn remove_if_mapped_to_key(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<bool> {
        let (key, value) = (key.into(), value.into());
        let projection = self.check_key(&key, 1)?;
        self.value_type.guard(&value, 2, Some("value"))?;

        let matches = self
            .entry_at(&projection)
            .is_some_and(|entry| self.equality.are_equal(&value, &entry.value));
        if matches {
            self.take(&projection);
        }
        Ok(matches)
    }

    /// Overwrite an existing entry. Never inserts. Returns the previous value.
    pub fn replace(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        let (key, value) = (key.into(), value.into());
        let projection = self.check_key(&key, 1)?;
        self.value_type.guard(&value, 2, Some("value"))?;

        if !self.index.contains_key(&projection) {
            return Ok(None);
        }
        Ok(self.store(projection, key, value))
    }

    /// Compare-and-swap: overwrite only if the current value equals `old_value`.
    ///
    /// An absent key never matches.
    pub fn replace_if_old_val_matches(
        &mut self,
        key: impl Into<Value>,
        old_value: impl Into<Value>,
        new_value: impl Into<Value>,
    ) -> Result<bool> {
        let (key, old_value, new_value) = (key.into(), old_value.into(), new_value.into());
        let projection = self.check_key(&key, 1)?;
        self.value_type.guard(&old_value, 2, Some("old_value"))?;
        self.value_type.guard(&new_value, 3, Some("new_value"))?;

        let matches = self
            .entry_at(&projection)
            .is_some_and(|entry| self.equality.are_equal(&old_value, &entry.value));
        if matches {
            self.store(projection, key, new_value);
        }
        Ok(matches)
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// Original keys, in insertion order.
    pub fn keys(&self) -> Vec<Value> {
        self.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Values, in insertion order.
    pub fn values(&self) -> Vec<Value> {
        self.iter().map(|entry| entry.value.clone()).collect()
    }

    /// Projection to value, in insertion order.
    pub fn to_array(&self) -> Vec<(String, Value)> {
        self.entries
            .values()
            .map(|slot| (slot.projection.clone(), slot.entry.value.clone()))
            .collect()
    }

    /// Projection to entry, in insertion order. Keeps the original keys.
    pub fn to_array_preserve_entries(&self) -> Vec<(String, Entry)> {
        self.entries
            .values()
            .map(|slot| (slot.projection.clone(), slot.entry.clone()))
            .collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    pub fn rewind(&mut self) {
        self.entries.rewind();
    }

    pub fn valid(&self) -> bool {
        self.entries.current().is_some()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.entries.advance();
    }

    /// The value under the cursor.
    pub fn current(&self) -> Result<&Value> {
        match self.entries.current() {
            Some((_, slot)) => Ok(&slot.entry.value),
            None => Err(self.cursor_error("current").into()),
        }
    }

    /// The original key under the cursor.
    pub fn key(&self) -> Result<&Value> {
        match self.entries.current() {
            Some((_, slot)) => Ok(&slot.entry.key),
            None => Err(self.cursor_error("key").into()),
        }
    }

    fn cursor_error(&self, operation: &'static str) -> RangeError {
        if self.is_empty() {
            RangeError::EmptyContainer {
                operation,
                container: "hashTable",
            }
        } else {
            RangeError::BeyondEnd
        }
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Validate a key against the key type and project it.
    fn check_key(&self, key: &Value, position: usize) -> Result<String, TypeMismatch> {
        self.key_type.guard(key, position, Some("key"))?;
        project_key(key).ok_or_else(|| TypeMismatch {
            position,
            expected: KEY_PROJECTION_TYPE.to_string(),
            observed: key.debug_type().into_owned(),
            param: Some("key"),
        })
    }

    fn entry_at(&self, projection: &str) -> Option<&Entry> {
        let position = *self.index.get(projection)?;
        self.entries.get(position).map(|slot| &slot.entry)
    }

    /// Insert or overwrite in place. Returns the value that was replaced.
    fn store(&mut self, projection: String, key: Value, value: Value) -> Option<Value> {
        let entry = Entry::new(key, value);
        let (position, previous) = match self.index.get(&projection) {
            Some(&position) => {
                let previous = self.entries.get_mut(position).map(|slot| {
                    trace!(position, projection = %slot.projection, "entry overwritten");
                    std::mem::replace(&mut slot.entry, entry).value
                });
                (position, previous)
            }
            None => {
                let position = self.entries.push(Slot {
                    projection: projection.clone(),
                    entry,
                });
                trace!(position, projection = %projection, "entry inserted");
                self.index.insert(projection, position);
                (position, None)
            }
        };
        contracts::check_map_entry(self, position);
        previous
    }

    fn take(&mut self, projection: &str) -> Option<Entry> {
        let position = self.index.remove(projection)?;
        let slot = self.entries.remove(position)?;
        trace!(position, projection, "entry removed");
        contracts::check_map_removal(self, projection, position);
        Some(slot.entry)
    }

    pub(crate) fn slots(&self) -> &Positions<Slot> {
        &self.entries
    }

    pub(crate) fn index(&self) -> &HashMap<String, usize> {
        &self.index
    }
}

/// Iterator over entries, in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::collections::btree_map::Values<'a, usize, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &slot.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|slot| &slot.entry)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a, E: EqualityService> IntoIterator for &'a Map<E> {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
