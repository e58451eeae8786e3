// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered, type-checked sequence of values.
//!
//! # Positions
//!
//! Every element sits at an integer position. Construction and `add` assign
//! positions in increasing order; `remove` and `remove_if` take elements out
//! without renumbering the rest:
//!
//! ```text
//! [1, 2, 3].remove(2)            -> {0: 1, 2: 3}
//! [1, 2, 3, 4, 5].remove_if(odd) -> {1: 2, 3: 4}
//! ["a", "b", "a"].find(== "a")   -> {0: "a", 1: "a"}   (new collection, dense)
//! ```
//!
//! # Partial mutation
//!
//! `add` and `remove` validate one argument at a time and act on it before
//! looking at the next. When argument *k* is rejected, arguments *1..k-1*
//! have already been applied and stay applied.
//!
//! # Cursor
//!
//! Each collection carries one traversal position (`rewind`/`valid`/`next`/
//! `current`/`key`). For side-effect-free iteration use [`Collection::iter`].

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FusedIterator;

use tracing::trace;

use crate::cmp::removal_match;
use crate::contracts;
use crate::error::{RangeError, Result};
use crate::positions::Positions;
use crate::types::TypeDef;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Collection {
    element_type: TypeDef,
    elements: Positions<Value>,
}

impl Collection {
    /// An empty collection of `element_type`.
    pub fn new(element_type: impl Into<TypeDef>) -> Self {
        Self {
            element_type: element_type.into(),
            elements: Positions::new(),
        }
    }

    /// A collection pre-filled with `values`, checked in order.
    ///
    /// Fails on the first value that is not of `element_type`, naming its
    /// 1-based position. Nothing is kept from a failed construction.
    pub fn with_values<I>(element_type: impl Into<TypeDef>, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let element_type = element_type.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        for (index, value) in values.iter().enumerate() {
            element_type.guard(value, index + 1, None)?;
        }

        let mut collection = Self::new(element_type);
        for value in values {
            collection.elements.push(value);
        }
        contracts::check_collection_well_formed(&collection);
        Ok(collection)
    }

    pub fn element_type(&self) -> &TypeDef {
        &self.element_type
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove every element and reset the cursor and the position counter.
    pub fn clear(&mut self) {
        self.elements.clear();
        trace!("collection cleared");
    }

    /// Position to element, in position order.
    pub fn to_array(&self) -> BTreeMap<usize, Value> {
        self.elements
            .iter()
            .map(|(position, value)| (*position, value.clone()))
            .collect()
    }

    /// Elements in position order, without their positions.
    pub fn values(&self) -> Vec<Value> {
        self.elements.values().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Whether the positions are exactly `0..count`.
    pub fn is_dense(&self) -> bool {
        self.elements.is_dense()
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Append each value in turn.
    ///
    /// Fails at the first value that is not of the element type. Values before
    /// it have been appended; it and everything after it have not.
    pub fn add<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for (index, value) in values.into_iter().enumerate() {
            let value = value.into();
            self.element_type.guard(&value, index + 1, None)?;
            let position = self.elements.push(value);
            trace!(position, "element appended");
        }
        contracts::check_collection_well_formed(self);
        Ok(())
    }

    /// Remove every stored element equal to each value, in turn.
    ///
    /// Scalars and arrays must be identical to match. Objects match loosely:
    /// same class and loosely equal members. `EqualityTestable` is not
    /// consulted. Positions of the remaining elements do not change.
    ///
    /// Validation is interleaved the same way as [`Collection::add`]. A value
    /// that matches nothing is not an error.
    pub fn remove<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for (index, needle) in values.into_iter().enumerate() {
            let needle = needle.into();
            self.element_type.guard(&needle, index + 1, None)?;
            let removed = self.elements.retain(|stored| !removal_match(&needle, stored));
            trace!(argument = index + 1, removed, "elements removed");
        }
        contracts::check_collection_well_formed(self);
        Ok(())
    }

    /// Remove, in place, every element the filter accepts. Returns how many went.
    pub fn remove_if(&mut self, mut filter: impl FnMut(&Value) -> bool) -> usize {
        let removed = self.elements.retain(|value| !filter(value));
        trace!(removed, "elements removed by filter");
        contracts::check_collection_well_formed(self);
        removed
    }

    /// [`Collection::remove_if`] with a filter that can fail.
    ///
    /// The filter's error is returned unchanged. Elements the filter accepted
    /// before it failed are already gone.
    pub fn try_remove_if<E>(
        &mut self,
        mut filter: impl FnMut(&Value) -> std::result::Result<bool, E>,
    ) -> std::result::Result<usize, E> {
        let outcome = self
            .elements
            .try_retain(|value| filter(value).map(|matched| !matched));
        contracts::check_collection_well_formed(self);
        outcome
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// A new collection of the same type holding every element the filter
    /// accepts, at fresh positions `0..n`.
    pub fn find(&self, mut filter: impl FnMut(&Value) -> bool) -> Collection {
        let mut found = Collection::new(self.element_type.clone());
        for value in self.elements.values() {
            if filter(value) {
                found.elements.push(value.clone());
            }
        }
        found
    }

    pub fn try_find<E>(
        &self,
        mut filter: impl FnMut(&Value) -> std::result::Result<bool, E>,
    ) -> std::result::Result<Collection, E> {
        let mut found = Collection::new(self.element_type.clone());
        for value in self.elements.values() {
            if filter(value)? {
                found.elements.push(value.clone());
            }
        }
        Ok(found)
    }

    /// The first element, in position order, the filter accepts.
    pub fn find_first(&self, mut filter: impl FnMut(&Value) -> bool) -> Option<&Value> {
        self.elements.values().find(|value| filter(value))
    }

    pub fn try_find_first<E>(
        &self,
        mut filter: impl FnMut(&Value) -> std::result::Result<bool, E>,
    ) -> std::result::Result<Option<&Value>, E> {
        for value in self.elements.values() {
            if filter(value)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    pub fn rewind(&mut self) {
        self.elements.rewind();
    }

    pub fn valid(&self) -> bool {
        self.elements.current().is_some()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.elements.advance();
    }

    pub fn current(&self) -> Result<&Value> {
        match self.elements.current() {
            Some((_, value)) => Ok(value),
            None => Err(self.cursor_error("current").into()),
        }
    }

    pub fn key(&self) -> Result<usize> {
        match self.elements.current() {
            Some((position, _)) => Ok(position),
            None => Err(self.cursor_error("key").into()),
        }
    }

    fn cursor_error(&self, operation: &'static str) -> RangeError {
        if self.is_empty() {
            RangeError::EmptyContainer {
                operation,
                container: "collection",
            }
        } else {
            RangeError::BeyondEnd
        }
    }

    pub(crate) fn positions(&self) -> &Positions<Value> {
        &self.elements
    }
}

/// Iterator over `(position, element)` pairs, in position order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, usize, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(position, value)| (*position, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(position, value)| (*position, value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Collection {
    type Item = (usize, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
