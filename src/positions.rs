// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position-keyed storage with an internal cursor.
//!
//! Both containers keep their contents here. Positions are handed out in
//! increasing order and never renumbered, so removing an element leaves a gap:
//!
//! ```text
//! push a, b, c      {0: a, 1: b, 2: c}   next_free = 3
//! remove 1          {0: a, 2: c}         next_free = 3
//! push d            {0: a, 2: c, 3: d}   next_free = 4
//! ```
//!
//! The cursor is a lower bound, not a slot: the current element is the first
//! one at or after it. Removing the current element therefore moves the cursor
//! onto its successor, and pushing after the cursor ran off the end makes the
//! new element current.

use std::collections::btree_map::{self, BTreeMap};
use std::convert::Infallible;

#[derive(Debug, Clone)]
pub(crate) struct Positions<T> {
    slots: BTreeMap<usize, T>,
    next_free: usize,
    cursor: usize,
}

impl<T> Default for Positions<T> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_free: 0,
            cursor: 0,
        }
    }
}

impl<T> Positions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The position the next `push` will use.
    pub fn next_free(&self) -> usize {
        self.next_free
    }

    /// Append at the next free position and return it.
    pub fn push(&mut self, item: T) -> usize {
        let position = self.next_free;
        self.slots.insert(position, item);
        self.next_free += 1;
        position
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(&position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.slots.get_mut(&position)
    }

    pub fn remove(&mut self, position: usize) -> Option<T> {
        self.slots.remove(&position)
    }

    /// Keep only the items `keep` approves of, visiting them in position order.
    ///
    /// Stops at the first error. Items already dropped stay dropped.
    pub fn try_retain<E>(
        &mut self,
        mut keep: impl FnMut(&T) -> Result<bool, E>,
    ) -> Result<usize, E> {
        let positions: Vec<usize> = self.slots.keys().copied().collect();
        let mut removed = 0;
        for position in positions {
            let Some(item) = self.slots.get(&position) else {
                continue;
            };
            if !keep(item)? {
                self.slots.remove(&position);
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        match self.try_retain(|item| Ok::<_, Infallible>(keep(item))) {
            Ok(removed) => removed,
            Err(never) => match never {},
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.next_free = 0;
        self.cursor = 0;
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, T> {
        self.slots.iter()
    }

    pub fn values(&self) -> btree_map::Values<'_, usize, T> {
        self.slots.values()
    }

    // ========================================================================
    // CURSOR
    // ========================================================================

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// The element under the cursor with its position.
    pub fn current(&self) -> Option<(usize, &T)> {
        self.slots
            .range(self.cursor..)
            .next()
            .map(|(position, item)| (*position, item))
    }

    /// Move past the current element. A no-op once the cursor is past the end.
    pub fn advance(&mut self) {
        if let Some((position, _)) = self.current() {
            self.cursor = position + 1;
        }
    }

    /// Whether every position is below `next_free`. Used by the debug contracts.
    pub fn positions_in_bounds(&self) -> bool {
        self.slots
            .keys()
            .next_back()
            .map_or(true, |last| *last < self.next_free)
    }

    /// Whether the positions are exactly `0..len`.
    pub fn is_dense(&self) -> bool {
        self.slots
            .keys()
            .enumerate()
            .all(|(expected, position)| expected == *position)
    }
}
