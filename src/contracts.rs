// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the containers' internal bookkeeping.
//!
//! Every mutating container operation calls one of these afterwards. They
//! are `debug_assert!` checks, so release builds skip them, and they only
//! look at structure: no user code (type predicates, capability accessors)
//! runs inside a contract.
//!
//! | Contract                        | Checked after                        |
//! |---------------------------------|--------------------------------------|
//! | `check_collection_well_formed`  | every `Collection` mutation          |
//! | `check_map_entry`               | a `Map` insert or overwrite          |
//! | `check_map_removal`             | a `Map` removal                      |
//! | `check_map_well_formed`         | on demand (full scan, O(n))          |
//!
//! The per-mutation map contracts only look at the touched entry, so a
//! debug-build `put` stays O(1).
//!
//! # INVARIANTS
//!
//! - Every stored position is below the next position to be handed out.
//!   Positions only grow, so a removed position is never reused.
//! - A map's projection index and its entry store describe the same set of
//!   entries: same size, and each indexed position holds the entry with
//!   that projection.

use std::collections::HashMap;

use crate::cmp::EqualityService;
use crate::collection::Collection;
use crate::map::{Map, Slot};
use crate::positions::Positions;

// ============================================================================
// CONTAINER CONTRACTS
// ============================================================================

/// # Panics (debug builds only)
/// Panics if a position is at or above the next free position.
#[inline]
pub fn check_collection_well_formed(collection: &Collection) {
    check_positions_in_bounds(collection.positions());
}

/// # Panics (debug builds only)
/// Panics if the projection index and the entry store disagree.
#[inline]
pub fn check_map_well_formed<E: EqualityService>(map: &Map<E>) {
    check_positions_in_bounds(map.slots());
    check_projection_index(map.slots(), map.index());
}

/// # Panics (debug builds only)
/// Panics if the entry at `position` is missing or not indexed under its
/// projection, or if index and store sizes differ.
#[inline]
pub fn check_map_entry<E: EqualityService>(map: &Map<E>, position: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_positions_in_bounds(map.slots());
    check_index_size(map.slots(), map.index());
    let slot = map.slots().get(position);
    debug_assert!(
        slot.is_some(),
        "Contract violation: no entry at touched position {}",
        position
    );
    if let Some(slot) = slot {
        let indexed = map.index().get(&slot.projection);
        debug_assert_eq!(
            indexed,
            Some(&position),
            "Contract violation: entry at {} with projection {:?} is indexed at {:?}",
            position,
            slot.projection,
            indexed
        );
    }
}

/// # Panics (debug builds only)
/// Panics if the removed projection is still indexed, its position still
/// holds an entry, or index and store sizes differ.
#[inline]
pub fn check_map_removal<E: EqualityService>(map: &Map<E>, projection: &str, position: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_index_size(map.slots(), map.index());
    debug_assert!(
        !map.index().contains_key(projection),
        "Contract violation: removed projection {:?} is still indexed",
        projection
    );
    debug_assert!(
        map.slots().get(position).is_none(),
        "Contract violation: removed position {} still holds an entry",
        position
    );
}

// ============================================================================
// STORAGE CONTRACTS
// ============================================================================

#[inline]
fn check_positions_in_bounds<T>(positions: &Positions<T>) {
    debug_assert!(
        positions.positions_in_bounds(),
        "Contract violation: position at or beyond next free position {}",
        positions.next_free()
    );
}

#[inline]
fn check_projection_index(slots: &Positions<Slot>, index: &HashMap<String, usize>) {
    if !cfg!(debug_assertions) {
        return;
    }

    check_index_size(slots, index);

    for (position, slot) in slots.iter() {
        let indexed = index.get(&slot.projection);
        debug_assert_eq!(
            indexed,
            Some(position),
            "Contract violation: entry at {} with projection {:?} is indexed at {:?}",
            position,
            slot.projection,
            indexed
        );
    }
}

#[inline]
fn check_index_size(slots: &Positions<Slot>, index: &HashMap<String, usize>) {
    debug_assert_eq!(
        slots.len(),
        index.len(),
        "Contract violation: {} entries but {} indexed projections",
        slots.len(),
        index.len()
    );
}
