// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-enforced containers for dynamically typed host values.
//!
//! The host hands us values of any shape (null, numbers, strings, lists,
//! objects, handles, functions). This crate lets a consumer declare, per
//! container, which type expression its elements (or keys and values) must
//! satisfy, and rejects everything else at the boundary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   value.rs   │────▶│   types/     │────▶│  collection.rs   │
//! │ (Value, Kind)│     │ (TypeDef,    │     │  (Collection)    │
//! └──────────────┘     │  Registry)   │     └──────────────────┘
//!        │             └──────────────┘              │
//!        ▼                    ▲                      ▼
//! ┌──────────────┐            │             ┌──────────────────┐
//! │  object.rs   │────────────┘             │     map.rs       │
//! │ (ClassInfo,  │                          │  (Map, Entry)    │
//! │ capabilities)│────▶ cmp.rs ────────────▶│                  │
//! └──────────────┘   (EqualityService)      └──────────────────┘
//!                                                    │
//!                         positions.rs ◀─────────────┘
//!                     (sparse storage + cursor, shared by both)
//! ```
//!
//! # Modules
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | `value`      | `Value`, `Kind`, `Resource`, `Callable`                |
//! | `object`     | `Object`, `ClassInfo`, capability traits               |
//! | `types`      | `TypeDef` and its variants, `TypeRegistry`             |
//! | `cmp`        | `EqualityService`, `are_equal`, `loose_equal`          |
//! | `collection` | `Collection`                                           |
//! | `map`        | `Map`, `Entry`, key projection                         |
//! | `error`      | `Error`, `TypeMismatch`, `RangeError`, formatters      |
//! | `contracts`  | debug-build invariant checks                           |
//!
//! # Usage
//!
//! ```
//! use typed_containers::{Atomic, Collection, Map, Value};
//!
//! let mut ids = Collection::with_values(Atomic::Int, [1, 2, 3])?;
//! ids.remove([2])?;
//! assert_eq!(ids.to_array().keys().copied().collect::<Vec<_>>(), [0, 2]);
//! assert!(ids.add([Value::from("four")]).is_err());
//!
//! let mut names = Map::new(Atomic::String, Atomic::String);
//! names.put("C123", "Ada")?;
//! assert_eq!(names.put_if_absent("C123", "Grace")?, Some(Value::from("Ada")));
//! # Ok::<(), typed_containers::Error>(())
//! ```

pub mod cmp;
mod collection;
pub mod contracts;
mod error;
#[cfg(feature = "serde")]
mod export;
mod map;
pub mod object;
mod positions;
pub mod types;
mod value;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use cmp::{are_equal, identical, loose_equal, Cmp, EqualityService};
pub use collection::{Collection, Iter as CollectionIter};
pub use error::{
    ConfigurationError, Error, MessageFormatter, RangeError, Result, TypeErrorFormatter,
    TypeMismatch,
};
pub use map::{project_key, Entry, Iter as MapIter, Map, KEY_PROJECTION_TYPE};
pub use object::{
    Capability, ClassInfo, ClassKind, Countable, EqualityTestable, Hashable, Invocable, Object,
    Stringable, Traversable,
};
pub use types::{
    is_numeric_str, parse_numeric, Atomic, Intersection, Nominal, Numeric, TypeDef,
    TypeDefinition, TypeRegistry, Union, UnionMember,
};
pub use value::{Callable, Kind, Resource, Value};
