// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `serde` export of values and containers (feature `serde`).
//!
//! The shapes match the containers' plain-structure projections:
//!
//! | Type         | Serialized as                                             |
//! |--------------|-----------------------------------------------------------|
//! | `Collection` | sequence if positions are `0..n`, else position → element |
//! | `Map`        | projection → value, insertion order                       |
//! | `Entry`      | `{ "key": .., "value": .. }`                              |
//! | object       | member name → member value                                |
//!
//! Resources and callables have no plain form and fail to serialize.
//! Nothing is deserialized: a value's type lives in Rust code, not in the data.

use serde::ser::{Error as _, SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::cmp::EqualityService;
use crate::collection::Collection;
use crate::map::{Entry, Map};
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let members = object.members();
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (name, value) in &members {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            Value::Resource(_) | Value::Callable(_) => Err(S::Error::custom(format!(
                "cannot serialize value of type {}",
                self.debug_type()
            ))),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Entry", 2)?;
        state.serialize_field("key", self.key())?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_dense() {
            let mut seq = serializer.serialize_seq(Some(self.count()))?;
            for (_, value) in self {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.count()))?;
            for (position, value) in self {
                map.serialize_entry(&position, value)?;
            }
            map.end()
        }
    }
}

impl<E: EqualityService> Serialize for Map<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.count()))?;
        for (projection, value) in self.to_array() {
            map.serialize_entry(&projection, &value)?;
        }
        map.end()
    }
}
