// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for collection operation sequences.
//!
//! Replays arbitrary add/remove/cursor sequences against a model of
//! (position, value) pairs. Positions only grow and survivors keep theirs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typed_containers::{Atomic, Collection, Value};

#[derive(Debug, Arbitrary)]
enum Op {
    Add(Vec<i8>),
    Remove(Vec<i8>),
    RemoveOdd,
    Clear,
    Walk,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut collection = Collection::new(Atomic::Int);
    let mut model: Vec<(usize, i64)> = Vec::new();
    let mut next_free = 0usize;

    for op in ops.into_iter().take(64) {
        match op {
            Op::Add(values) => {
                collection
                    .add(values.iter().map(|&v| Value::from(v as i64)))
                    .expect("ints are ints");
                for v in values {
                    model.push((next_free, v as i64));
                    next_free += 1;
                }
            }
            Op::Remove(values) => {
                collection
                    .remove(values.iter().map(|&v| Value::from(v as i64)))
                    .expect("ints are ints");
                model.retain(|(_, v)| !values.iter().any(|&n| n as i64 == *v));
            }
            Op::RemoveOdd => {
                let removed = collection.remove_if(|v| v.as_int().is_some_and(|i| i % 2 != 0));
                let before = model.len();
                model.retain(|(_, v)| v % 2 == 0);
                assert_eq!(removed, before - model.len());
            }
            Op::Clear => {
                collection.clear();
                model.clear();
                next_free = 0;
            }
            Op::Walk => {
                let mut walked = Vec::new();
                collection.rewind();
                while collection.valid() {
                    let position = collection.key().expect("valid cursor has a key");
                    let value = collection.current().expect("valid cursor has a value");
                    walked.push((position, value.as_int().expect("ints only")));
                    collection.next();
                }
                assert_eq!(walked, model);
            }
        }

        let actual: Vec<(usize, i64)> = collection
            .iter()
            .map(|(p, v)| (p, v.as_int().expect("ints only")))
            .collect();
        assert_eq!(actual, model);
    }
});
