// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the equality relations.
//!
//! Loose equality is symmetric and never panics on mixed kinds. Strict
//! equality implies loose equality for every non-float pair.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typed_containers::{are_equal, loose_equal, Value};

#[derive(Debug, Arbitrary)]
enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_value(self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::from(b),
            Scalar::Int(i) => Value::from(i),
            Scalar::Float(x) => Value::from(x),
            Scalar::Text(s) => Value::from(s),
        }
    }
}

fuzz_target!(|pair: (Scalar, Scalar)| {
    let a = pair.0.into_value();
    let b = pair.1.into_value();

    assert_eq!(
        loose_equal(&a, &b),
        loose_equal(&b, &a),
        "loose equality is not symmetric for {:?} and {:?}",
        a,
        b
    );

    if are_equal(&a, &b) {
        assert!(loose_equal(&a, &b), "{:?} === {:?} but not ==", a, b);
    }
});
