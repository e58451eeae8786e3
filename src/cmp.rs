// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value equality.
//!
//! Three relations, from strictest to loosest:
//!
//! | Function       | Host operator | Objects compared by                          |
//! |----------------|---------------|----------------------------------------------|
//! | [`identical`]  | `===`         | reference                                    |
//! | [`are_equal`]  | (service)     | class, then `EqualityTestable`, then members |
//! | [`loose_equal`]| `==`          | class, then members (loosely)                |
//!
//! [`Map`](crate::Map) uses an [`EqualityService`] for its value-based
//! operations; [`Cmp`] is the default one and applies [`are_equal`].
//!
//! [`Collection::remove`](crate::Collection::remove) uses neither service nor
//! `EqualityTestable`: non-object arguments match by identity, object arguments
//! by loose equality. See [`removal_match`].

use std::cmp::Ordering;
use std::rc::Rc;

use crate::types::{parse_numeric, Numeric};
use crate::value::Value;

/// Decides whether two values are equal.
pub trait EqualityService {
    fn are_equal(&self, a: &Value, b: &Value) -> bool;
}

/// The default equality service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cmp;

impl EqualityService for Cmp {
    fn are_equal(&self, a: &Value, b: &Value) -> bool {
        are_equal(a, b)
    }
}

impl<F> EqualityService for F
where
    F: Fn(&Value, &Value) -> bool,
{
    fn are_equal(&self, a: &Value, b: &Value) -> bool {
        self(a, b)
    }
}

/// The default equality rule.
///
/// 1. Different kinds are never equal.
/// 2. Two objects are unequal if their classes differ. Otherwise the left
///    operand's `EqualityTestable` capability decides, if it has one, and
///    member-wise loose equality decides if it does not.
/// 3. Anything else must be identical.
pub fn are_equal(a: &Value, b: &Value) -> bool {
    if a.kind() != b.kind() {
        return false;
    }

    if let (Value::Object(x), Value::Object(y)) = (a, b) {
        if x.class() != y.class() {
            return false;
        }
        return match x.as_equality_testable() {
            Some(testable) => testable.is_equal_to(b),
            None => loose_equal(a, b),
        };
    }

    identical(a, b)
}

/// The host's `===`: same kind and same value, objects by reference.
pub fn identical(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| identical(l, r))
        }
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Resource(x), Value::Resource(y)) => x.id() == y.id(),
        (Value::Callable(x), Value::Callable(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// The host's `==`.
///
/// Coerces across kinds the way the host does:
///
/// - null against a string compares the string with `""`
/// - otherwise a bool or null on either side compares truthiness
/// - two numeric strings, or a number and a numeric string, compare as numbers
/// - a number and a non-numeric string compare as strings
/// - arrays compare pairwise, objects of one class member-wise
/// - a `Stringable` object against a string compares its string form
pub fn loose_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, _) | (_, Value::Null) | (Value::Bool(_), _) | (_, Value::Bool(_)) => {
            a.to_bool() == b.to_bool()
        }

        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            number(a) == number(b)
        }
        (Value::String(x), Value::String(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(l), Some(r)) => numeric_eq(l, r),
            _ => x == y,
        },
        (Value::Int(_) | Value::Float(_), Value::String(s))
        | (Value::String(s), Value::Int(_) | Value::Float(_)) => {
            let n = if matches!(a, Value::String(_)) { b } else { a };
            match parse_numeric(s) {
                Some(parsed) => numeric_eq(parsed, as_numeric(n)),
                None => number_to_string(n) == *s,
            }
        }

        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| loose_equal(l, r))
        }

        (Value::Object(x), Value::Object(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            if x.class() != y.class() {
                return false;
            }
            let (left, right) = (x.members(), y.members());
            left.len() == right.len()
                && left
                    .iter()
                    .zip(&right)
                    .all(|((ln, lv), (rn, rv))| ln == rn && loose_equal(lv, rv))
        }
        (Value::Object(object), Value::String(s)) | (Value::String(s), Value::Object(object)) => {
            object
                .as_stringable()
                .is_some_and(|stringable| stringable.to_host_string() == *s)
        }

        (Value::Resource(x), Value::Resource(y)) => x.id() == y.id(),
        (Value::Callable(x), Value::Callable(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// Whether `Collection::remove` should drop `stored` for the argument `needle`.
pub(crate) fn removal_match(needle: &Value, stored: &Value) -> bool {
    match needle {
        Value::Object(_) => loose_equal(needle, stored),
        _ => identical(needle, stored),
    }
}

fn as_numeric(value: &Value) -> Numeric {
    match value {
        Value::Int(i) => Numeric::Int(*i),
        Value::Float(x) => Numeric::Float(*x),
        _ => Numeric::Float(f64::NAN),
    }
}

fn number(value: &Value) -> f64 {
    as_numeric(value).as_f64()
}

fn numeric_eq(a: Numeric, b: Numeric) -> bool {
    match (a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => x == y,
        _ => a.as_f64().partial_cmp(&b.as_f64()) == Some(Ordering::Equal),
    }
}

/// The host's string conversion of a number.
fn number_to_string(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Float(x) if x.is_nan() => "NAN".to_string(),
        Value::Float(x) if *x == f64::INFINITY => "INF".to_string(),
        Value::Float(x) if *x == f64::NEG_INFINITY => "-INF".to_string(),
        Value::Float(x) => x.to_string(),
        _ => String::new(),
    }
}
