// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Atomic types: the fixed set of primitive categories.
//!
//! Most of these are a variant check on [`Value`]. Three are duck-typed shape
//! checks with no single native counterpart:
//!
//! - `numeric`: ints, floats, and strings that spell a decimal number
//! - `countable`: arrays and objects with the `Countable` capability
//! - `iterable`: arrays and objects with the `Traversable` capability
//!
//! `callable` likewise accepts function values and `Invocable` objects.

use std::fmt;

use crate::value::Value;

use super::TypeDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Atomic {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
    Resource,
    Callable,
    Numeric,
    Countable,
    Iterable,
}

impl Atomic {
    pub const ALL: [Atomic; 12] = [
        Atomic::Null,
        Atomic::Bool,
        Atomic::Int,
        Atomic::Float,
        Atomic::String,
        Atomic::Array,
        Atomic::Object,
        Atomic::Resource,
        Atomic::Callable,
        Atomic::Numeric,
        Atomic::Countable,
        Atomic::Iterable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Atomic::Null => "null",
            Atomic::Bool => "bool",
            Atomic::Int => "int",
            Atomic::Float => "float",
            Atomic::String => "string",
            Atomic::Array => "array",
            Atomic::Object => "object",
            Atomic::Resource => "resource",
            Atomic::Callable => "callable",
            Atomic::Numeric => "numeric",
            Atomic::Countable => "countable",
            Atomic::Iterable => "iterable",
        }
    }

    pub fn is_of_type(self, value: &Value) -> bool {
        match self {
            Atomic::Null => matches!(value, Value::Null),
            Atomic::Bool => matches!(value, Value::Bool(_)),
            Atomic::Int => matches!(value, Value::Int(_)),
            Atomic::Float => matches!(value, Value::Float(_)),
            Atomic::String => matches!(value, Value::String(_)),
            Atomic::Array => matches!(value, Value::Array(_)),
            Atomic::Object => matches!(value, Value::Object(_)),
            Atomic::Resource => matches!(value, Value::Resource(_)),
            Atomic::Callable => match value {
                Value::Callable(_) => true,
                Value::Object(object) => object.as_invocable().is_some(),
                _ => false,
            },
            Atomic::Numeric => match value {
                Value::Int(_) | Value::Float(_) => true,
                Value::String(s) => is_numeric_str(s),
                _ => false,
            },
            Atomic::Countable => match value {
                Value::Array(_) => true,
                Value::Object(object) => object.as_countable().is_some(),
                _ => false,
            },
            Atomic::Iterable => match value {
                Value::Array(_) => true,
                Value::Object(object) => object.as_traversable().is_some(),
                _ => false,
            },
        }
    }
}

impl TypeDefinition for Atomic {
    fn is_of_type(&self, value: &Value) -> bool {
        Atomic::is_of_type(*self, value)
    }

    fn type_name(&self) -> String {
        self.name().to_string()
    }
}

impl fmt::Display for Atomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(x) => x,
        }
    }
}

/// Whitespace the host skips around numeric strings.
fn is_numeric_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Whether `s` is a numeric string.
///
/// Grammar: optional surrounding whitespace, an optional sign, then either
/// digits with an optional `.` and fraction, or `.` followed by digits, then
/// an optional exponent (`e`/`E`, optional sign, at least one digit).
/// `"1."`, `".5"`, `" 1e3 "` are numeric; `"."`, `"1e"`, `"0x1A"`, `"a1"` are not.
pub fn is_numeric_str(s: &str) -> bool {
    scan_numeric(s.as_bytes()).is_some()
}

/// Parse a numeric string, or `None` if it is not one.
///
/// Integral literals that fit an `i64` come back as `Numeric::Int`; anything
/// with a fraction, an exponent, or out of range is a float.
pub fn parse_numeric(s: &str) -> Option<Numeric> {
    let (start, end, integral) = scan_numeric(s.as_bytes())?;
    let literal = &s[start..end];
    if integral {
        if let Ok(i) = literal.parse::<i64>() {
            return Some(Numeric::Int(i));
        }
    }
    literal.parse::<f64>().ok().map(Numeric::Float)
}

/// Returns the trimmed literal's byte range and whether it is integral.
fn scan_numeric(bytes: &[u8]) -> Option<(usize, usize, bool)> {
    let mut i = 0;
    while i < bytes.len() && is_numeric_whitespace(bytes[i]) {
        i += 1;
    }
    let start = i;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    let mut has_dot = false;
    if i < bytes.len() && bytes[i] == b'.' {
        has_dot = true;
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mut has_exponent = false;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits == 0 {
            return None;
        }
        has_exponent = true;
        i = j + exp_digits;
    }
    let end = i;

    while i < bytes.len() && is_numeric_whitespace(bytes[i]) {
        i += 1;
    }
    if i != bytes.len() {
        return None;
    }

    Some((start, end, !has_dot && !has_exponent))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
