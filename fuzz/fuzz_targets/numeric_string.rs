// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for numeric-string recognition.
//!
//! The `numeric` atomic type, loose equality, and key projection all lean on
//! the same recognizer. It must never panic and must agree with the parser.

#![no_main]

use libfuzzer_sys::fuzz_target;
use typed_containers::{is_numeric_str, parse_numeric, Atomic, Value};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let recognized = is_numeric_str(text);
    assert_eq!(
        recognized,
        parse_numeric(text).is_some(),
        "recognizer and parser disagree on {:?}",
        text
    );

    // The atomic check is the recognizer, nothing more
    assert_eq!(Atomic::Numeric.is_of_type(&Value::from(text)), recognized);
});
