//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use typed_containers::{Atomic, Collection, Error, TypeMismatch, Value};

// Re-export canonical fixtures from typed_containers::testing
pub use typed_containers::testing::{
    registry, Bar, ComparableCustomer, Customer, CustomerIdentity, Foo, FooBar, Fractal,
    StringableKey, BAR_INTERFACE, FOO, FOO_INTERFACE,
};

// ============================================================================
// LOGGING
// ============================================================================

/// Route crate tracing events to the test harness output.
///
/// Honors `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Build an `int` collection, panicking on invalid input.
pub fn int_collection(values: &[i64]) -> Collection {
    Collection::with_values(Atomic::Int, values.iter().copied())
        .expect("int values always satisfy the int type")
}

/// Build a `string` collection.
pub fn string_collection(values: &[&str]) -> Collection {
    Collection::with_values(Atomic::String, values.iter().copied())
        .expect("str values always satisfy the string type")
}

// ============================================================================
// INSPECTION
// ============================================================================

/// `(position, int)` pairs of an int collection, in position order.
pub fn int_pairs(collection: &Collection) -> Vec<(usize, i64)> {
    collection
        .iter()
        .map(|(position, value)| {
            let int = value.as_int().expect("int collection holds ints");
            (position, int)
        })
        .collect()
}

/// Positions of a collection, in order.
pub fn positions(collection: &Collection) -> Vec<usize> {
    collection.iter().map(|(position, _)| position).collect()
}

/// Unwrap a `TypeMismatch`, panicking on any other error.
pub fn expect_mismatch(err: Error) -> TypeMismatch {
    match err {
        Error::TypeMismatch(mismatch) => mismatch,
        other => panic!("expected a type mismatch, got: {}", other),
    }
}

/// Identity comparison for use in assertions.
pub fn same(a: &Value, b: &Value) -> bool {
    typed_containers::identical(a, b)
}
