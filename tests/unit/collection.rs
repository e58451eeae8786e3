//! Collection: construction, interleaved mutation, sparse positions, cursor.

use super::common::{
    expect_mismatch, int_collection, int_pairs, positions, string_collection, ComparableCustomer,
    Customer, Foo, FOO,
};
use typed_containers::{Atomic, Collection, Error, Nominal, RangeError, Value};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn invalid_element_at_k_is_named_and_nothing_is_kept() {
    let err = Collection::with_values(
        Nominal::of(&FOO),
        [
            Value::object(Foo::new(1)),
            Value::object(Foo::new(2)),
            Value::object(Customer::new("C1")),
        ],
    )
    .unwrap_err();
    let mismatch = expect_mismatch(err);
    assert_eq!(mismatch.position, 3);
    assert_eq!(mismatch.expected, "Foo");
    assert_eq!(mismatch.observed, "Customer");
    assert_eq!(mismatch.param, None);
    assert_eq!(
        mismatch.to_string(),
        "Argument #3 must be of type Foo, Customer given"
    );
}

#[test]
fn empty_construction() {
    let c = Collection::with_values(Atomic::Int, Vec::<Value>::new()).unwrap();
    assert!(c.is_empty());
    assert_eq!(c.count(), 0);
    assert!(c.to_array().is_empty());
}

// ============================================================================
// ADD / REMOVE
// ============================================================================

#[test]
fn add_keeps_values_before_the_failure() {
    let mut c = int_collection(&[]);
    let err = c
        .add([Value::from(1), Value::from(2), Value::from(2.5), Value::from(3)])
        .unwrap_err();
    assert_eq!(expect_mismatch(err).position, 3);
    assert_eq!(int_pairs(&c), [(0, 1), (1, 2)]);
}

#[test]
fn remove_two_and_missing_five() {
    let mut c = int_collection(&[1, 2, 3]);
    c.remove([2, 5]).unwrap();
    assert_eq!(int_pairs(&c), [(0, 1), (2, 3)]);
    assert_eq!(c.count(), 2);
}

#[test]
fn remove_is_multiset() {
    let mut c = string_collection(&["a", "b", "a", "c", "a"]);
    c.remove(["a"]).unwrap();
    assert_eq!(positions(&c), [1, 3]);
    assert_eq!(c.values(), [Value::from("b"), Value::from("c")]);
}

#[test]
fn remove_matches_objects_loosely_and_ignores_capability() {
    let mut c = Collection::new(Atomic::Object);
    c.add([
        Value::object(ComparableCustomer::new("C1", "Ada")),
        Value::object(ComparableCustomer::new("C1", "Grace")),
    ])
    .unwrap();

    // Equal under EqualityTestable, but not member-wise: nothing removed.
    c.remove([Value::object(ComparableCustomer::new("C1", "Lin"))])
        .unwrap();
    assert_eq!(c.count(), 2);

    // Member-wise equal to the first one only.
    c.remove([Value::object(ComparableCustomer::new("C1", "Ada"))])
        .unwrap();
    assert_eq!(positions(&c), [1]);
}

#[test]
fn remove_uses_identity_for_scalars() {
    let mut c = Collection::with_values(Atomic::Numeric, [Value::from(1), Value::from("1")])
        .unwrap();
    c.remove([1]).unwrap();
    assert_eq!(c.values(), [Value::from("1")]);
}

#[test]
fn remove_if_three_or_five() {
    let mut c = int_collection(&[1, 2, 3, 4, 5]);
    c.remove_if(|v| v.as_int() == Some(3) || v.as_int() == Some(5));
    assert_eq!(int_pairs(&c), [(0, 1), (1, 2), (3, 4)]);
}

#[test]
fn new_elements_follow_the_highest_position() {
    let mut c = int_collection(&[1, 2, 3]);
    c.remove([3]).unwrap();
    c.add([4]).unwrap();
    assert_eq!(int_pairs(&c), [(0, 1), (1, 2), (3, 4)]);
}

// ============================================================================
// FIND
// ============================================================================

#[test]
fn find_returns_dense_copy() {
    let c = string_collection(&["a", "b", "c", "b"]);
    let found = c.find(|v| v.as_str() == Some("b"));
    assert_eq!(positions(&found), [0, 1]);
    assert_eq!(found.values(), [Value::from("b"), Value::from("b")]);
    assert!(found.is_dense());
}

#[test]
fn find_after_removal_is_still_dense() {
    let mut c = int_collection(&[1, 2, 3, 4]);
    c.remove([1]).unwrap();
    let found = c.find(|_| true);
    assert_eq!(int_pairs(&found), [(0, 2), (1, 3), (2, 4)]);
}

#[test]
fn find_first_respects_position_order() {
    let c = int_collection(&[5, 8, 10]);
    let even = c.find_first(|v| v.as_int().is_some_and(|i| i % 2 == 0));
    assert_eq!(even, Some(&Value::from(8)));
    assert!(c.find_first(|v| v.is_null()).is_none());
}

#[test]
fn failing_filter_propagates() {
    #[derive(Debug, PartialEq)]
    struct FilterFailed(i64);

    let mut c = int_collection(&[1, 2, 3]);
    let filter = |v: &Value| match v.as_int() {
        Some(3) => Err(FilterFailed(3)),
        other => Ok(other == Some(1)),
    };
    assert_eq!(c.try_find(filter).unwrap_err(), FilterFailed(3));
    assert_eq!(c.try_find_first(filter).unwrap(), Some(&Value::from(1)));
    assert_eq!(c.try_remove_if(filter).unwrap_err(), FilterFailed(3));
    assert_eq!(int_pairs(&c), [(1, 2), (2, 3)]);
}

// ============================================================================
// CURSOR
// ============================================================================

#[test]
fn cursor_errors_on_empty() {
    let c = int_collection(&[]);
    assert_eq!(
        c.current().unwrap_err().to_string(),
        "called current on empty collection"
    );
    assert_eq!(
        c.key().unwrap_err(),
        Error::Range(RangeError::EmptyContainer {
            operation: "key",
            container: "collection"
        })
    );
}

#[test]
fn cursor_errors_after_overrun() {
    let mut c = int_collection(&[1]);
    c.next();
    c.next();
    assert!(!c.valid());
    assert_eq!(
        c.current().unwrap_err().to_string(),
        "pointer moved beyond end of elements"
    );
    assert_eq!(
        c.key().unwrap_err().to_string(),
        "pointer moved beyond end of elements"
    );
}

#[test]
fn cursor_traversal_matches_iter() {
    let mut c = int_collection(&[1, 2, 3, 4]);
    c.remove([2]).unwrap();

    let mut walked = Vec::new();
    c.rewind();
    while c.valid() {
        walked.push((c.key().unwrap(), c.current().unwrap().as_int().unwrap()));
        c.next();
    }
    assert_eq!(walked, int_pairs(&c));
}

#[test]
fn rewind_on_empty_is_a_no_op() {
    let mut c = int_collection(&[]);
    c.rewind();
    assert!(!c.valid());
}
