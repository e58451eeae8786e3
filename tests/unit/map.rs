//! Map: key projection, conditional operations, validation, cursor.

use super::common::{expect_mismatch, init_tracing, same, Customer, CustomerIdentity, StringableKey};
use typed_containers::object::{HASHABLE, STRINGABLE};
use typed_containers::{Atomic, Entry, Map, Nominal, TypeDef, Union, UnionMember, Value};

fn key_type() -> TypeDef {
    Union::new([
        UnionMember::from(Atomic::String),
        Nominal::of(&STRINGABLE).into(),
        Nominal::of(&HASHABLE).into(),
    ])
    .unwrap()
    .into()
}

fn customers() -> Map {
    Map::new(key_type(), Atomic::String)
}

// ============================================================================
// PUT / GET
// ============================================================================

#[test]
fn put_if_absent_conflict_returns_existing() {
    let mut m = customers();
    m.put("k1", "C123").unwrap();
    assert_eq!(
        m.put_if_absent("k1", "C456").unwrap(),
        Some(Value::from("C123"))
    );
    assert_eq!(m.count(), 1);
    assert_eq!(m.values(), [Value::from("C123")]);
}

#[test]
fn overwrite_keeps_position_and_takes_new_key() {
    init_tracing();
    let mut m = customers();
    let old_key = Value::object(StringableKey::new("a"));
    let new_key = Value::object(StringableKey::new("a"));
    m.put(&old_key, "1").unwrap();
    m.put("b", "2").unwrap();
    m.put(&new_key, "3").unwrap();

    let keys = m.keys();
    assert_eq!(keys.len(), 2);
    assert!(same(&keys[0], &new_key));
    assert_eq!(m.values(), [Value::from("3"), Value::from("2")]);
}

#[test]
fn get_on_missing_key_is_none() {
    let m = customers();
    assert_eq!(m.get("nope").unwrap(), None);
    assert!(!m.contains_key("nope").unwrap());
}

// ============================================================================
// PROJECTION
// ============================================================================

#[test]
fn stringable_keys_with_equal_projection_are_one_key() {
    let mut m = customers();
    let one = Value::object(StringableKey::new("1"));
    let also_one = Value::object(StringableKey::new("1"));
    m.put(&one, "first").unwrap();
    assert!(m.contains_key(&also_one).unwrap());
    assert!(m.contains_key("1").unwrap());
    assert_eq!(m.get(&also_one).unwrap(), Some(&Value::from("first")));
}

#[test]
fn hashable_projection_is_preferred() {
    let mut m = customers();
    m.put(Value::object(CustomerIdentity::new("eu", 7)), "Ada").unwrap();
    assert!(m.contains_key("eu:7").unwrap());
    assert!(!m.contains_key("eu/7").unwrap());
}

#[test]
fn to_array_flattens_and_preserve_entries_keeps_keys() {
    let mut m = customers();
    let rich = Value::object(CustomerIdentity::new("us", 1));
    m.put(&rich, "Grace").unwrap();
    m.put("plain", "Lin").unwrap();

    assert_eq!(
        m.to_array(),
        [
            ("us:1".to_string(), Value::from("Grace")),
            ("plain".to_string(), Value::from("Lin")),
        ]
    );

    let entries = m.to_array_preserve_entries();
    assert_eq!(entries[0].0, "us:1");
    assert!(same(entries[0].1.key(), &rich));
    assert_eq!(entries[1].1, Entry::new("plain", "Lin"));
}

// ============================================================================
// CONDITIONAL OPERATIONS
// ============================================================================

#[test]
fn compare_and_swap_mismatch_does_nothing() {
    let mut m = customers();
    m.put("k", "current").unwrap();
    assert!(!m.replace_if_old_val_matches("k", "stale", "next").unwrap());
    assert_eq!(m.get("k").unwrap(), Some(&Value::from("current")));
}

#[test]
fn conditional_removal_and_replace() {
    let mut m = Map::new(Atomic::String, Atomic::Object);
    m.put("c", Value::object(Customer::new("C1"))).unwrap();

    assert!(!m
        .remove_if_mapped_to_key("c", Value::object(Customer::new("C2")))
        .unwrap());
    assert_eq!(
        m.replace("c", Value::object(Customer::new("C3")))
            .unwrap()
            .and_then(|v| v.downcast_ref::<Customer>().map(|c| c.id.clone())),
        Some("C1".to_string())
    );
    // A separate, member-wise equal instance counts as the mapped value.
    assert!(m
        .remove_if_mapped_to_key("c", Value::object(Customer::new("C3")))
        .unwrap());
    assert!(m.is_empty());
}

#[test]
fn contains_scans_values() {
    let mut m = customers();
    m.put("a", "x").unwrap();
    m.put("b", "y").unwrap();
    assert!(m.contains("y").unwrap());
    assert!(!m.contains("z").unwrap());
}

#[test]
fn custom_equality_service() {
    let case_insensitive = |a: &Value, b: &Value| match (a.as_str(), b.as_str()) {
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        _ => false,
    };
    let mut m = Map::with_equality(Atomic::String, Atomic::String, case_insensitive);
    m.put("k", "Hello").unwrap();
    assert!(m.contains("HELLO").unwrap());
    assert!(m.replace_if_old_val_matches("k", "hello", "bye").unwrap());
    assert_eq!(m.get("k").unwrap(), Some(&Value::from("bye")));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn mismatches_carry_param_names() {
    let mut m = customers();
    let err = expect_mismatch(m.put(1, "x").unwrap_err());
    assert_eq!((err.position, err.param), (1, Some("key")));
    assert_eq!(err.expected, "string|Stringable|Hashable");

    let err = expect_mismatch(m.put_if_absent("k", 2).unwrap_err());
    assert_eq!((err.position, err.param), (2, Some("value")));

    let err = expect_mismatch(m.replace_if_old_val_matches("k", 1, "x").unwrap_err());
    assert_eq!((err.position, err.param), (2, Some("old_value")));
    assert_eq!(
        err.to_string(),
        "Argument #2 (old_value) must be of type string, int given"
    );

    let err = expect_mismatch(m.get(Value::object(Customer::new("C1"))).unwrap_err());
    assert_eq!(err.observed, "Customer");
    assert!(m.is_empty());
}

// ============================================================================
// CURSOR
// ============================================================================

#[test]
fn cursor_yields_key_objects_and_values() {
    let mut m = customers();
    let k1 = Value::object(StringableKey::new("1"));
    m.put(&k1, "one").unwrap();
    m.put("2", "two").unwrap();

    m.rewind();
    assert!(same(m.key().unwrap(), &k1));
    assert_eq!(m.current().unwrap(), &Value::from("one"));
    m.next();
    assert_eq!(m.key().unwrap(), &Value::from("2"));
    m.next();
    assert!(!m.valid());
    assert_eq!(
        m.key().unwrap_err().to_string(),
        "pointer moved beyond end of elements"
    );
}

#[test]
fn cursor_on_empty_map() {
    let m = customers();
    assert_eq!(
        m.current().unwrap_err().to_string(),
        "called current on empty hashTable"
    );
    assert_eq!(
        m.key().unwrap_err().to_string(),
        "called key on empty hashTable"
    );
}

#[test]
fn iterator_is_independent_of_cursor() {
    let mut m = customers();
    m.put("a", "1").unwrap();
    m.put("b", "2").unwrap();
    m.next();
    let keys: Vec<&Value> = m.iter().map(Entry::key).collect();
    assert_eq!(keys, [&Value::from("a"), &Value::from("b")]);
    assert_eq!(m.key().unwrap(), &Value::from("b"));
}
