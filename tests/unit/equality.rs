//! Equality service, host `==` and `===`.

use super::common::{ComparableCustomer, Customer, Foo, StringableKey};
use typed_containers::{are_equal, identical, loose_equal, Cmp, EqualityService, Value};

#[test]
fn kinds_never_cross() {
    let pairs = [
        (Value::from(1), Value::from("1")),
        (Value::from(0), Value::from(false)),
        (Value::Null, Value::from("")),
        (Value::from(1), Value::from(1.0)),
    ];
    for (a, b) in &pairs {
        assert!(!are_equal(a, b), "{:?} vs {:?}", a, b);
        assert!(loose_equal(a, b), "{:?} vs {:?} should be loosely equal", a, b);
    }
}

#[test]
fn capability_overrides_member_comparison() {
    let ada = Value::object(ComparableCustomer::new("C1", "Ada"));
    let renamed = Value::object(ComparableCustomer::new("C1", "Ada Lovelace"));
    assert!(Cmp.are_equal(&ada, &renamed));
    assert!(!loose_equal(&ada, &renamed));
}

#[test]
fn member_comparison_is_loose() {
    let a = Value::object(Foo::new(1));
    let b = Value::object(Foo::new(1));
    let c = Value::object(Foo::new(2));
    assert!(are_equal(&a, &b));
    assert!(!are_equal(&a, &c));
    assert!(!identical(&a, &b));
    assert!(identical(&a, &a.clone()));
}

#[test]
fn class_mismatch_beats_equal_members() {
    let customer = Value::object(Customer::new("1"));
    let key = Value::object(StringableKey::new("1"));
    assert!(!are_equal(&customer, &key));
    assert!(!loose_equal(&customer, &key));
}

#[test]
fn arrays_compare_element_wise() {
    let a = Value::Array(vec![Value::from(1), Value::from("x")]);
    let b = Value::Array(vec![Value::from(1), Value::from("x")]);
    let c = Value::Array(vec![Value::from("1"), Value::from("x")]);
    assert!(are_equal(&a, &b));
    assert!(!are_equal(&a, &c));
    assert!(loose_equal(&a, &c));
}
