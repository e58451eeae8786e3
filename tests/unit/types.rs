//! Type expressions: membership, names, and construction failures.

use super::common::{init_tracing, registry, Bar, Foo, FooBar, Fractal, BAR_INTERFACE, FOO, FOO_INTERFACE};
use typed_containers::{
    Atomic, ConfigurationError, Error, Intersection, Nominal, TypeDef, TypeDefinition,
    TypeRegistry, Union, UnionMember, Value,
};

fn int_foo_or_both() -> Union {
    let both =
        Intersection::new([Nominal::of(&FOO_INTERFACE), Nominal::of(&BAR_INTERFACE)]).unwrap();
    Union::new([
        UnionMember::from(Atomic::Int),
        Nominal::of(&FOO).into(),
        both.into(),
    ])
    .unwrap()
}

// ============================================================================
// UNION / INTERSECTION
// ============================================================================

#[test]
fn union_end_to_end() {
    let t = int_foo_or_both();
    assert!(t.is_of_type(&Value::from(1)));
    assert!(t.is_of_type(&Value::object(Foo::new(1))));
    assert!(t.is_of_type(&Value::object(FooBar)));
    assert!(!t.is_of_type(&Value::from(true)));
    assert!(!t.is_of_type(&Value::object(Fractal)));
    assert!(!t.is_of_type(&Value::object(Bar::default())));
    assert_eq!(t.type_name(), "int|Foo|(FooInterface&BarInterface)");
}

#[test]
fn intersection_requires_all_interfaces() {
    let t = Intersection::new([Nominal::of(&FOO_INTERFACE), Nominal::of(&BAR_INTERFACE)]).unwrap();
    assert!(t.is_of_type(&Value::object(FooBar)));
    assert!(!t.is_of_type(&Value::object(Fractal)));
    assert!(!t.is_of_type(&Value::object(Foo::default())));
}

#[test]
fn single_member_composites_behave_like_the_member() {
    let only_foo = Intersection::new([Nominal::of(&FOO)]).unwrap();
    assert_eq!(only_foo.type_name(), "Foo");
    assert!(only_foo.is_of_type(&Value::object(Foo::default())));

    let only_int = Union::new([UnionMember::from(Atomic::Int)]).unwrap();
    assert_eq!(only_int.type_name(), "int");
    assert!(!only_int.is_of_type(&Value::from("1")));
}

// ============================================================================
// NOMINAL CONSTRUCTION
// ============================================================================

#[test]
fn unknown_class_name_fails_at_construction() {
    init_tracing();
    let err = Nominal::named(&registry(), "Test\\DoesNotExist").unwrap_err();
    assert_eq!(
        err.to_string(),
        "given type name Test\\DoesNotExist is not a class, interface or enum that exists"
    );
    assert!(matches!(
        err,
        Error::Configuration(ConfigurationError::UnknownType { .. })
    ));
}

#[test]
fn registered_names_resolve() {
    let registry = registry();
    for name in ["Foo", "FooInterface", "BarInterface", "Stringable", "Hashable"] {
        let t = Nominal::named(&registry, name).unwrap();
        assert_eq!(t.name(), name);
    }
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = TypeRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.resolve("Foo").is_err());
}

// ============================================================================
// ATOMIC
// ============================================================================

#[test]
fn numeric_accepts_numbers_and_numeric_strings() {
    let numeric = TypeDef::from(Atomic::Numeric);
    for value in [
        Value::from(1),
        Value::from(-2.5),
        Value::from("42"),
        Value::from(" 1e3"),
        Value::from(".5"),
    ] {
        assert!(numeric.is_of_type(&value), "{:?}", value);
    }
    for value in [
        Value::from("4x"),
        Value::from(""),
        Value::from(true),
        Value::Null,
        Value::Array(vec![Value::from(1)]),
    ] {
        assert!(!numeric.is_of_type(&value), "{:?}", value);
    }
}

#[test]
fn type_names_round_trip_through_display() {
    let t = TypeDef::from(int_foo_or_both());
    assert_eq!(t.to_string(), "int|Foo|(FooInterface&BarInterface)");
    let dynamic: &dyn TypeDefinition = &t;
    assert_eq!(dynamic.type_name(), t.to_string());
}
