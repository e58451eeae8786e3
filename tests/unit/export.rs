//! Plain-structure export through serde.

use super::common::{int_collection, CustomerIdentity, Foo, StringableKey};
use serde_json::json;
use typed_containers::object::{HASHABLE, STRINGABLE};
use typed_containers::{Atomic, Map, Nominal, TypeDef, Union, UnionMember, Value};

fn rich_key_map() -> Map {
    let keys: TypeDef = Union::new([
        UnionMember::from(Nominal::of(&STRINGABLE)),
        Nominal::of(&HASHABLE).into(),
    ])
    .unwrap()
    .into();
    Map::new(keys, Atomic::Int)
}

#[test]
fn collection_shape_follows_density() {
    let mut c = int_collection(&[1, 2, 3, 4, 5]);
    assert_eq!(serde_json::to_value(&c).unwrap(), json!([1, 2, 3, 4, 5]));

    c.remove_if(|v| matches!(v.as_int(), Some(3 | 5)));
    assert_eq!(
        serde_json::to_value(&c).unwrap(),
        json!({"0": 1, "1": 2, "3": 4})
    );

    let dense_again = c.find(|_| true);
    assert_eq!(serde_json::to_value(&dense_again).unwrap(), json!([1, 2, 4]));
}

#[test]
fn map_exports_projections() {
    let mut m = rich_key_map();
    m.put(Value::object(CustomerIdentity::new("eu", 1)), 10).unwrap();
    m.put(Value::object(StringableKey::new("plain")), 20).unwrap();
    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#"{"eu:1":10,"plain":20}"#
    );
}

#[test]
fn entries_keep_rich_keys() {
    let mut m = rich_key_map();
    m.put(Value::object(StringableKey::new("k")), 1).unwrap();
    let exported: Vec<_> = m
        .to_array_preserve_entries()
        .into_iter()
        .map(|(projection, entry)| (projection, serde_json::to_value(&entry).unwrap()))
        .collect();
    assert_eq!(
        exported,
        [("k".to_string(), json!({"key": {"text": "k"}, "value": 1}))]
    );
}

#[test]
fn nested_values() {
    let value = Value::Array(vec![
        Value::Null,
        Value::from(true),
        Value::from(1.5),
        Value::object(Foo::new(3)),
    ]);
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!([null, true, 1.5, {"val": 3}])
    );
}
