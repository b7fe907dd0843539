use frozen_struct::{Schema, StructType, Value};
use std::sync::Arc;

struct MyPair;
impl StructType for MyPair {
    const FIELDS: &'static [&'static str] = &["a", "b"];
}

struct YourPair;
impl StructType for YourPair {
    const FIELDS: &'static [&'static str] = &["a", "b"];
}

struct ExtendedPair;
impl StructType for ExtendedPair {
    const FIELDS: &'static [&'static str] = &[];
    const EXTENDS: &'static [Schema] = &[Schema::of::<MyPair>()];
}

#[test]
fn equality_ignores_supply_order() {
    let first = MyPair::construct([("a", 1), ("b", 2)]).expect("first");
    let second = MyPair::construct([("b", 2), ("a", 1)]).expect("second");

    assert!(first.equals(&second));
    assert!(second.equals(&first));
}

#[test]
fn differing_values_are_unequal() {
    let first = MyPair::construct([("a", 1), ("b", 2)]).expect("first");
    let swapped = MyPair::construct([("a", 2), ("b", 1)]).expect("swapped");

    assert!(!first.equals(&swapped));
    assert!(!swapped.equals(&first));
}

#[test]
fn sibling_types_are_never_equal() {
    let mine = MyPair::construct([("a", 2), ("b", 1)]).expect("mine");
    let yours = YourPair::construct([("a", 2), ("b", 1)]).expect("yours");

    assert!(!mine.equals(&yours));
    assert!(!yours.equals(&mine));
    assert_ne!(mine, yours);
}

#[test]
fn derived_type_is_not_equal_to_its_base() {
    let base = MyPair::construct([("a", 1), ("b", 2)]).expect("base");
    let derived = ExtendedPair::construct([("a", 1), ("b", 2)]).expect("derived");

    assert!(!base.equals(&derived));
    assert!(!derived.equals(&base));
}

#[test]
fn values_are_compared_without_coercion() {
    let int = MyPair::construct([("a", Value::from(1)), ("b", Value::Null)]).expect("int");
    let float = MyPair::construct([("a", Value::from(1.0)), ("b", Value::Null)]).expect("float");
    let text = MyPair::construct([("a", Value::from("1")), ("b", Value::Null)]).expect("text");

    assert!(!int.equals(&float));
    assert!(!int.equals(&text));
    assert!(!float.equals(&text));
}

#[test]
fn nested_records_compare_by_identity() {
    let inner = Arc::new(YourPair::construct([("a", 1), ("b", 2)]).expect("inner"));
    let twin = Arc::new(YourPair::construct([("a", 1), ("b", 2)]).expect("twin"));

    let shared_a = MyPair::construct([
        ("a", Value::from(Arc::clone(&inner))),
        ("b", Value::Null),
    ])
    .expect("shared a");
    let shared_b = MyPair::construct([
        ("a", Value::from(Arc::clone(&inner))),
        ("b", Value::Null),
    ])
    .expect("shared b");
    let other = MyPair::construct([("a", Value::from(twin)), ("b", Value::Null)])
        .expect("other");

    assert!(shared_a.equals(&shared_b));
    assert!(!shared_a.equals(&other));
}

#[test]
fn clones_are_equal() {
    let record = MyPair::construct([("a", 1), ("b", 2)]).expect("record");
    assert!(record.equals(&record.clone()));
}
