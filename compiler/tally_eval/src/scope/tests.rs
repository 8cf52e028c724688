use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_single_segment_insert_and_overwrite() {
    let mut scope = Scope::new();
    scope.set_variable("x", num(1.0));
    scope.set_variable("x", num(2.0));
    assert_eq!(scope.get_variable("x"), Some(&num(2.0)));
    assert_eq!(scope.variables().len(), 1);
}

#[test]
fn test_dot_path_creates_nested_objects() {
    let mut scope = Scope::new();
    scope.set_variable("trip.hotel.cost", num(120.0));
    scope.set_variable("trip.hotel.nights", num(3.0));
    scope.set_variable("trip.flight", num(80.0));

    assert_eq!(scope.get_variable("trip.hotel.cost"), Some(&num(120.0)));
    assert_eq!(
        scope.get_variable("trip").map(ToString::to_string),
        Some("{hotel: {cost: 120, nights: 3}, flight: 80}".to_string())
    );
}

#[test]
fn test_dot_path_overwrites_non_object_intermediate() {
    let mut scope = Scope::new();
    scope.set_variable("a", num(5.0));
    scope.set_variable("a.b", num(1.0));
    assert_eq!(
        scope.get_variable("a").map(ToString::to_string),
        Some("{b: 1}".to_string())
    );

    scope.set_variable("c.d", Value::string("leaf"));
    scope.set_variable("c.d.e", num(2.0));
    assert_eq!(scope.get_variable("c.d.e"), Some(&num(2.0)));
}

#[test]
fn test_get_variable_misses() {
    let mut scope = Scope::new();
    scope.set_variable("a.b", num(1.0));
    assert_eq!(scope.get_variable("missing"), None);
    assert_eq!(scope.get_variable("a.c"), None);
    assert_eq!(scope.get_variable("a.b.c"), None);
}

#[test]
fn test_snapshot_is_not_affected_by_later_writes() {
    let mut scope = Scope::new();
    scope.set_variable("a.b", num(1.0));
    let snapshot = scope.snapshot_top_level_variables();

    scope.set_variable("a.b", num(2.0));
    scope.set_variable("z", num(3.0));

    assert_eq!(
        snapshot.get("a").map(ToString::to_string),
        Some("{b: 1}".to_string())
    );
    assert!(!snapshot.contains_key("z"));
}

#[test]
fn test_functions_last_definition_wins() {
    let mut scope = Scope::new();
    scope.define_function("f", vec!["x".to_string()], "x + 1");
    scope.define_function("f", vec!["x".to_string(), "y".to_string()], "x * y");

    let func = scope.function("f");
    assert_eq!(func.map(|f| f.body_text.as_str()), Some("x * y"));
    assert_eq!(func.map(|f| f.parameter_names.len()), Some(2));
    assert_eq!(scope.functions().count(), 1);
    assert!(scope.function("g").is_none());
}

#[test]
fn test_functions_are_not_variables() {
    let mut scope = Scope::new();
    scope.define_function("f", Vec::new(), "1");
    assert!(scope.get_variable("f").is_none());
    assert!(scope.snapshot_top_level_variables().is_empty());
}

proptest! {
    #[test]
    fn dot_path_round_trip(
        segments in proptest::collection::vec("[a-z_][a-z0-9_]{0,5}", 1..5),
        n in -1.0e9f64..1.0e9,
    ) {
        let path = segments.join(".");
        let mut scope = Scope::new();
        scope.set_variable(&path, Value::Number(n));
        prop_assert_eq!(scope.get_variable(&path), Some(&Value::Number(n)));
    }

    #[test]
    fn later_writes_win_on_shared_prefix(
        prefix in "[a-z]{1,4}",
        first in "[a-z]{1,4}",
        second in "[a-z]{1,4}",
    ) {
        let mut scope = Scope::new();
        let a = format!("{prefix}.{first}");
        let b = format!("{prefix}.{first}.{second}");
        scope.set_variable(&a, Value::Number(1.0));
        scope.set_variable(&b, Value::Number(2.0));
        prop_assert_eq!(scope.get_variable(&b), Some(&Value::Number(2.0)));
    }
}
