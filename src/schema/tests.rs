//! Shape inference tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_infer_integer_with_example() {
    let fragment = infer(&json!(5), true).unwrap();

    assert_eq!(fragment.schema_type, SchemaType::Integer);
    assert_eq!(fragment.example, Some(json!(5)));
    assert_eq!(fragment.items, None);
    assert_eq!(fragment.properties, None);
}

#[test]
fn test_infer_scalar_types() {
    assert_eq!(
        infer(&json!(3.25), false).unwrap().schema_type,
        SchemaType::Number
    );
    assert_eq!(
        infer(&json!(true), false).unwrap().schema_type,
        SchemaType::Boolean
    );
    assert_eq!(
        infer(&json!("hello"), false).unwrap().schema_type,
        SchemaType::String
    );
}

#[test]
fn test_infer_null_maps_to_string() {
    // Deliberate simplification: absence carries no type information
    let fragment = infer(&json!(null), false).unwrap();
    assert_eq!(fragment.schema_type, SchemaType::String);
}

#[test]
fn test_infer_null_example_is_embedded() {
    let fragment = infer(&json!(null), true).unwrap();
    assert_eq!(fragment.example, Some(json!(null)));
}

#[test]
fn test_infer_string_array() {
    let fragment = infer(&json!(["a", "b"]), false).unwrap();

    assert_eq!(fragment.schema_type, SchemaType::Array);
    let items = fragment.items.unwrap();
    assert_eq!(items.one_of.len(), 1);
    assert_eq!(items.one_of[0].schema_type, SchemaType::String);
    // Representatives carry no examples
    assert_eq!(items.one_of[0].example, None);
}

#[test]
fn test_infer_heterogeneous_array_dedups_by_type() {
    let fragment = infer(&json!([1, "a", 2, "b", true, 3]), false).unwrap();

    let items = fragment.items.unwrap();
    let types: Vec<SchemaType> = items.one_of.iter().map(|f| f.schema_type).collect();
    assert_eq!(
        types,
        vec![SchemaType::Integer, SchemaType::String, SchemaType::Boolean]
    );
}

#[test]
fn test_infer_array_first_seen_wins() {
    // Both elements are objects; the representative describes the first one
    let fragment = infer(&json!([{"a": 1}, {"b": "x"}]), false).unwrap();

    let items = fragment.items.unwrap();
    assert_eq!(items.one_of.len(), 1);
    let props = items.one_of[0].properties.as_ref().unwrap();
    assert!(props.contains_key("a"));
    assert!(!props.contains_key("b"));
}

#[test]
fn test_infer_empty_array() {
    let fragment = infer(&json!([]), false).unwrap();

    assert_eq!(fragment.items, Some(ArrayItems::default()));
    assert_eq!(
        serde_json::to_value(&fragment).unwrap(),
        json!({"type": "array", "items": {}})
    );
}

#[test]
fn test_infer_object() {
    let fragment = infer(&json!({"x": 1, "y": "s"}), false).unwrap();

    assert_eq!(fragment.schema_type, SchemaType::Object);
    let props = fragment.properties.unwrap();
    assert_eq!(props["x"].schema_type, SchemaType::Integer);
    assert_eq!(props["y"].schema_type, SchemaType::String);
}

#[test]
fn test_infer_object_example_applies_one_level_only() {
    let value = json!({"outer": {"inner": 1}});
    let fragment = infer(&value, true).unwrap();

    // The requested level embeds the whole value
    assert_eq!(fragment.example, Some(value.clone()));

    // Fields below it do not
    let props = fragment.properties.unwrap();
    assert_eq!(props["outer"].example, None);
    let inner = props["outer"].properties.as_ref().unwrap();
    assert_eq!(inner["inner"].example, None);
}

#[test]
fn test_infer_preserves_field_order() {
    let fragment = infer(&json!({"z": 1, "a": 2, "m": 3}), false).unwrap();

    let keys: Vec<&String> = fragment.properties.as_ref().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_infer_deeply_nested() {
    let fragment = infer(
        &json!({"level1": {"level2": {"values": [1, 2.5]}}}),
        false,
    )
    .unwrap();

    let level1 = &fragment.properties.unwrap()["level1"];
    let level2 = &level1.properties.as_ref().unwrap()["level2"];
    let values = &level2.properties.as_ref().unwrap()["values"];
    let types: Vec<SchemaType> = values
        .items
        .as_ref()
        .unwrap()
        .one_of
        .iter()
        .map(|f| f.schema_type)
        .collect();
    assert_eq!(types, vec![SchemaType::Integer, SchemaType::Number]);
}

#[test]
fn test_infer_is_deterministic() {
    let value = json!({"results": [{"name": "Tatooine"}], "count": 1});
    assert_eq!(infer(&value, true).unwrap(), infer(&value, true).unwrap());
}

#[test]
fn test_fragment_serialization_omits_absent_fields() {
    let fragment = SchemaFragment::new(SchemaType::Integer).with_example(json!(5));
    assert_eq!(
        serde_json::to_value(&fragment).unwrap(),
        json!({"type": "integer", "example": 5})
    );
}

#[test]
fn test_binary_fragment_serialization() {
    assert_eq!(
        serde_json::to_value(SchemaFragment::binary()).unwrap(),
        json!({"type": "string", "format": "binary"})
    );
}

#[test]
fn test_schema_type_of_categories() {
    assert_eq!(schema_type_of(&json!(7)).unwrap(), SchemaType::Integer);
    assert_eq!(schema_type_of(&json!(-7)).unwrap(), SchemaType::Integer);
    assert_eq!(schema_type_of(&json!(7.5)).unwrap(), SchemaType::Number);
    assert_eq!(schema_type_of(&json!(false)).unwrap(), SchemaType::Boolean);
    assert_eq!(schema_type_of(&json!("s")).unwrap(), SchemaType::String);
    assert_eq!(schema_type_of(&json!(null)).unwrap(), SchemaType::String);
    assert_eq!(schema_type_of(&json!([])).unwrap(), SchemaType::Array);
    assert_eq!(schema_type_of(&json!({})).unwrap(), SchemaType::Object);
}
