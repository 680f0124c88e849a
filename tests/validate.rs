use jsonschema6::{is_valid, validate, JSONSchema};
use serde_json::{json, Value};

fn outcome_is_valid(schema: &Value, instance: &Value) -> bool {
    validate(schema, instance).unwrap().is_valid
}

#[test]
fn true_schema_accepts_everything() {
    for instance in [json!(null), json!(1), json!("x"), json!([1, 2]), json!({"a": 1})] {
        assert!(outcome_is_valid(&json!(true), &instance));
    }
}

#[test]
fn false_schema_rejects_everything() {
    for instance in [json!(null), json!(1), json!("x"), json!([1, 2]), json!({"a": 1})] {
        assert!(!outcome_is_valid(&json!(false), &instance));
    }
}

#[test]
fn all_of_singleton_matches_its_subschema() {
    let schema = json!({"minimum": 5});
    let wrapped = json!({"allOf": [{"minimum": 5}]});
    for instance in [json!(4), json!(5), json!(10)] {
        assert_eq!(
            outcome_is_valid(&schema, &instance),
            outcome_is_valid(&wrapped, &instance)
        );
    }
}

#[test]
fn not_negates_its_subschema() {
    let schema = json!({"type": "string"});
    let negated = json!({"not": {"type": "string"}});
    for instance in [json!("x"), json!(1)] {
        assert_ne!(
            outcome_is_valid(&schema, &instance),
            outcome_is_valid(&negated, &instance)
        );
    }
}

#[test]
fn any_of_is_boolean_or() {
    let a = json!({"type": "integer"});
    let b = json!({"minimum": 2});
    let combined = json!({"anyOf": [a.clone(), b.clone()]});
    for instance in [json!(1), json!(1.5), json!(2.5), json!("x")] {
        let expected = outcome_is_valid(&a, &instance) || outcome_is_valid(&b, &instance);
        assert_eq!(outcome_is_valid(&combined, &instance), expected);
    }
}

#[test]
fn one_of_is_boolean_xor() {
    let a = json!({"minimum": 0});
    let b = json!({"maximum": 10});
    let combined = json!({"oneOf": [a.clone(), b.clone()]});
    for instance in [json!(-5), json!(5), json!(15)] {
        let expected = outcome_is_valid(&a, &instance) ^ outcome_is_valid(&b, &instance);
        assert_eq!(outcome_is_valid(&combined, &instance), expected);
    }
}

#[test]
fn idempotent_across_repeated_calls() {
    let schema = json!({"type": "integer", "minimum": 3});
    let instance = json!(2);
    let first = validate(&schema, &instance).unwrap();
    let second = validate(&schema, &instance).unwrap();
    assert_eq!(first, second);
}

#[test]
fn reference_transparency_inlines_identically() {
    let via_ref = json!({
        "definitions": {"positive": {"minimum": 0}},
        "properties": {"x": {"$ref": "#/definitions/positive"}},
    });
    let inlined = json!({
        "properties": {"x": {"minimum": 0}},
    });
    for instance in [json!({"x": -1}), json!({"x": 1})] {
        assert_eq!(
            outcome_is_valid(&via_ref, &instance),
            outcome_is_valid(&inlined, &instance)
        );
    }
}

#[test]
fn numeric_bounds_scenario() {
    let schema = json!({"minimum": 0, "maximum": 10, "exclusiveMaximum": 10});
    assert!(is_valid(&schema, &json!(5)));
    assert!(!is_valid(&schema, &json!(10)));
    assert!(!is_valid(&schema, &json!(-1)));
}

#[test]
fn required_scenario() {
    let schema = json!({"required": ["name"]});
    assert!(!is_valid(&schema, &json!({"age": 1})));
    assert!(is_valid(&schema, &json!({"name": "a"})));
}

#[test]
fn tuple_items_with_additional_items_scenario() {
    let schema = json!({
        "items": [{"type": "string"}, {"type": "integer"}],
        "additionalItems": false,
    });
    assert!(is_valid(&schema, &json!(["a", 1])));
    assert!(!is_valid(&schema, &json!(["a", 1, "surplus"])));
}

#[test]
fn one_of_double_match_scenario() {
    let schema = json!({"oneOf": [{"minimum": 0}, {"maximum": 10}]});
    assert!(!is_valid(&schema, &json!(5)));
}

#[test]
fn not_scenario() {
    let schema = json!({"not": {"type": "integer"}});
    assert!(is_valid(&schema, &json!("hi")));
    assert!(!is_valid(&schema, &json!(1)));
}

#[test]
fn pattern_properties_with_additional_properties_false_scenario() {
    let schema = json!({
        "patternProperties": {"^s_": {"type": "string"}},
        "additionalProperties": false,
    });
    assert!(is_valid(&schema, &json!({"s_name": "ok"})));
    assert!(!is_valid(&schema, &json!({"other": "nope"})));
}

#[test]
fn compiled_schema_is_reusable_across_instances() {
    let schema = json!({"type": "string", "minLength": 2});
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!("ab")));
    assert!(!compiled.is_valid(&json!("a")));
    assert!(!compiled.is_valid(&json!(1)));
}

#[test]
fn malformed_schema_shape_is_a_compilation_error() {
    let schema = json!(1);
    assert!(JSONSchema::compile(&schema).is_err());
}
