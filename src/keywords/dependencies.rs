use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

/// Draft 6 6.21: each entry's dependency is either a schema, validated against the whole
/// instance, or an array of property names, each of which must also be present. Not in the
/// distilled keyword list this crate started from; restored here for conformance.
pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let dependencies = value
        .as_object()
        .ok_or_else(|| CompilationError::schema("dependencies", "must be an object"))?;
    let instance = match instance {
        Value::Object(map) => map,
        _ => return Ok(()),
    };
    let mut names: Vec<&String> = dependencies.keys().collect();
    names.sort();
    for name in names {
        if !instance.contains_key(name) {
            continue;
        }
        match &dependencies[name] {
            Value::Array(required) => {
                for required_name in required {
                    let required_name = required_name.as_str().ok_or_else(|| {
                        CompilationError::schema("dependencies", "property list must contain strings")
                    })?;
                    if !instance.contains_key(required_name) {
                        state.descend(name.clone(), |state| state.add_error("dependencies"));
                    }
                }
            }
            schema_dependency => {
                apply(schema_dependency, &Value::Object(instance.clone()), state)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_dependency_requires_named_properties() {
        let schema = json!({"dependencies": {"bar": ["foo"]}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!({"bar": 1}), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn schema_dependency_validates_whole_instance() {
        let schema = json!({"dependencies": {"bar": {"required": ["foo"]}}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!({"bar": 1}), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn unaffected_when_trigger_property_absent() {
        let schema = json!({"dependencies": {"bar": ["foo"]}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!({}), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
