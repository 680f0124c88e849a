use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

/// No fork: every branch must hold against the same instance, and a failing branch's errors
/// belong in the parent's error map just like any other keyword's.
pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let schemas = value
        .as_array()
        .ok_or_else(|| CompilationError::schema("allOf", "must be an array"))?;
    for subschema in schemas {
        apply(subschema, instance, state)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_branches_must_hold() {
        let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 5}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(2), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn passes_when_every_branch_holds() {
        let schema = json!({"allOf": [{"type": "integer"}, {"minimum": 5}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(10), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
