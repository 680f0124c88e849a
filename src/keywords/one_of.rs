use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let schemas = value
        .as_array()
        .ok_or_else(|| CompilationError::schema("oneOf", "must be an array"))?;
    let mut matches = 0;
    for subschema in schemas {
        let mut branch = state.fork();
        apply(subschema, instance, &mut branch)?;
        if branch.is_valid() {
            matches += 1;
        }
    }
    if matches != 1 {
        state.add_error("oneOf");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fails_when_no_branch_holds() {
        let schema = json!({"oneOf": [{"type": "string"}, {"type": "boolean"}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn fails_when_more_than_one_branch_holds() {
        let schema = json!({"oneOf": [{"minimum": 0}, {"maximum": 10}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(5), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn passes_when_exactly_one_branch_holds() {
        let schema = json!({"oneOf": [{"minimum": 10}, {"maximum": 3}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
