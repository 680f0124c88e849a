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
    let mut branch = state.fork();
    apply(value, instance, &mut branch)?;
    if branch.is_valid() {
        state.add_error("not");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_instance_matching_negated_schema() {
        let schema = json!({"not": {"type": "string"}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!("hi"), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn accepts_instance_not_matching_negated_schema() {
        let schema = json!({"not": {"type": "string"}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
