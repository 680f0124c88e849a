use crate::error::CompilationError;
use crate::state::ValidationState;
use crate::value::equal;
use serde_json::{Map, Value};

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    if !equal(value, instance) {
        state.add_error("const");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply;
    use serde_json::json;

    #[test]
    fn rejects_different_value() {
        let schema = json!({"const": "foo"});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!("bar"), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn accepts_numerically_equal_value() {
        let schema = json!({"const": 1});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1.0), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
