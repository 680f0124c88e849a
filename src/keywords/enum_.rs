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
    let options = value
        .as_array()
        .ok_or_else(|| CompilationError::schema("enum", "must be an array"))?;
    if !options.iter().any(|option| equal(option, instance)) {
        state.add_error("enum");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply;
    use serde_json::json;

    #[test]
    fn rejects_value_not_in_list() {
        let schema = json!({"enum": [1, 2, 3]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(4), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn accepts_numerically_equal_value() {
        let schema = json!({"enum": [1.0]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
