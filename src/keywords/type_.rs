use crate::error::CompilationError;
use crate::primitive_type::PrimitiveType;
use crate::state::ValidationState;
use serde_json::{Map, Value};
use std::convert::TryFrom;

/// String form names one primitive type; array form names a non-empty set of them. Collapses
/// what used to be nine specialized per-type validators into one dispatch over
/// `PrimitiveType::matches`.
pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    match value {
        Value::String(name) => {
            let type_ = parse(name)?;
            if !type_.matches(instance) {
                state.add_error("type");
            }
        }
        Value::Array(names) => {
            if names.is_empty() {
                return Err(CompilationError::schema("type", "array form must not be empty"));
            }
            let mut matched = false;
            for name in names {
                let name = name
                    .as_str()
                    .ok_or_else(|| CompilationError::schema("type", "array elements must be strings"))?;
                if parse(name)?.matches(instance) {
                    matched = true;
                    break;
                }
            }
            if !matched {
                state.add_error("type");
            }
        }
        _ => return Err(CompilationError::schema("type", "must be a string or an array of strings")),
    }
    Ok(())
}

fn parse(name: &str) -> Result<PrimitiveType, CompilationError> {
    PrimitiveType::try_from(name)
        .map_err(|()| CompilationError::schema("type", format!("unknown type name '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply;
    use serde_json::json;

    #[test]
    fn single_type_rejects_mismatch() {
        let schema = json!({"type": "string"});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn integer_matches_whole_number_floats() {
        let schema = json!({"type": "integer"});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(2.0), &mut state).unwrap();
        assert!(state.is_valid());
    }

    #[test]
    fn array_form_accepts_any_listed_type() {
        let schema = json!({"type": ["string", "null"]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &Value::Null, &mut state).unwrap();
        assert!(state.is_valid());
    }

    #[test]
    fn array_form_rejects_unlisted_type() {
        let schema = json!({"type": ["string", "null"]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(1), &mut state).unwrap();
        assert!(!state.is_valid());
    }
}
