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
    let items = match instance {
        Value::Array(items) => items,
        _ => return Ok(()),
    };
    match value {
        Value::Array(schemas) => {
            for (i, (item, subschema)) in items.iter().zip(schemas.iter()).enumerate() {
                if subschema.is_null() {
                    continue;
                }
                state.descend(i.to_string(), |state| apply(subschema, item, state))?;
            }
            Ok(())
        }
        _ => {
            for (i, item) in items.iter().enumerate() {
                state.descend(i.to_string(), |state| apply(value, item, state))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tuple_items_validate_positionally() {
        let schema = json!({"items": [{"type": "integer"}, {"type": "string"}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!([1, "two", true]), &mut state).unwrap();
        assert!(state.is_valid());
    }

    #[test]
    fn schema_items_applies_to_every_element() {
        let schema = json!({"items": {"type": "integer"}});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!([1, "two"]), &mut state).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn null_tuple_position_is_skipped_rather_than_a_schema_error() {
        let schema = json!({"items": [null, {"type": "integer"}]});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(["anything", 2]), &mut state).unwrap();
        assert!(state.is_valid());
    }
}
