use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let limit = value
        .as_u64()
        .ok_or_else(|| CompilationError::schema("minLength", "must be a non-negative integer"))?;
    if let Value::String(s) = instance {
        if (s.chars().count() as u64) < limit {
            state.add_error("minLength");
        }
    }
    Ok(())
}
