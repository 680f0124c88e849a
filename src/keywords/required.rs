use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let names = value
        .as_array()
        .ok_or_else(|| CompilationError::schema("required", "must be an array of strings"))?;
    let instance = match instance {
        Value::Object(map) => map,
        _ => return Ok(()),
    };
    for name in names {
        let name = name
            .as_str()
            .ok_or_else(|| CompilationError::schema("required", "must be an array of strings"))?;
        if !instance.contains_key(name) {
            state.descend(name, |state| state.add_error("required"));
        }
    }
    Ok(())
}
