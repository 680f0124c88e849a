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
    let properties = value
        .as_object()
        .ok_or_else(|| CompilationError::schema("properties", "must be an object"))?;
    let instance = match instance {
        Value::Object(map) => map,
        _ => return Ok(()),
    };
    let mut names: Vec<&String> = properties.keys().collect();
    names.sort();
    for name in names {
        if let Some(item) = instance.get(name) {
            state.descend(name.clone(), |state| apply(&properties[name], item, state))?;
        }
    }
    Ok(())
}
