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
        .ok_or_else(|| CompilationError::schema("anyOf", "must be an array"))?;
    let mut matched = false;
    for subschema in schemas {
        let mut branch = state.fork();
        apply(subschema, instance, &mut branch)?;
        if branch.is_valid() {
            matched = true;
            break;
        }
    }
    if !matched {
        state.add_error("anyOf");
    }
    Ok(())
}
