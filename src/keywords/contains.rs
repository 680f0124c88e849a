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
    let mut matched = false;
    for item in items {
        let mut branch = state.fork();
        apply(value, item, &mut branch)?;
        if branch.is_valid() {
            matched = true;
            break;
        }
    }
    if !matched {
        state.add_error("contains");
    }
    Ok(())
}
