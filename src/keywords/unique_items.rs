use crate::error::CompilationError;
use crate::state::ValidationState;
use crate::value::HashedValue;
use serde_json::{Map, Value};
use std::collections::HashSet;

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    if value != &Value::Bool(true) {
        return Ok(());
    }
    if let Value::Array(items) = instance {
        let mut seen = HashSet::with_capacity(items.len());
        if !items.iter().map(HashedValue).all(|v| seen.insert(v)) {
            state.add_error("uniqueItems");
        }
    }
    Ok(())
}
