use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

/// Only meaningful when the *containing* schema's `items` is itself an array of schemas — the
/// ancestor crate read this from `state.schema_root`'s `parent` argument the same way; this
/// handler keeps that plumbing since the containing object, not the document root, is what
/// decides which index additional items start at.
pub(crate) fn validate(
    value: &Value,
    schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let tuple_len = match schema.get("items") {
        Some(Value::Array(items)) => items.len(),
        _ => return Ok(()),
    };
    let items = match instance {
        Value::Array(items) => items,
        _ => return Ok(()),
    };
    for (i, item) in items.iter().enumerate().skip(tuple_len) {
        state.descend(i.to_string(), |state| apply(value, item, state))?;
    }
    Ok(())
}
