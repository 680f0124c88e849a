use crate::error::CompilationError;
use crate::keywords;
use crate::resolver;
use crate::state::ValidationState;
use serde_json::Value;

/// Drives one schema/instance pair through to completion, recording every violation in `state`
/// rather than stopping at the first one. Returns `Err` only for a fatal condition: a malformed
/// schema or an unresolvable `$ref`.
pub(crate) fn apply(schema: &Value, instance: &Value, state: &mut ValidationState) -> Result<(), CompilationError> {
    match schema {
        Value::Bool(true) => Ok(()),
        Value::Bool(false) => {
            state.add_error("false");
            Ok(())
        }
        Value::Object(map) => {
            if let Some(reference) = map.get("$ref") {
                let reference = reference.as_str().ok_or_else(|| {
                    CompilationError::schema("$ref", "must be a string")
                })?;
                let resolved = resolver::resolve(reference, state.schema_root)?;
                return apply(resolved.as_value(), instance, state);
            }

            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(handler) = keywords::lookup(key) {
                    handler(&map[key], map, instance, state)?;
                }
            }
            Ok(())
        }
        _ => Err(CompilationError::schema(
            "<schema>",
            "a schema must be a JSON object or a boolean",
        )),
    }
}
