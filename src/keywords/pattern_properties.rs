use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let patterns = value
        .as_object()
        .ok_or_else(|| CompilationError::schema("patternProperties", "must be an object"))?;
    let instance = match instance {
        Value::Object(map) => map,
        _ => return Ok(()),
    };
    let mut keys: Vec<&String> = patterns.keys().collect();
    keys.sort();
    for pattern in keys {
        let regex = Regex::new(pattern)?;
        let subschema = &patterns[pattern];
        let mut names: Vec<&String> = instance.keys().filter(|k| regex.is_match(k)).collect();
        names.sort();
        for name in names {
            state.descend(name.clone(), |state| apply(subschema, &instance[name], state))?;
        }
    }
    Ok(())
}
