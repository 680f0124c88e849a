use crate::engine::apply;
use crate::error::CompilationError;
use crate::state::ValidationState;
use regex::Regex;
use serde_json::{Map, Value};

/// Reads `properties`/`patternProperties` off the *containing* schema object passed in by the
/// dispatcher, not the document root — the ancestor crate's specialized validators for this
/// keyword read the root via `JSONSchema`, which breaks as soon as `additionalProperties`
/// appears anywhere but the top-level schema (e.g. inside `properties`/`items`/`$ref` targets).
pub(crate) fn validate(
    value: &Value,
    schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let instance = match instance {
        Value::Object(map) => map,
        _ => return Ok(()),
    };

    let named: Vec<&str> = match schema.get("properties") {
        Some(Value::Object(map)) => map.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    };
    let patterns: Vec<Regex> = match schema.get("patternProperties") {
        Some(Value::Object(map)) => map
            .keys()
            .map(|p| Regex::new(p))
            .collect::<Result<_, _>>()?,
        _ => Vec::new(),
    };

    let mut extra: Vec<&String> = instance
        .keys()
        .filter(|k| !named.contains(&k.as_str()) && !patterns.iter().any(|re| re.is_match(k)))
        .collect();
    extra.sort();

    // `value` is dispatched as a schema for every extra property, rather than special-cased on
    // `Bool(false)` here: the dispatcher's own `Bool(false)` arm already records the `"false"`
    // tag, which is the tag the boolean-false schema is documented to produce everywhere else.
    for name in extra {
        state.descend(name.clone(), |state| apply(value, &instance[name], state))?;
    }
    Ok(())
}
