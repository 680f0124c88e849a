use crate::error::CompilationError;
use crate::state::ValidationState;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::ops::Index;

lazy_static::lazy_static! {
    static ref CONTROL_GROUPS_RE: Regex = Regex::new(r"\\c[A-Za-z]").expect("valid regex");
}

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let raw = value
        .as_str()
        .ok_or_else(|| CompilationError::schema("pattern", "must be a string"))?;
    let instance = match instance {
        Value::String(s) => s,
        _ => return Ok(()),
    };
    let regex = convert_regex(raw)?;
    if !regex.is_match(instance) {
        state.add_error("pattern");
    }
    Ok(())
}

// ECMA 262 has differences from the `regex` crate's dialect.
fn convert_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let new_pattern = CONTROL_GROUPS_RE.replace_all(pattern, replace_control_group);
    Regex::new(
        &new_pattern
            .replace(r"\d", "[0-9]")
            .replace(r"\D", "[^0-9]")
            .replace(r"\w", "[A-Za-z]")
            .replace(r"\W", "[^A-Za-z]")
            .replace(
                r"\s",
                "[ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]",
            )
            .replace(
                r"\S",
                "[^ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]",
            ),
    )
}

fn replace_control_group(captures: &Captures) -> String {
    ((captures
        .index(0)
        .trim_start_matches(r"\c")
        .chars()
        .next()
        .expect("present because of the [A-Za-z] that follows \\c")
        .to_ascii_uppercase() as u8
        - 64) as char)
        .to_string()
}
