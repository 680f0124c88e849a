use crate::error::CompilationError;
use crate::keywords::numeric::bounds_check;
use crate::state::ValidationState;
use serde_json::{Map, Value};
use std::cmp::Ordering;

pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    bounds_check("maximum", "maximum", value, instance, state, |o| {
        o != Ordering::Greater
    })
}
