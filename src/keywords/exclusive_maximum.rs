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
    bounds_check("exclusiveMaximum", "exclusiveMaximum", value, instance, state, |o| {
        o == Ordering::Less
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply;
    use serde_json::json;

    #[test]
    fn rejects_at_limit() {
        let schema = json!({"exclusiveMaximum": 3.0});
        let mut state = ValidationState::new(&schema);
        apply(&schema, &json!(3.0), &mut state).unwrap();
        assert!(!state.is_valid());
    }
}
