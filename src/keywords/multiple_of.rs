use crate::error::CompilationError;
use crate::state::ValidationState;
use rust_decimal::prelude::*;
use serde_json::{Map, Value};

/// Uses `rust_decimal` instead of `f64`/`EPSILON` arithmetic so that a divisor like `0.1`
/// classifies `0.3` as a multiple of it; `f64` division leaves a residual a fixed epsilon can
/// miss for some inputs and falsely accept for others.
pub(crate) fn validate(
    value: &Value,
    _schema: &Map<String, Value>,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), CompilationError> {
    let divisor = to_decimal(value).ok_or_else(|| {
        CompilationError::schema("multipleOf", "must be a number greater than 0")
    })?;
    if divisor <= Decimal::ZERO {
        return Err(CompilationError::schema(
            "multipleOf",
            "must be a number greater than 0",
        ));
    }
    let instance = match to_decimal(instance) {
        Some(d) => d,
        None => return Ok(()),
    };
    if (instance / divisor).fract() != Decimal::ZERO {
        state.add_error("multipleOf");
    }
    Ok(())
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                Decimal::from_f64(n.as_f64()?)
            }
        }
        _ => None,
    }
}
