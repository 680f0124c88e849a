use crate::error::CompilationError;
use crate::state::ValidationState;
use num_cmp::NumCmp;
use serde_json::Value;
use std::cmp::Ordering;

/// Shared by `maximum`/`minimum`/`exclusiveMaximum`/`exclusiveMinimum`: a single comparison
/// helper instead of the ancestor crate's U64/I64/F64 struct triplet per keyword, since
/// `num-cmp` already knows how to compare a `serde_json::Number` of any representation against
/// another without losing precision outside `f64`'s 53-bit mantissa.
pub(crate) fn compare(instance: &Value, limit: &Value) -> Option<Ordering> {
    let instance = instance.as_f64_repr()?;
    let limit = limit.as_f64_repr()?;
    Some(cmp_repr(&instance, &limit))
}

/// A number kept in whichever representation `serde_json` gave it, so integers that overflow
/// `f64` precision still compare exactly against other integers.
pub(crate) enum NumberRepr {
    I64(i64),
    U64(u64),
    F64(f64),
}

fn cmp_repr(left: &NumberRepr, right: &NumberRepr) -> Ordering {
    use NumberRepr::*;
    match (left, right) {
        (I64(l), I64(r)) => l.cmp(r),
        (U64(l), U64(r)) => l.cmp(r),
        (F64(l), F64(r)) => l.partial_cmp(r).unwrap_or(Ordering::Equal),
        (I64(l), U64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
        (U64(l), I64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
        (I64(l), F64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
        (F64(l), I64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
        (U64(l), F64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
        (F64(l), U64(r)) => NumCmp::num_cmp(*l, *r).unwrap_or(Ordering::Equal),
    }
}

pub(crate) trait AsNumberRepr {
    fn as_f64_repr(&self) -> Option<NumberRepr>;
}

impl AsNumberRepr for Value {
    fn as_f64_repr(&self) -> Option<NumberRepr> {
        let n = self.as_number()?;
        if let Some(i) = n.as_i64() {
            Some(NumberRepr::I64(i))
        } else if let Some(u) = n.as_u64() {
            Some(NumberRepr::U64(u))
        } else {
            n.as_f64().map(NumberRepr::F64)
        }
    }
}

trait AsNumber {
    fn as_number(&self) -> Option<&serde_json::Number>;
}

impl AsNumber for Value {
    fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

pub(crate) fn expect_number(keyword: &'static str, value: &Value) -> Result<(), CompilationError> {
    if value.is_number() {
        Ok(())
    } else {
        Err(CompilationError::schema(keyword, "must be a number"))
    }
}

pub(crate) fn bounds_check(
    keyword: &'static str,
    tag: &'static str,
    limit: &Value,
    instance: &Value,
    state: &mut ValidationState,
    accept: impl Fn(Ordering) -> bool,
) -> Result<(), CompilationError> {
    expect_number(keyword, limit)?;
    if !instance.is_number() {
        return Ok(());
    }
    match compare(instance, limit) {
        Some(ordering) if accept(ordering) => Ok(()),
        Some(_) => {
            state.add_error(tag);
            Ok(())
        }
        None => Ok(()),
    }
}
