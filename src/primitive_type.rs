use std::{convert::TryFrom, fmt};

/// The seven JSON Schema primitive type names recognized by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Array => write!(f, "array"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::Integer => write!(f, "integer"),
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::Object => write!(f, "object"),
            PrimitiveType::String => write!(f, "string"),
        }
    }
}

impl TryFrom<&str> for PrimitiveType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(PrimitiveType::Array),
            "boolean" => Ok(PrimitiveType::Boolean),
            "integer" => Ok(PrimitiveType::Integer),
            "null" => Ok(PrimitiveType::Null),
            "number" => Ok(PrimitiveType::Number),
            "object" => Ok(PrimitiveType::Object),
            "string" => Ok(PrimitiveType::String),
            _ => Err(()),
        }
    }
}

impl PrimitiveType {
    pub(crate) fn matches(self, value: &serde_json::Value) -> bool {
        use serde_json::Value::*;
        match (self, value) {
            (PrimitiveType::Null, Null) => true,
            (PrimitiveType::Boolean, Bool(_)) => true,
            (PrimitiveType::Object, Object(_)) => true,
            (PrimitiveType::Array, Array(_)) => true,
            (PrimitiveType::String, String(_)) => true,
            (PrimitiveType::Number, Number(_)) => true,
            (PrimitiveType::Integer, Number(n)) => n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0),
            _ => false,
        }
    }
}
