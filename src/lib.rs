//! # jsonschema6
//!
//! A crate for performing JSON Schema Draft 6 validation. A schema is walked against an
//! instance once per call, recording every violated keyword rather than stopping at the first
//! one.
//!
//! ## Example:
//!
//! ```rust
//! use jsonschema6::JSONSchema;
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foo");
//! let compiled = JSONSchema::compile(&schema).unwrap();
//! assert!(compiled.is_valid(&instance));
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::cast_possible_truncation,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod engine;
mod error;
mod keywords;
mod primitive_type;
mod resolver;
mod state;
mod value;

pub use error::CompilationError;

use serde_json::Value;
use state::ValidationState;
use std::collections::BTreeMap;

/// A schema checked once and held onto across multiple `validate` calls. `compile` does the
/// work that only needs to happen once per schema: confirming it has a valid top-level shape
/// and pre-walking it to build the `$id` index, so repeated validations against the same schema
/// don't redo that walk every time.
#[derive(Debug, Clone, PartialEq)]
pub struct JSONSchema<'a> {
    schema: &'a Value,
    ids: BTreeMap<String, &'a Value>,
}

/// Every violated keyword found during one `validate` call, keyed by the `$.a.b.0`-style path
/// of the instance location it was raised against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: BTreeMap<String, Vec<&'static str>>,
}

impl<'a> JSONSchema<'a> {
    /// Checks that `schema` is an object or a boolean and builds its `$id` index.
    pub fn compile(schema: &'a Value) -> Result<Self, CompilationError> {
        match schema {
            Value::Object(_) | Value::Bool(_) => Ok(JSONSchema {
                schema,
                ids: state::build_ids(schema),
            }),
            _ => Err(CompilationError::schema(
                "<schema>",
                "a schema must be a JSON object or a boolean",
            )),
        }
    }

    /// Walks `instance` against the schema and returns every violation found, or `Err` if a
    /// `$ref` reachable while walking this particular instance does not resolve (a malformed
    /// top-level shape is already ruled out by `compile`).
    pub fn validate(&self, instance: &Value) -> Result<ValidationOutcome, CompilationError> {
        let mut state = ValidationState::with_ids(self.schema, self.ids.clone());
        engine::apply(self.schema, instance, &mut state)?;
        let errors = state.into_errors();
        Ok(ValidationOutcome {
            is_valid: errors.is_empty(),
            errors,
        })
    }

    /// Like [`JSONSchema::validate`], collapsed to a bool. Panics on an unresolvable `$ref`;
    /// use [`JSONSchema::validate`] directly if that distinction matters to the caller.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).expect("unresolvable $ref").is_valid
    }
}

/// A shortcut for validating `instance` against `schema` without keeping a [`JSONSchema`]
/// around. Draft version is always Draft 6.
///
/// ```rust
/// use jsonschema6::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    JSONSchema::compile(schema)
        .expect("Invalid schema")
        .is_valid(instance)
}

/// A shortcut for validating `instance` against `schema` and getting every violation back.
pub fn validate(schema: &Value, instance: &Value) -> Result<ValidationOutcome, CompilationError> {
    JSONSchema::compile(schema)?.validate(instance)
}
