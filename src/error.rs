use std::fmt;

/// A fatal condition: either the schema itself is malformed, or a `$ref` inside it could not
/// be resolved. Both abort validation immediately, unlike a validation error, which is merely
/// recorded and does not stop the walk.
#[derive(Debug, Clone, PartialEq)]
pub enum CompilationError {
    /// A keyword's value does not have the shape Draft 6 requires for it.
    SchemaError { keyword: &'static str, reason: String },
    /// A `$ref` could not be resolved, either because the pointer did not lead anywhere in the
    /// root schema or because a remote fetch failed.
    RefError { reference: String, reason: String },
}

impl CompilationError {
    pub(crate) fn schema(keyword: &'static str, reason: impl Into<String>) -> Self {
        CompilationError::SchemaError {
            keyword,
            reason: reason.into(),
        }
    }

    pub(crate) fn reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        CompilationError::RefError {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilationError::SchemaError { keyword, reason } => {
                write!(f, "invalid value for keyword '{}': {}", keyword, reason)
            }
            CompilationError::RefError { reference, reason } => {
                write!(f, "could not resolve reference '{}': {}", reference, reason)
            }
        }
    }
}

impl std::error::Error for CompilationError {}

impl From<regex::Error> for CompilationError {
    fn from(err: regex::Error) -> Self {
        CompilationError::schema("pattern", err.to_string())
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for CompilationError {
    fn from(err: reqwest::Error) -> Self {
        CompilationError::reference("<remote>", err.to_string())
    }
}
