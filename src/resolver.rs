use crate::error::CompilationError;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

lazy_static! {
    /// Process-lifetime cache of remote documents fetched for `http(s)://`-prefixed `$ref`
    /// values, keyed by URI. Guarded the same way the ancestor crate's `RefValidator` guarded
    /// its own once-per-compile resolution, just with a `Mutex` since fetches are exclusive
    /// writes rather than read-mostly lookups.
    static ref REMOTE_CACHE: Mutex<HashMap<String, Value>> = Mutex::new(HashMap::new());
}

/// Resolves a `$ref` string against `root`. `"#"` returns the root itself; an `http(s)://`
/// reference is fetched (feature-gated on `reqwest`) and cached for the life of the process;
/// anything else is treated as a JSON-Pointer fragment (`#/a/b/0`) walked against `root`.
pub(crate) fn resolve<'a>(reference: &str, root: &'a Value) -> Result<ResolvedRef<'a>, CompilationError> {
    if reference == "#" {
        return Ok(ResolvedRef::Borrowed(root));
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return fetch_remote(reference).map(ResolvedRef::Owned);
    }
    if !reference.starts_with("#/") {
        return Err(CompilationError::reference(reference, "expected '#', an absolute URI, or a '#/' pointer"));
    }
    pointer(root, &reference[1..])
        .map(ResolvedRef::Borrowed)
        .ok_or_else(|| CompilationError::reference(reference, "pointer does not resolve within the schema"))
}

/// Either a subschema borrowed straight out of the root document, or one owned because it was
/// fetched from a remote document that does not outlive this call.
pub(crate) enum ResolvedRef<'a> {
    Borrowed(&'a Value),
    Owned(Value),
}

impl<'a> ResolvedRef<'a> {
    pub(crate) fn as_value(&self) -> &Value {
        match self {
            ResolvedRef::Borrowed(v) => v,
            ResolvedRef::Owned(v) => v,
        }
    }
}

fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(document);
    }
    let mut target = document;
    for raw_token in pointer.split('/') {
        // Draft 6 / RFC 6901: unescape `~1` before `~0`, in that order, never the reverse.
        let token = raw_token.replace("~1", "/").replace("~0", "~");
        target = match target {
            Value::Object(map) => map.get(&token)?,
            Value::Array(list) => parse_index(&token).and_then(|i| list.get(i))?,
            _ => return None,
        };
    }
    Some(target)
}

fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.starts_with('0') && token.len() != 1) {
        return None;
    }
    token.parse().ok()
}

#[cfg(feature = "reqwest")]
fn fetch_remote(uri: &str) -> Result<Value, CompilationError> {
    if let Some(cached) = REMOTE_CACHE.lock().get(uri) {
        return Ok(cached.clone());
    }
    let document: Value = reqwest::blocking::get(uri)
        .map_err(|e| CompilationError::reference(uri, e.to_string()))?
        .json()
        .map_err(|e| CompilationError::reference(uri, e.to_string()))?;
    REMOTE_CACHE.lock().insert(uri.to_string(), document.clone());
    Ok(document)
}

#[cfg(not(feature = "reqwest"))]
fn fetch_remote(uri: &str) -> Result<Value, CompilationError> {
    Err(CompilationError::reference(
        uri,
        "remote references require the 'reqwest' feature",
    ))
}
