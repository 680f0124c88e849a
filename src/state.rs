use serde_json::Value;
use std::collections::BTreeMap;

/// Threaded through one `validate` call: the current instance path, the schema root (for
/// resolving `#`-rooted references), the `$id` index built by the initial pre-walk, and the
/// errors collected so far.
pub struct ValidationState<'a> {
    path: Vec<String>,
    pub(crate) schema_root: &'a Value,
    pub(crate) ids: BTreeMap<String, &'a Value>,
    errors: BTreeMap<String, Vec<&'static str>>,
}

impl<'a> ValidationState<'a> {
    pub(crate) fn new(schema_root: &'a Value) -> Self {
        Self::with_ids(schema_root, build_ids(schema_root))
    }

    /// Reuses an `$id` index built once by `JSONSchema::compile`, so repeated `validate` calls
    /// against the same schema don't re-walk it for every instance.
    pub(crate) fn with_ids(schema_root: &'a Value, ids: BTreeMap<String, &'a Value>) -> Self {
        ValidationState {
            path: Vec::new(),
            schema_root,
            ids,
            errors: BTreeMap::new(),
        }
    }

    pub(crate) fn current_path(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            out.push('.');
            out.push_str(segment);
        }
        out
    }

    /// Runs `f` with `segment` pushed onto the path, then restores the path regardless of how
    /// `f` returns. Handlers call back into the dispatcher through this instead of managing
    /// push/pop themselves, so an early return can never leave a stale path behind.
    pub(crate) fn descend<T>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.into());
        let result = f(self);
        self.path.pop();
        result
    }

    pub(crate) fn add_error(&mut self, tag: &'static str) {
        self.errors
            .entry(self.current_path())
            .or_insert_with(Vec::new)
            .push(tag);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_errors(self) -> BTreeMap<String, Vec<&'static str>> {
        self.errors
    }

    /// A sibling state sharing `schema_root` and `ids` but starting with no errors and no
    /// recorded path depth beyond the current one — used by `anyOf`/`oneOf`/`not`/`contains` so
    /// a failed branch's errors never leak into the parent's error map.
    pub(crate) fn fork(&self) -> Self {
        ValidationState {
            path: self.path.clone(),
            schema_root: self.schema_root,
            ids: self.ids.clone(),
            errors: BTreeMap::new(),
        }
    }
}

pub(crate) fn build_ids(schema_root: &Value) -> BTreeMap<String, &Value> {
    let mut ids = BTreeMap::new();
    collect_ids(schema_root, &mut ids);
    ids
}

fn collect_ids<'a>(schema: &'a Value, ids: &mut BTreeMap<String, &'a Value>) {
    if let Value::Object(map) = schema {
        if let Some(Value::String(id)) = map.get("$id") {
            ids.insert(id.clone(), schema);
        }
        for value in map.values() {
            collect_ids(value, ids);
        }
    } else if let Value::Array(items) = schema {
        for item in items {
            collect_ids(item, ids);
        }
    }
}
