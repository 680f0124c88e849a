use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Canonical JSON equality: numbers compare by numeric value regardless of whether `serde_json`
/// stored them as an integer or a float, so `1` and `1.0` are equal. `Bool` never compares equal
/// to a `Number`, matching Draft 6's notion of type-distinct primitives.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| equal(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(k, v)| right.get(k).map_or(false, |rv| equal(v, rv)))
        }
        (left, right) => left == right,
    }
}

/// Wraps a `&Value` so it can live in a `HashSet` under canonical equality, used by
/// `uniqueItems`. Hashing a `Number` by its `as_f64` bit pattern keeps `Hash`/`Eq` consistent
/// with `equal` above (the ancestor crate hashed the discriminant and the raw bits separately,
/// which could make `1` and `1.0` compare equal but hash unequal).
pub(crate) struct HashedValue<'a>(pub(crate) &'a Value);

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_value(self.0, state)
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            n.as_f64().unwrap_or(0.0).to_bits().hash(state);
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            state.write_u8(5);
            // Order-independent: fold each entry's hash together instead of feeding the
            // hasher in iteration order, since two canonically-equal objects may store
            // their keys in different insertion order.
            let mut acc: u64 = 0;
            for (k, v) in map {
                let mut entry_hasher = std::collections::hash_map::DefaultHasher::new();
                k.hash(&mut entry_hasher);
                hash_value(v, &mut entry_hasher);
                acc ^= entry_hasher.finish();
            }
            acc.hash(state);
        }
    }
}
