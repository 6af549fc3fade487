//! Helpers over the value tree.
//!
//! Form values are plain `serde_json::Value` trees with insertion-ordered objects. A key
//! that is missing from its record means "unset"; `null` is never written by the editor.

use serde_json::{Map, Number, Value};

/// A record node of the value tree.
pub type Record = Map<String, Value>;

/// Integral values become JSON integers so they render as `2`, not `2.0`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Converts a float into a JSON number. Non-finite input has no JSON form.
pub fn number_from_f64(n: f64) -> Option<Value> {
    if !n.is_finite() {
        return None;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // -0.0 collapses to 0
        return Some(Value::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number)
}

/// Renders a scalar the way it appears in a URL. Composite values and `null` yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Clones the record at `value`, or starts an empty one when unset or not a record.
pub fn record_or_empty(value: Option<&Value>) -> Record {
    match value {
        Some(Value::Object(map)) => map.clone(),
        _ => Record::new(),
    }
}

/// Clones the array at `value`, or starts an empty one when unset or not an array.
pub fn array_or_empty(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Text content of a scalar slot; unset and non-text values read as empty.
pub fn text_or_empty(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or("")
}

/// Returns `record` without `key`, keeping the order of the remaining keys.
pub fn without_key(record: Record, key: &str) -> Record {
    record.into_iter().filter(|(k, _)| k != key).collect()
}
