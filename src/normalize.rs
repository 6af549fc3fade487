use crate::value::Record;
use serde_json::Value;

/// Strips empty values from a value tree before it is emitted.
///
/// Rules, applied bottom-up:
/// - `null` and strings that are empty after trimming are absent; other strings are trimmed.
/// - Numbers and booleans are kept as-is, including `0` and `false`.
/// - Arrays keep their surviving elements in order and are absent when none survive.
/// - Objects keep their surviving keys in insertion order and are absent when none survive.
///
/// `clean` is idempotent: cleaning a cleaned tree returns the same tree.
pub fn clean(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Bool(_) | Value::Number(_) => Some(value.clone()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_string()))
            }
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items.iter().filter_map(clean).collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Array(cleaned))
            }
        }
        Value::Object(map) => clean_record(map).map(Value::Object),
    }
}

/// Record variant of [`clean`].
pub fn clean_record(record: &Record) -> Option<Record> {
    let cleaned: Record = record
        .iter()
        .filter_map(|(k, v)| clean(v).map(|cv| (k.clone(), cv)))
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
