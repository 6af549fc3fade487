use crate::value::{Record, record_or_empty, without_key};
use serde_json::Value;

/// Adds a new entry. Blank keys and keys that already exist leave the value as it was.
pub fn add_entry(current: Option<&Value>, key: &str, value: &str) -> Option<Value> {
    let mut map = record_or_empty(current);
    let key = key.trim();
    if key.is_empty() || map.contains_key(key) {
        return current.cloned();
    }
    map.insert(key.to_string(), Value::String(value.to_string()));
    Some(Value::Object(map))
}

/// Replaces the value of an existing entry in place. Unknown keys are ignored.
pub fn update_entry(current: Option<&Value>, key: &str, value: &str) -> Option<Value> {
    let mut map = record_or_empty(current);
    let Some(slot) = map.get_mut(key) else {
        return current.cloned();
    };
    *slot = Value::String(value.to_string());
    Some(Value::Object(map))
}

pub fn remove_entry(current: Option<&Value>, key: &str) -> Option<Value> {
    let map = record_or_empty(current);
    if !map.contains_key(key) {
        return current.cloned();
    }
    Some(Value::Object(without_key(map, key)))
}

/// Entries in insertion order. Non-text values are rendered as JSON.
pub fn entries(current: Option<&Value>) -> Vec<(String, String)> {
    let map: Record = record_or_empty(current);
    map.into_iter()
        .map(|(k, v)| match v {
            Value::String(s) => (k, s),
            other => (k, other.to_string()),
        })
        .collect()
}
