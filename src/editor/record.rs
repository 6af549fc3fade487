use crate::value::{Record, without_key};
use serde_json::Value;

/// Merges one key into a record, leaving siblings and their order untouched.
/// `None` unsets the key.
pub fn set_field(record: &Record, key: &str, value: Option<Value>) -> Record {
    match value {
        Some(value) => {
            let mut next = record.clone();
            next.insert(key.to_string(), value);
            next
        }
        None => without_key(record.clone(), key),
    }
}
