use crate::schema::ArrayItems;
use crate::value::{Record, array_or_empty};
use serde_json::Value;

/// Appends an empty element: `""` for scalar items, `{}` for record items.
pub fn append(current: Option<&Value>, items: &ArrayItems) -> Value {
    let mut list = array_or_empty(current);
    list.push(match items {
        ArrayItems::Scalar { .. } => Value::String(String::new()),
        ArrayItems::Record { .. } => Value::Object(Record::new()),
    });
    Value::Array(list)
}

/// Removes the element at `index`, shifting later elements down.
/// A stale index returns the current value unchanged.
pub fn remove_at(current: Option<&Value>, index: usize) -> Option<Value> {
    let mut list = array_or_empty(current);
    if index >= list.len() {
        return current.cloned();
    }
    list.remove(index);
    Some(Value::Array(list))
}

/// Replaces the element at `index`. A stale index returns the current value unchanged.
pub fn update_at(current: Option<&Value>, index: usize, value: Value) -> Option<Value> {
    let mut list = array_or_empty(current);
    let Some(slot) = list.get_mut(index) else {
        return current.cloned();
    };
    *slot = value;
    Some(Value::Array(list))
}
