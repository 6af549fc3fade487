use crate::schema::SelectMode;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One selectable entry supplied by the reference-list provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceOption {
    pub reference_key: String,
    pub display_name: String,
}

/// Anything that can supply reference options, e.g. the draft store's saved categories.
pub trait ReferenceSource {
    fn reference_options(&self) -> Vec<ReferenceOption>;
}

/// A selection over an externally supplied option list.
pub struct ReferencePicker {
    options: Vec<ReferenceOption>,
    mode: SelectMode,
}

impl ReferencePicker {
    /// Options are deduplicated by reference key; the first occurrence wins.
    pub fn new(options: impl IntoIterator<Item = ReferenceOption>, mode: SelectMode) -> Self {
        Self {
            options: options
                .into_iter()
                .unique_by(|o| o.reference_key.clone())
                .collect(),
            mode,
        }
    }

    pub fn from_source(source: &dyn ReferenceSource, mode: SelectMode) -> Self {
        Self::new(source.reference_options(), mode)
    }

    pub fn options(&self) -> &[ReferenceOption] {
        &self.options
    }

    pub fn toggle(&self, current: Option<&Value>, key: &str) -> Value {
        toggle(current, key, self.mode)
    }

    /// Options in list order, each paired with whether it is selected.
    pub fn entries(&self, current: Option<&Value>) -> Vec<(&ReferenceOption, bool)> {
        let selected = selection(current);
        self.options
            .iter()
            .map(|o| (o, selected.contains(&o.reference_key)))
            .collect()
    }

    /// e.g. `2 of 5 selected`.
    pub fn summary(&self, current: Option<&Value>) -> String {
        format!(
            "{} of {} selected",
            selection(current).len(),
            self.options.len()
        )
    }
}

/// The selected keys in selection order.
pub fn selection(current: Option<&Value>) -> Vec<String> {
    match current {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Single mode: selecting the selected key clears, any other key replaces.
/// Multiple mode: adds an absent key at the end, removes a present one.
pub fn toggle(current: Option<&Value>, key: &str, mode: SelectMode) -> Value {
    let mut keys = selection(current);
    let present = keys.iter().any(|k| k == key);
    match mode {
        SelectMode::Single => {
            keys = if present { Vec::new() } else { vec![key.to_string()] };
        }
        SelectMode::Multiple => {
            if present {
                keys.retain(|k| k != key);
            } else {
                keys.push(key.to_string());
            }
        }
    }
    Value::Array(keys.into_iter().map(Value::String).collect())
}
