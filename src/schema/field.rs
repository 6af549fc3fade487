use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Static declaration of one form field.
///
/// Schema trees are built once (from the built-in catalog or a catalog file) and are
/// never mutated by the editor; only values change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Display-only default, e.g. the server-side default of a query parameter.
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_hint: Option<serde_json::Value>,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(flatten)]
    pub constraints: Constraints,
}

/// The closed set of field types the editor knows how to handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    #[serde(rename = "datetime")]
    DateTime,
    KeyValue,
    Translations {
        /// Per-locale properties offered as fixed inputs. Empty means free-form.
        #[serde(
            default,
            rename = "translatableFields",
            skip_serializing_if = "Vec::is_empty"
        )]
        translatable: Vec<TranslatableField>,
    },
    Hierarchy,
    #[serde(rename = "category-picker", alias = "reference-picker")]
    ReferencePicker {
        #[serde(default)]
        mode: SelectMode,
    },
    Array {
        items: ArrayItems,
        #[serde(default, rename = "itemLabel", skip_serializing_if = "Option::is_none")]
        item_label: Option<String>,
    },
    #[serde(rename = "object")]
    Record { fields: Vec<FieldSchema> },
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::DateTime => "datetime",
            FieldKind::KeyValue => "key-value",
            FieldKind::Translations { .. } => "translations",
            FieldKind::Hierarchy => "hierarchy",
            FieldKind::ReferencePicker { .. } => "category-picker",
            FieldKind::Array { .. } => "array",
            FieldKind::Record { .. } => "object",
        }
    }
}

/// Element shape of an array field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "itemKind", rename_all = "lowercase")]
pub enum ArrayItems {
    Scalar { item: Box<FieldSchema> },
    Record { fields: Vec<FieldSchema> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    Single,
    #[default]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatableField {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub multiline: bool,
}

/// Advisory UI hints. None of these are enforced when values are edited or compiled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multiline: bool,
}

impl Constraints {
    /// Human-readable hint line, e.g. `Required · Min length: 1 · Max length: 255`.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.required {
            parts.push("Required".to_string());
        }
        if let Some(n) = self.min_length {
            parts.push(format!("Min length: {}", n));
        }
        if let Some(n) = self.max_length {
            parts.push(format!("Max length: {}", n));
        }
        if let Some(n) = self.min {
            parts.push(format!("Min value: {}", n));
        }
        if let Some(n) = self.max {
            parts.push(format!("Max value: {}", n));
        }
        if let Some(n) = self.min_items {
            parts.push(format!(
                "At least {} item{}",
                n,
                if n > 1 { "s" } else { "" }
            ));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.into_iter().join(" · "))
        }
    }
}

impl FieldSchema {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: None,
            placeholder: None,
            default_hint: None,
            kind,
            constraints: Constraints::default(),
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn number(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub fn datetime(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::DateTime)
    }

    pub fn key_value(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::KeyValue)
    }

    pub fn translations(key: &str, label: &str, translatable: Vec<TranslatableField>) -> Self {
        Self::new(key, label, FieldKind::Translations { translatable })
    }

    pub fn hierarchy(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Hierarchy)
    }

    pub fn reference_picker(key: &str, label: &str, mode: SelectMode) -> Self {
        Self::new(key, label, FieldKind::ReferencePicker { mode })
    }

    pub fn scalar_array(key: &str, label: &str, item: FieldSchema) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Array {
                items: ArrayItems::Scalar {
                    item: Box::new(item),
                },
                item_label: None,
            },
        )
    }

    pub fn record_array(key: &str, label: &str, item_label: &str, fields: Vec<FieldSchema>) -> Self {
        Self::new(
            key,
            label,
            FieldKind::Array {
                items: ArrayItems::Record { fields },
                item_label: Some(item_label.to_string()),
            },
        )
    }

    pub fn record(key: &str, label: &str, fields: Vec<FieldSchema>) -> Self {
        Self::new(key, label, FieldKind::Record { fields })
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn length(mut self, min: Option<u32>, max: u32) -> Self {
        self.constraints.min_length = min;
        self.constraints.max_length = Some(max);
        self
    }

    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.constraints.min = min;
        self.constraints.max = max;
        self
    }

    pub fn min_items(mut self, n: u32) -> Self {
        self.constraints.min_items = Some(n);
        self
    }

    pub fn multiline(mut self) -> Self {
        self.constraints.multiline = true;
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn describe(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn default_hint(mut self, value: serde_json::Value) -> Self {
        self.default_hint = Some(value);
        self
    }

    /// Child fields of a record or record-array field.
    pub fn child_fields(&self) -> Option<&[FieldSchema]> {
        match &self.kind {
            FieldKind::Record { fields } => Some(fields),
            FieldKind::Array {
                items: ArrayItems::Record { fields },
                ..
            } => Some(fields),
            _ => None,
        }
    }
}

/// Finds a sibling field by key.
pub fn find_field<'a>(fields: &'a [FieldSchema], key: &str) -> Option<&'a FieldSchema> {
    fields.iter().find(|f| f.key == key)
}
