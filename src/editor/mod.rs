//! The recursive field editor.
//!
//! Every operation takes the current value of one field and returns its replacement;
//! nothing is mutated in place. [`FieldEditor::apply`] dispatches an [`EditOp`] on the
//! field's kind, and [`FieldEditor::apply_at`] walks a [`FieldPath`] through nested
//! records and arrays, splicing the replacement back into each parent on the way out.

use crate::error::EditError;
use crate::schema::{ArrayItems, FieldKind, FieldSchema, find_field};
use crate::value::{Record, array_or_empty, record_or_empty};
use serde_json::Value;
use tracing::{debug, trace};

pub mod array;
pub mod hierarchy;
pub mod key_value;
pub mod path;
pub mod picker;
pub mod record;
pub mod scalar;
pub mod translations;

pub use hierarchy::{Hierarchy, HierarchyNode};
pub use path::{FieldPath, PathSegment};
pub use picker::{ReferenceOption, ReferencePicker, ReferenceSource};
pub use scalar::DateTimeParts;
pub use translations::{LOCALES, Locale, PRIMARY_LOCALE, SECONDARY_LOCALE};

/// One user edit, expressed against a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Text fields; also accepts a full ISO timestamp for datetime fields.
    SetText(String),
    /// Raw number input; empty input unsets the field.
    SetNumber(String),
    SetDate(String),
    SetTime(String),
    AddEntry { key: String, value: String },
    UpdateEntry { key: String, value: String },
    RemoveEntry(String),
    SetTranslation {
        locale: String,
        property: String,
        value: String,
    },
    AddRoot,
    RenameNode { path: Vec<usize>, label: String },
    AddChild(Vec<usize>),
    RemoveNode(Vec<usize>),
    Toggle(String),
    Append,
    RemoveAt(usize),
    UpdateAt { index: usize, value: Value },
    SetField { key: String, value: Option<Value> },
    /// Replaces the whole value, whatever the field kind. `null` unsets the field.
    Replace(Option<Value>),
}

impl EditOp {
    pub fn name(&self) -> &'static str {
        match self {
            EditOp::SetText(_) => "set-text",
            EditOp::SetNumber(_) => "set-number",
            EditOp::SetDate(_) => "set-date",
            EditOp::SetTime(_) => "set-time",
            EditOp::AddEntry { .. } => "add-entry",
            EditOp::UpdateEntry { .. } => "update-entry",
            EditOp::RemoveEntry(_) => "remove-entry",
            EditOp::SetTranslation { .. } => "set-translation",
            EditOp::AddRoot => "add-root",
            EditOp::RenameNode { .. } => "rename-node",
            EditOp::AddChild(_) => "add-child",
            EditOp::RemoveNode(_) => "remove-node",
            EditOp::Toggle(_) => "toggle",
            EditOp::Append => "append",
            EditOp::RemoveAt(_) => "remove-at",
            EditOp::UpdateAt { .. } => "update-at",
            EditOp::SetField { .. } => "set-field",
            EditOp::Replace(_) => "replace",
        }
    }
}

/// Stateless dispatcher over field kinds.
pub struct FieldEditor;

impl FieldEditor {
    /// Applies `op` to the current value of `field` and returns the new value.
    /// `None` means the field is unset.
    pub fn apply(
        field: &FieldSchema,
        current: Option<&Value>,
        op: EditOp,
    ) -> Result<Option<Value>, EditError> {
        trace!(field = %field.key, op = op.name(), "applying edit");
        let operation = op.name();

        let updated = match (&field.kind, op) {
            // unset is a missing key, never `null`
            (_, EditOp::Replace(value)) => value.filter(|v| !v.is_null()),

            (FieldKind::Text, EditOp::SetText(text)) => Some(scalar::set_text(&text)),
            (FieldKind::Number, EditOp::SetNumber(input)) => scalar::set_number(&input),
            (FieldKind::DateTime, EditOp::SetText(iso)) => DateTimeParts::parse(&iso).to_value(),
            (FieldKind::DateTime, EditOp::SetDate(date)) => DateTimeParts::from_value(current)
                .with_date(&date)
                .to_value(),
            (FieldKind::DateTime, EditOp::SetTime(time)) => DateTimeParts::from_value(current)
                .with_time(&time)
                .to_value(),

            (FieldKind::KeyValue, EditOp::AddEntry { key, value }) => {
                key_value::add_entry(current, &key, &value)
            }
            (FieldKind::KeyValue, EditOp::UpdateEntry { key, value }) => {
                key_value::update_entry(current, &key, &value)
            }
            (FieldKind::KeyValue, EditOp::RemoveEntry(key)) => key_value::remove_entry(current, &key),

            (
                FieldKind::Translations { .. },
                EditOp::SetTranslation {
                    locale,
                    property,
                    value,
                },
            ) => translations::set_property(current, &locale, &property, &value),

            (FieldKind::Hierarchy, EditOp::AddRoot) => {
                Some(Hierarchy::from_value(current).add_root().into_value())
            }
            (FieldKind::Hierarchy, EditOp::RenameNode { path, label }) => {
                Self::edit_hierarchy(current, |tree| tree.rename(&path, &label))
            }
            (FieldKind::Hierarchy, EditOp::AddChild(path)) => {
                Self::edit_hierarchy(current, |tree| tree.add_child(&path))
            }
            (FieldKind::Hierarchy, EditOp::RemoveNode(path)) => {
                Self::edit_hierarchy(current, |tree| tree.remove(&path))
            }

            (FieldKind::ReferencePicker { mode }, EditOp::Toggle(key)) => {
                Some(picker::toggle(current, &key, *mode))
            }

            (FieldKind::Array { items, .. }, EditOp::Append) => Some(array::append(current, items)),
            (FieldKind::Array { .. }, EditOp::RemoveAt(index)) => array::remove_at(current, index),
            (FieldKind::Array { .. }, EditOp::UpdateAt { index, value }) => {
                array::update_at(current, index, value)
            }

            (FieldKind::Record { fields }, EditOp::SetField { key, value }) => {
                if find_field(fields, &key).is_none() {
                    return Err(EditError::UnknownField {
                        key,
                        parent: field.key.clone(),
                    });
                }
                Some(Value::Object(record::set_field(
                    &record_or_empty(current),
                    &key,
                    value,
                )))
            }

            (kind, _) => {
                return Err(EditError::UnsupportedOperation {
                    field: field.key.clone(),
                    kind: kind.name(),
                    operation,
                });
            }
        };
        Ok(updated)
    }

    /// Applies `op` to the field addressed by `path` inside `root`, a record shaped by
    /// `fields`, and returns the updated record.
    ///
    /// Indices in the path that no longer exist make the whole edit a no-op.
    pub fn apply_at(
        fields: &[FieldSchema],
        root: &Record,
        path: &FieldPath,
        op: EditOp,
    ) -> Result<Record, EditError> {
        debug!(path = %path, op = op.name(), "applying edit at path");
        Self::apply_in_record(fields, root, path.segments(), op, path)
    }

    /// Resolves the schema of the value addressed by `path`.
    pub fn field_at<'f>(fields: &'f [FieldSchema], path: &FieldPath) -> Option<&'f FieldSchema> {
        let mut siblings = fields;
        let mut current: Option<&'f FieldSchema> = None;

        for segment in path.segments() {
            current = match (segment, current.map(|f| &f.kind)) {
                (PathSegment::Field(key), None | Some(FieldKind::Record { .. })) => {
                    Some(find_field(siblings, key)?)
                }
                (PathSegment::Index(_), Some(FieldKind::Array { items, .. })) => match items {
                    ArrayItems::Scalar { item } => Some(item.as_ref()),
                    ArrayItems::Record { fields } => {
                        siblings = fields;
                        None
                    }
                },
                _ => return None,
            };
            if let Some(FieldKind::Record { fields }) = current.map(|f| &f.kind) {
                siblings = fields;
            }
        }
        current
    }

    fn apply_in_record(
        fields: &[FieldSchema],
        record: &Record,
        segments: &[PathSegment],
        op: EditOp,
        full_path: &FieldPath,
    ) -> Result<Record, EditError> {
        let Some((PathSegment::Field(key), rest)) = segments.split_first() else {
            return Err(Self::invalid_path(full_path, "expected a field name"));
        };
        let field = find_field(fields, key).ok_or_else(|| EditError::UnknownField {
            key: key.clone(),
            parent: Self::parent_name(full_path, segments),
        })?;

        let updated = Self::apply_in_field(field, record.get(key), rest, op, full_path)?;
        Ok(record::set_field(record, key, updated))
    }

    fn apply_in_field(
        field: &FieldSchema,
        current: Option<&Value>,
        rest: &[PathSegment],
        op: EditOp,
        full_path: &FieldPath,
    ) -> Result<Option<Value>, EditError> {
        let Some((segment, tail)) = rest.split_first() else {
            return Self::apply(field, current, op);
        };

        match (&field.kind, segment) {
            (FieldKind::Record { fields }, PathSegment::Field(_)) => {
                let inner = record_or_empty(current);
                let updated = Self::apply_in_record(fields, &inner, rest, op, full_path)?;
                Ok(Some(Value::Object(updated)))
            }
            (FieldKind::Array { items, .. }, PathSegment::Index(index)) => {
                let list = array_or_empty(current);
                let Some(item) = list.get(*index) else {
                    debug!(path = %full_path, index, "stale index, edit ignored");
                    return Ok(current.cloned());
                };

                let replacement = match items {
                    ArrayItems::Record { fields } if !tail.is_empty() => {
                        let inner = record_or_empty(Some(item));
                        Value::Object(Self::apply_in_record(fields, &inner, tail, op, full_path)?)
                    }
                    ArrayItems::Record { .. } => match op {
                        EditOp::Replace(value) => value
                            .filter(|v| !v.is_null())
                            .unwrap_or_else(|| Value::Object(Record::new())),
                        _ => return Err(Self::invalid_path(full_path, "path ends at a record item")),
                    },
                    ArrayItems::Scalar { item: item_schema } if tail.is_empty() => {
                        Self::apply(item_schema, Some(item), op)?
                            .unwrap_or_else(|| Value::String(String::new()))
                    }
                    ArrayItems::Scalar { .. } => {
                        return Err(Self::invalid_path(full_path, "scalar items have no fields"));
                    }
                };
                Ok(array::update_at(current, *index, replacement))
            }
            _ => Err(Self::invalid_path(
                full_path,
                &format!("'{}' cannot be descended into", field.key),
            )),
        }
    }

    /// Runs a node edit; when the path led nowhere the stored value is returned as is.
    fn edit_hierarchy(
        current: Option<&Value>,
        edit: impl FnOnce(Hierarchy) -> Hierarchy,
    ) -> Option<Value> {
        let before = Hierarchy::from_value(current);
        let after = edit(before.clone());
        if after == before {
            current.cloned()
        } else {
            Some(after.into_value())
        }
    }

    fn invalid_path(path: &FieldPath, message: &str) -> EditError {
        EditError::InvalidPath {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Name of the record that `segments` is resolved against, for error messages.
    fn parent_name(full_path: &FieldPath, segments: &[PathSegment]) -> String {
        let consumed = full_path.segments().len() - segments.len();
        full_path.segments()[..consumed]
            .iter()
            .rev()
            .find_map(|s| match s {
                PathSegment::Field(name) => Some(name.clone()),
                PathSegment::Index(_) => None,
            })
            .unwrap_or_else(|| "<root>".to_string())
    }
}
