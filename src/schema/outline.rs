use super::field::{ArrayItems, FieldKind, FieldSchema};
use std::fmt;

/// Renders a field list as an indented tree with type and constraint hints.
///
/// ```text
/// ├── externalProductId (text) Required · Min length: 1 · Max length: 255
/// └── linkGroups (array of Link Group) Required
///     ├── groupKey (text) Required · Min length: 1 · Max length: 255
///     └── links (array of Link) Required · At least 1 item
/// ```
pub struct FieldOutline<'a> {
    pub fields: &'a [FieldSchema],
}

impl<'a> fmt::Display for FieldOutline<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_fields(self.fields, f, "")
    }
}

impl<'a> FieldOutline<'a> {
    pub fn new(fields: &'a [FieldSchema]) -> Self {
        Self { fields }
    }

    fn fmt_fields(&self, fields: &[FieldSchema], f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        for (index, field) in fields.iter().enumerate() {
            let is_last = index + 1 == fields.len();
            self.fmt_field(field, f, prefix, is_last)?;
        }
        Ok(())
    }

    fn fmt_field(
        &self,
        field: &FieldSchema,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}{} ({})", prefix, node_marker, field.key, Self::type_label(field))?;
        if let Some(summary) = field.constraints.summary() {
            write!(f, " {}", summary)?;
        }
        if let Some(default) = &field.default_hint {
            write!(f, " [default: {}]", default)?;
        }
        writeln!(f)?;

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        match &field.kind {
            FieldKind::Record { fields } => self.fmt_fields(fields, f, &child_prefix)?,
            FieldKind::Array { items, .. } => match items {
                ArrayItems::Record { fields } => self.fmt_fields(fields, f, &child_prefix)?,
                ArrayItems::Scalar { item } => self.fmt_field(item, f, &child_prefix, true)?,
            },
            _ => {}
        }
        Ok(())
    }

    fn type_label(field: &FieldSchema) -> String {
        match &field.kind {
            FieldKind::Array {
                item_label: Some(label),
                ..
            } => format!("array of {}", label),
            FieldKind::Array {
                items: ArrayItems::Scalar { item },
                ..
            } => format!("array of {}", item.kind.name()),
            FieldKind::Text if field.constraints.multiline => "text, multiline".to_string(),
            other => other.name().to_string(),
        }
    }
}
