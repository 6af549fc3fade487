use crate::schema::Section;
use crate::value::Record;
use serde::{Deserialize, Serialize};

/// The three value trees of one form. Stored verbatim in drafts, never cleaned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub path_values: Record,
    #[serde(default)]
    pub query_values: Record,
    #[serde(default)]
    pub body_values: Record,
}

impl FormValues {
    pub fn section(&self, section: Section) -> &Record {
        match section {
            Section::Path => &self.path_values,
            Section::Query => &self.query_values,
            Section::Body => &self.body_values,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Record {
        match section {
            Section::Path => &mut self.path_values,
            Section::Query => &mut self.query_values,
            Section::Body => &mut self.body_values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path_values.is_empty() && self.query_values.is_empty() && self.body_values.is_empty()
    }
}
