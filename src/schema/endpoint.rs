use super::field::{FieldSchema, find_field};
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verbs used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Read and delete verbs never carry a request body.
    pub fn carries_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint of the catalog: its route and the three field lists that make up its form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDefinition {
    pub id: String,
    pub label: String,
    pub method: Method,
    /// Path template with `{param}` placeholders.
    #[serde(alias = "pathTemplate")]
    pub path: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub path_params: Vec<FieldSchema>,
    #[serde(default)]
    pub query_params: Vec<FieldSchema>,
    #[serde(default)]
    pub body_fields: Vec<FieldSchema>,
}

/// The three value trees of a form, addressed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Path,
    Query,
    Body,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Path => "path",
            Section::Query => "query",
            Section::Body => "body",
        }
    }
}

impl EndpointDefinition {
    /// True when compiled requests for this endpoint include a JSON body.
    pub fn has_body(&self) -> bool {
        !self.body_fields.is_empty() && self.method.carries_body()
    }

    pub fn fields(&self, section: Section) -> &[FieldSchema] {
        match section {
            Section::Path => &self.path_params,
            Section::Query => &self.query_params,
            Section::Body => &self.body_fields,
        }
    }

    pub fn field(&self, section: Section, key: &str) -> Option<&FieldSchema> {
        find_field(self.fields(section), key)
    }
}
