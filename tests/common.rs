//! Common test utilities for building endpoints and value trees.
use apiform::prelude::*;
use apiform::value::Record;

/// Converts a `json!` object literal into a record.
#[allow(dead_code)]
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

fn bare_endpoint(id: &str, method: Method, path: &str) -> EndpointDefinition {
    EndpointDefinition {
        id: id.to_string(),
        label: id.to_string(),
        method,
        path: path.to_string(),
        tag: "Test".to_string(),
        summary: String::new(),
        path_params: Vec::new(),
        query_params: Vec::new(),
        body_fields: Vec::new(),
    }
}

/// `GET /v1/products` with `page` and `perPage` query parameters.
#[allow(dead_code)]
pub fn list_endpoint() -> EndpointDefinition {
    EndpointDefinition {
        query_params: vec![
            FieldSchema::number("page", "Page"),
            FieldSchema::number("perPage", "Per Page"),
        ],
        ..bare_endpoint("listProducts", Method::Get, "/v1/products")
    }
}

/// `POST /v1/things` whose only body field is `name`.
#[allow(dead_code)]
pub fn name_only_endpoint() -> EndpointDefinition {
    EndpointDefinition {
        body_fields: vec![FieldSchema::text("name", "Name").required()],
        ..bare_endpoint("createThing", Method::Post, "/v1/things")
    }
}

/// `PUT /v1/categories/{categoryKey}` with a small body.
#[allow(dead_code)]
pub fn category_endpoint() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![FieldSchema::text("categoryKey", "Category Key").required()],
        body_fields: vec![
            FieldSchema::text("name", "Name"),
            FieldSchema::number("rank", "Rank"),
        ],
        ..bare_endpoint("upsertCategory", Method::Put, "/v1/categories/{categoryKey}")
    }
}

/// `DELETE /v1/categories/{categoryKey}`, declaring a body field it must never send.
#[allow(dead_code)]
pub fn delete_endpoint() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![FieldSchema::text("categoryKey", "Category Key")],
        body_fields: vec![FieldSchema::text("reason", "Reason")],
        ..bare_endpoint("deleteCategory", Method::Delete, "/v1/categories/{categoryKey}")
    }
}

/// A body schema touching every field kind, with nesting two levels deep.
#[allow(dead_code)]
pub fn nested_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("name", "Name"),
        FieldSchema::number("rank", "Rank"),
        FieldSchema::datetime("startsAt", "Starts At"),
        FieldSchema::key_value("additions", "Additions"),
        FieldSchema::translations("translations", "Translations", Vec::new()),
        FieldSchema::hierarchy("roots", "Roots"),
        FieldSchema::reference_picker("categories", "Categories", SelectMode::Multiple),
        FieldSchema::reference_picker("primary", "Primary", SelectMode::Single),
        FieldSchema::scalar_array("tags", "Tags", FieldSchema::text("tag", "Tag")),
        FieldSchema::record_array(
            "linkGroups",
            "Link Groups",
            "Link Group",
            vec![
                FieldSchema::text("groupKey", "Group Key"),
                FieldSchema::record_array(
                    "links",
                    "Links",
                    "Link",
                    vec![
                        FieldSchema::text("name", "Name"),
                        FieldSchema::text("url", "URL"),
                    ],
                ),
            ],
        ),
        FieldSchema::record(
            "owner",
            "Owner",
            vec![
                FieldSchema::text("team", "Team"),
                FieldSchema::text("email", "Email"),
            ],
        ),
    ]
}

/// Finds a field of [`nested_fields`] by key.
#[allow(dead_code)]
pub fn nested_field(key: &str) -> FieldSchema {
    nested_fields()
        .into_iter()
        .find(|f| f.key == key)
        .unwrap_or_else(|| panic!("no test field '{}'", key))
}

/// Values as a user would leave them mid-edit, including blanks.
#[allow(dead_code)]
pub fn sample_values() -> FormValues {
    FormValues {
        path_values: record(serde_json::json!({ "categoryKey": "cards" })),
        query_values: Record::new(),
        body_values: record(serde_json::json!({
            "name": "  Accounts ",
            "rank": 0,
            "additions": { "color": "" },
            "tags": ["", "retail"]
        })),
    }
}
