//! Compiles form values into a concrete HTTP request description.
//!
//! The descriptor is derived on every read and never stored; the value trees remain the
//! source of truth. Compilation is deterministic: the same inputs always render to the
//! same bytes.

use crate::normalize::clean_record;
use crate::schema::EndpointDefinition;
use crate::value::Record;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub mod curl;
pub mod uri;

pub use crate::schema::Method;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// A compiled request, ready to be shown as JSON or as a shell command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip)]
    pub command_line: String,
}

impl RequestDescriptor {
    /// Pretty-printed `{method, url, headers?, body?}`.
    pub fn json_view(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }
}

/// Turns an endpoint definition plus its three value trees into a [`RequestDescriptor`].
pub struct RequestCompiler;

impl RequestCompiler {
    pub fn compile(
        endpoint: &EndpointDefinition,
        path_values: &Record,
        query_values: &Record,
        body_values: &Record,
        base_url: &str,
    ) -> RequestDescriptor {
        let path = uri::substitute_path(&endpoint.path, path_values);
        let query = uri::query_string(&endpoint.query_params, query_values);
        let full_url = uri::build_url(base_url, &path, query.as_deref());

        let body = endpoint
            .has_body()
            .then(|| Value::Object(clean_record(body_values).unwrap_or_default()));
        let headers = body.as_ref().map(|_| {
            BTreeMap::from([(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())])
        });

        let mut request = RequestDescriptor {
            method: endpoint.method,
            url: full_url,
            headers,
            body,
            command_line: String::new(),
        };
        request.command_line = curl::render(&request);

        debug!(
            endpoint = %endpoint.id,
            url = %request.url,
            has_body = request.body.is_some(),
            "compiled request"
        );
        request
    }
}
