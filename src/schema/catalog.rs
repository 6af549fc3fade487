use super::endpoint::EndpointDefinition;
use super::product_directory;
use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered, read-only list of endpoint definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub endpoints: Vec<EndpointDefinition>,
}

impl Catalog {
    pub fn new(endpoints: Vec<EndpointDefinition>) -> Self {
        Self { endpoints }
    }

    /// The built-in product directory catalog.
    pub fn product_directory() -> Self {
        Self::new(product_directory::endpoints())
    }

    /// Parses a catalog from JSON. Accepts either `{ "endpoints": [...] }` or a bare array.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let parsed = if json.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<EndpointDefinition>>(json).map(Catalog::new)
        } else {
            serde_json::from_str::<Catalog>(json)
        };
        let catalog = parsed.map_err(|e| SchemaError::JsonParseError(e.to_string()))?;
        debug!(endpoints = catalog.endpoints.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Result<&EndpointDefinition, SchemaError> {
        self.endpoints
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| SchemaError::UnknownEndpoint(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointDefinition> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
