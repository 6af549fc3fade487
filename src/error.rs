use thiserror::Error;

/// Errors raised while loading or querying a schema catalog.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Endpoint '{0}' is not defined in the catalog")]
    UnknownEndpoint(String),
}

/// Errors raised when an edit cannot be routed to a field.
///
/// Stale indices are not errors: removing or updating an index that no longer
/// exists leaves the value untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Operation '{operation}' cannot be applied to field '{field}' of kind '{kind}'")]
    UnsupportedOperation {
        field: String,
        kind: &'static str,
        operation: &'static str,
    },

    #[error("Field '{key}' is not declared under '{parent}'")]
    UnknownField { key: String, parent: String },

    #[error("Invalid field path '{path}': {message}")]
    InvalidPath { path: String, message: String },
}

/// Errors raised by the draft store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    #[error("Draft '{0}' was not found")]
    NotFound(String),

    #[error("Could not access store file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize drafts: {0}")]
    Serialization(String),
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file '{path}' is not valid TOML: {message}")]
    Parse { path: String, message: String },
}
