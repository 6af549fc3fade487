//! Prelude module for convenient imports
//!
//! Re-exports the types needed to pick an endpoint, edit a form, compile it and store
//! drafts.
//!
//! # Example
//!
//! ```rust,no_run
//! use apiform::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::product_directory();
//! let mut form = FormSession::new(catalog.get("getProducts")?);
//! form.edit_field(Section::Query, "page", EditOp::SetNumber("2".into()))?;
//!
//! println!("{}", form.build_output().json_view());
//! # Ok(())
//! # }
//! ```

// Schema
pub use crate::schema::{
    Catalog, EndpointDefinition, FieldKind, FieldOutline, FieldSchema, Method, Section,
    SelectMode,
};

// Editing
pub use crate::editor::{EditOp, FieldEditor, FieldPath, ReferencePicker, ReferenceSource};
pub use crate::form::{ExampleSet, FormSession, FormValues};
pub use crate::normalize::clean;

// Output
pub use crate::request::{RequestCompiler, RequestDescriptor};

// Persistence and settings
pub use crate::config::Settings;
pub use crate::store::{Draft, DraftStore, JsonFileStore, MemoryStore};

// Error types
pub use crate::error::{ConfigError, EditError, SchemaError, StoreError};

// Value tree
pub use serde_json::Value;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
