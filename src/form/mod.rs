//! Form state for one selected endpoint.
//!
//! A [`FormSession`] owns the three value trees of the endpoint currently being edited and
//! routes edits, draft loads and compilation through them. Selecting another endpoint
//! always starts from empty trees.

use crate::editor::{EditOp, FieldEditor, FieldPath};
use crate::error::{EditError, StoreError};
use crate::request::{RequestCompiler, RequestDescriptor};
use crate::schema::{DEFAULT_BASE_URL, EndpointDefinition, Section};
use crate::store::{Draft, DraftStore};
use crate::value::Record;
use tracing::{debug, info};

pub mod examples;
pub mod values;

pub use examples::ExampleSet;
pub use values::FormValues;

#[derive(Debug, Clone)]
pub struct FormSession<'c> {
    endpoint: &'c EndpointDefinition,
    base_url: String,
    values: FormValues,
    loaded_draft_id: Option<String>,
}

impl<'c> FormSession<'c> {
    pub fn new(endpoint: &'c EndpointDefinition) -> Self {
        Self::with_base_url(endpoint, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(endpoint: &'c EndpointDefinition, base_url: &str) -> Self {
        Self {
            endpoint,
            base_url: base_url.to_string(),
            values: FormValues::default(),
            loaded_draft_id: None,
        }
    }

    pub fn endpoint(&self) -> &'c EndpointDefinition {
        self.endpoint
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn section(&self, section: Section) -> &Record {
        self.values.section(section)
    }

    /// Id of the draft the current values came from, if any.
    pub fn loaded_draft_id(&self) -> Option<&str> {
        self.loaded_draft_id.as_deref()
    }

    /// Empties all three trees. The base URL is kept.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.loaded_draft_id = None;
    }

    pub fn select_endpoint(&mut self, endpoint: &'c EndpointDefinition) {
        debug!(endpoint = %endpoint.id, "selected endpoint");
        self.endpoint = endpoint;
        self.reset();
    }

    /// Replaces the trees with the draft's data, exactly as saved.
    pub fn load(&mut self, draft: &Draft) {
        if draft.endpoint_id != self.endpoint.id {
            debug!(
                draft = %draft.id,
                draft_endpoint = %draft.endpoint_id,
                endpoint = %self.endpoint.id,
                "loading draft saved for another endpoint"
            );
        }
        self.values = draft.data.clone();
        self.loaded_draft_id = Some(draft.id.clone());
    }

    /// Loads the example registered for the current endpoint.
    /// Returns `false`, leaving the form untouched, when there is none.
    pub fn load_example(&mut self, examples: &ExampleSet) -> bool {
        let Some(values) = examples.get(&self.endpoint.id) else {
            return false;
        };
        self.values = values.clone();
        self.loaded_draft_id = None;
        true
    }

    /// Replaces one whole tree.
    pub fn set_section(&mut self, section: Section, values: Record) {
        *self.values.section_mut(section) = values;
    }

    /// Applies an edit to the field at `path` within `section`.
    pub fn edit(&mut self, section: Section, path: &FieldPath, op: EditOp) -> Result<(), EditError> {
        debug!(section = section.name(), path = %path, "editing form");
        let fields = self.endpoint.fields(section);
        let updated = FieldEditor::apply_at(fields, self.values.section(section), path, op)?;
        *self.values.section_mut(section) = updated;
        Ok(())
    }

    /// Shorthand for editing a top-level field.
    pub fn edit_field(&mut self, section: Section, key: &str, op: EditOp) -> Result<(), EditError> {
        self.edit(section, &FieldPath::field(key), op)
    }

    pub fn build_output(&self) -> RequestDescriptor {
        RequestCompiler::compile(
            self.endpoint,
            &self.values.path_values,
            &self.values.query_values,
            &self.values.body_values,
            &self.base_url,
        )
    }

    /// Saves the current values under `name`. Updates the loaded draft if there is one,
    /// otherwise creates a new draft and remembers it.
    pub fn save(&mut self, store: &mut dyn DraftStore, name: &str) -> Result<Draft, StoreError> {
        let draft = match &self.loaded_draft_id {
            Some(id) => store.update(id, name, self.values.clone())?,
            None => store.save(&self.endpoint.id, name, self.values.clone())?,
        };
        info!(id = %draft.id, name, "form saved");
        self.loaded_draft_id = Some(draft.id.clone());
        Ok(draft)
    }
}
