//! Draft persistence.
//!
//! The form controller talks to storage only through [`DraftStore`], so any backend can be
//! injected: [`MemoryStore`] for tests and scratch sessions, [`JsonFileStore`] for a
//! document on disk that survives restarts.

use crate::editor::{ReferenceOption, ReferenceSource};
use crate::error::StoreError;
use crate::form::FormValues;
use chrono::NaiveDate;
use tracing::{info, warn};

pub mod draft;
pub mod file;
pub mod memory;

pub use draft::{Draft, DraftCollection};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Entity type a draft is filed under, derived from its endpoint id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Products,
    Categories,
    Hierarchies,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Products, Bucket::Categories, Bucket::Hierarchies];

    /// `...product...` and anything unrecognised go to products.
    pub fn for_endpoint(endpoint_id: &str) -> Self {
        let id = endpoint_id.to_lowercase();
        if id.contains("product") {
            Bucket::Products
        } else if id.contains("category") {
            Bucket::Categories
        } else if id.contains("hierarchy") {
            Bucket::Hierarchies
        } else {
            Bucket::Products
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bucket::Products => "products",
            Bucket::Categories => "categories",
            Bucket::Hierarchies => "hierarchies",
        }
    }
}

/// Suggested file name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("product-directory-saved-{}.json", date.format("%Y-%m-%d"))
}

/// A storage backend for drafts.
///
/// Backends only provide access to their [`DraftCollection`] and a way to persist it;
/// the operations themselves are shared.
pub trait DraftStore {
    fn drafts(&self) -> &DraftCollection;

    fn drafts_mut(&mut self) -> &mut DraftCollection;

    /// Flushes the collection to the backing medium.
    fn persist(&mut self) -> Result<(), StoreError>;

    /// Stores a new draft and returns it with its generated id.
    fn save(&mut self, endpoint_id: &str, name: &str, data: FormValues) -> Result<Draft, StoreError> {
        let draft = Draft::new(endpoint_id, name, data);
        self.drafts_mut().insert(draft.clone());
        self.persist()?;
        info!(id = %draft.id, endpoint = endpoint_id, "saved draft");
        Ok(draft)
    }

    fn update(&mut self, id: &str, name: &str, data: FormValues) -> Result<Draft, StoreError> {
        let draft = self.drafts_mut().update(id, name, data)?;
        self.persist()?;
        info!(id, "updated draft");
        Ok(draft)
    }

    fn delete(&mut self, id: &str) -> Result<Draft, StoreError> {
        let draft = self.drafts_mut().remove(id)?;
        self.persist()?;
        info!(id, "deleted draft");
        Ok(draft)
    }

    fn get(&self, id: &str) -> Result<Draft, StoreError> {
        self.drafts()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self, endpoint_id: &str) -> Vec<Draft> {
        self.drafts().for_endpoint(endpoint_id)
    }

    /// The full export document as pretty JSON.
    fn export_all(&self) -> Result<String, StoreError> {
        self.drafts().to_json()
    }

    /// Merges an export document into the store and returns the number of drafts added.
    /// A malformed document leaves the store untouched.
    fn import_all(&mut self, text: &str) -> Result<usize, StoreError> {
        let incoming = DraftCollection::from_json(text).inspect_err(|e| {
            warn!(error = %e, "rejected import file");
        })?;
        let merged = self.drafts_mut().merge(incoming);
        self.persist()?;
        info!(merged, "imported drafts");
        Ok(merged)
    }

    fn saved_categories(&self) -> Vec<ReferenceOption> {
        self.drafts().saved_categories()
    }
}

impl ReferenceSource for DraftCollection {
    fn reference_options(&self) -> Vec<ReferenceOption> {
        self.saved_categories()
    }
}

impl ReferenceSource for MemoryStore {
    fn reference_options(&self) -> Vec<ReferenceOption> {
        self.saved_categories()
    }
}

impl ReferenceSource for JsonFileStore {
    fn reference_options(&self) -> Vec<ReferenceOption> {
        self.saved_categories()
    }
}
