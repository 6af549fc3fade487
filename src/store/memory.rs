use super::{DraftCollection, DraftStore};
use crate::error::StoreError;

/// Keeps drafts in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    drafts: DraftCollection,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drafts(drafts: DraftCollection) -> Self {
        Self { drafts }
    }
}

impl DraftStore for MemoryStore {
    fn drafts(&self) -> &DraftCollection {
        &self.drafts
    }

    fn drafts_mut(&mut self) -> &mut DraftCollection {
        &mut self.drafts
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}
