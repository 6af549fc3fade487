use super::{DraftCollection, DraftStore};
use crate::error::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps drafts in a single pretty-printed JSON document, rewritten after every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    drafts: DraftCollection,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; it is created on first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let drafts = match fs::read_to_string(&path) {
            Ok(text) => DraftCollection::from_json(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => DraftCollection::default(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        debug!(path = %path.display(), drafts = drafts.len(), "opened draft store");
        Ok(Self { path, drafts })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for JsonFileStore {
    fn drafts(&self) -> &DraftCollection {
        &self.drafts
    }

    fn drafts_mut(&mut self) -> &mut DraftCollection {
        &mut self.drafts
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let text = self.drafts.to_json()?;
        fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
