//! Snapshot persistence of the whole store under one storage key.
//!
//! # Responsibility
//! - Serialize all projects (with nested todos) to JSON text.
//! - Rebuild full `Project`/`TodoItem` values from stored text.
//!
//! # Invariants
//! - Serialization is deterministic: equal stores produce identical text.
//! - A failed load never modifies the target store.
//! - Stored text is never repaired or defaulted; bad data is an error.

use crate::model::project::Project;
use crate::storage::{KeyValueStore, StorageError};
use crate::store::todo_store::{StoreError, TodoStore};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key the snapshot is written under unless overridden.
pub const STORAGE_KEY: &str = "todoApp";

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Storage(StorageError),
    Serialize(serde_json::Error),
    /// Stored text is not a valid snapshot.
    Parse(serde_json::Error),
    /// Stored snapshot parsed but breaks store invariants.
    InvalidData(StoreError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "storage failure: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize snapshot: {err}"),
            Self::Parse(err) => write!(f, "failed to parse stored snapshot: {err}"),
            Self::InvalidData(err) => write!(f, "invalid stored snapshot: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) | Self::Parse(err) => Some(err),
            Self::InvalidData(err) => Some(err),
        }
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Reads and writes store snapshots through a `KeyValueStore`.
pub struct PersistenceAdapter<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Creates an adapter using the default `STORAGE_KEY`.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the text `save` would write for `store`.
    pub fn snapshot(&self, store: &TodoStore) -> PersistResult<String> {
        serde_json::to_string(store.projects()).map_err(PersistError::Serialize)
    }

    /// Writes the full snapshot of `store` under the adapter key.
    pub fn save(&self, store: &TodoStore) -> PersistResult<()> {
        let text = self.snapshot(store)?;
        if let Err(err) = self.storage.set_item(&self.key, &text) {
            error!(
                "event=snapshot_save module=persist status=error key={} error={}",
                self.key, err
            );
            return Err(err.into());
        }
        info!(
            "event=snapshot_save module=persist status=ok key={} projects={} todos={} bytes={}",
            self.key,
            store.projects().len(),
            store.todo_count(),
            text.len()
        );
        Ok(())
    }

    /// Replaces `store` contents with the stored snapshot.
    ///
    /// Returns `Ok(false)` and leaves `store` untouched when nothing is
    /// stored under the key.
    ///
    /// # Errors
    /// - `Parse` when the stored text is not a project array.
    /// - `InvalidData` when ids in the snapshot collide.
    pub fn load(&self, store: &mut TodoStore) -> PersistResult<bool> {
        let Some(text) = self.storage.get_item(&self.key)? else {
            info!(
                "event=snapshot_load module=persist status=ok key={} found=false",
                self.key
            );
            return Ok(false);
        };

        let loaded = match parse_snapshot(&text) {
            Ok(loaded) => loaded,
            Err(err) => {
                error!(
                    "event=snapshot_load module=persist status=error key={} bytes={} error={}",
                    self.key,
                    text.len(),
                    err
                );
                return Err(err);
            }
        };
        store.replace_with(loaded);
        info!(
            "event=snapshot_load module=persist status=ok key={} found=true projects={} todos={}",
            self.key,
            store.projects().len(),
            store.todo_count()
        );
        Ok(true)
    }
}

fn parse_snapshot(text: &str) -> PersistResult<TodoStore> {
    let projects: Vec<Project> = serde_json::from_str(text).map_err(PersistError::Parse)?;
    TodoStore::from_projects(projects).map_err(PersistError::InvalidData)
}

#[cfg(test)]
mod tests {
    use super::parse_snapshot;
    use super::PersistError;

    #[test]
    fn parse_snapshot_accepts_empty_array() {
        let store = parse_snapshot("[]").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn parse_snapshot_rejects_object_root() {
        let err = parse_snapshot("{\"projects\":[]}").unwrap_err();
        assert!(matches!(err, PersistError::Parse(_)));
    }
}
