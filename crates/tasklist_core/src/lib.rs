//! Core domain logic for Tasklist.
//! This crate is the single source of truth for project/todo invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig, LoggingError,
};
pub use model::project::{Project, ProjectId, DEFAULT_PROJECT_NAME};
pub use model::todo_item::{ChecklistItem, Priority, TodoFields, TodoId, TodoItem};
pub use persist::{PersistError, PersistResult, PersistenceAdapter, STORAGE_KEY};
pub use service::todo_service::{ServiceError, ServiceResult, TodoService};
pub use storage::sqlite_kv::SqliteKeyValueStore;
pub use storage::{KeyValueStore, MemoryKeyValueStore, StorageError, StorageResult};
pub use store::todo_store::{StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
