//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the entry points a view layer calls.
//! - Persist the full snapshot after every successful mutation.
//!
//! # Invariants
//! - Failed operations neither mutate the store nor write storage.
//! - New todos created through `create_todo` land in the first project.

use crate::model::project::ProjectId;
use crate::model::todo_item::{TodoFields, TodoId, TodoItem};
use crate::persist::{PersistError, PersistenceAdapter};
use crate::storage::KeyValueStore;
use crate::store::todo_store::{StoreError, TodoStore};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Store plus persistence, wired for view-layer use.
pub struct TodoService<S: KeyValueStore> {
    store: TodoStore,
    persistence: PersistenceAdapter<S>,
}

impl<S: KeyValueStore> TodoService<S> {
    /// Creates a service over `storage` and loads any existing snapshot.
    pub fn open(storage: S) -> ServiceResult<Self> {
        Self::with_persistence(PersistenceAdapter::new(storage))
    }

    /// Creates a service over a preconfigured adapter and loads from it.
    pub fn with_persistence(persistence: PersistenceAdapter<S>) -> ServiceResult<Self> {
        let mut store = TodoStore::new();
        persistence.load(&mut store)?;
        Ok(Self { store, persistence })
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Creates a todo in the first project, creating "Default Project" when
    /// the store is empty.
    ///
    /// Returns `(project_id, todo_id)` of the new item.
    pub fn create_todo(&mut self, fields: TodoFields) -> ServiceResult<(ProjectId, TodoId)> {
        let todo = TodoItem::new(fields);
        let todo_id = todo.id();
        let project_id = self
            .store
            .add_todo_to_default_project(todo)
            .inspect_err(|err| log_rejected("todo_create", err))?;
        self.save()?;
        Ok((project_id, todo_id))
    }

    /// Creates an empty project and persists it.
    pub fn create_project(&mut self, name: impl Into<String>) -> ServiceResult<ProjectId> {
        let project_id = self.store.create_project(name);
        self.save()?;
        Ok(project_id)
    }

    pub fn add_todo_to_project(
        &mut self,
        todo: TodoItem,
        project_id: ProjectId,
    ) -> ServiceResult<()> {
        self.store
            .add_todo_to_project(todo, project_id)
            .inspect_err(|err| log_rejected("todo_add", err))?;
        self.save()
    }

    /// Deletes a todo and persists; returns the removed item.
    pub fn delete_todo_from_project(
        &mut self,
        todo_id: TodoId,
        project_id: ProjectId,
    ) -> ServiceResult<TodoItem> {
        let removed = self
            .store
            .delete_todo_from_project(todo_id, project_id)
            .inspect_err(|err| log_rejected("todo_delete", err))?;
        self.save()?;
        Ok(removed)
    }

    pub fn update_todo_in_project(
        &mut self,
        todo_id: TodoId,
        project_id: ProjectId,
        fields: TodoFields,
    ) -> ServiceResult<()> {
        self.store
            .update_todo_in_project(todo_id, project_id, fields)
            .inspect_err(|err| log_rejected("todo_update", err))?;
        self.save()
    }

    /// Re-reads the stored snapshot into the store.
    pub fn reload(&mut self) -> ServiceResult<bool> {
        Ok(self.persistence.load(&mut self.store)?)
    }

    fn save(&self) -> ServiceResult<()> {
        Ok(self.persistence.save(&self.store)?)
    }
}

fn log_rejected(event: &str, err: &StoreError) {
    warn!("event={event} module=service status=rejected error={err}");
}
