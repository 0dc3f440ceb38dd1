//! Project domain model.
//!
//! # Invariants
//! - `id` is generated once and never changes.
//! - `todos` order is insertion order, which is also display order.

use crate::model::todo_item::{TodoId, TodoItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Name given to the project created implicitly for the first todo.
pub const DEFAULT_PROJECT_NAME: &str = "Default Project";

/// Named container owning an ordered list of todo items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    pub name: String,
    #[serde(default)]
    todos: Vec<TodoItem>,
}

impl Project {
    /// Creates an empty project with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Builds a project around existing todo items, in the given order.
    ///
    /// Id uniqueness is checked when the project enters a `TodoStore`.
    pub fn with_todos(name: impl Into<String>, todos: Vec<TodoItem>) -> Self {
        Self {
            todos,
            ..Self::new(name)
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Todo items in display order.
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub(crate) fn push_todo(&mut self, todo: TodoItem) {
        self.todos.push(todo);
    }

    /// Removes the matching item; remaining items keep their order.
    pub(crate) fn remove_todo(&mut self, todo_id: TodoId) -> Option<TodoItem> {
        let index = self.todos.iter().position(|todo| todo.id() == todo_id)?;
        Some(self.todos.remove(index))
    }

    pub fn todo(&self, todo_id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id() == todo_id)
    }

    pub(crate) fn todo_mut(&mut self, todo_id: TodoId) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|todo| todo.id() == todo_id)
    }

    pub fn contains_todo(&self, todo_id: TodoId) -> bool {
        self.todo(todo_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
