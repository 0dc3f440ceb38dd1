//! In-memory project registry with todo CRUD.
//!
//! # Responsibility
//! - Own every project and, through them, every todo item.
//! - Report lookup failures as explicit `StoreError` values.
//!
//! # Invariants
//! - Project ids are unique across the store.
//! - Todo ids are unique across the store, not only within a project.
//! - A failed operation leaves the store unchanged.

use crate::model::project::{Project, ProjectId, DEFAULT_PROJECT_NAME};
use crate::model::todo_item::{TodoFields, TodoId, TodoItem};
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a store operation that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ProjectNotFound(ProjectId),
    TodoNotFound {
        project_id: ProjectId,
        todo_id: TodoId,
    },
    DuplicateProject(ProjectId),
    DuplicateTodo(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TodoNotFound {
                project_id,
                todo_id,
            } => write!(f, "todo {todo_id} not found in project {project_id}"),
            Self::DuplicateProject(id) => write!(f, "project id already in use: {id}"),
            Self::DuplicateTodo(id) => write!(f, "todo id already in use: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered registry of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    projects: Vec<Project>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing projects after checking id uniqueness.
    ///
    /// # Errors
    /// - `DuplicateProject` when two projects share an id.
    /// - `DuplicateTodo` when two todo items share an id anywhere.
    pub fn from_projects(projects: Vec<Project>) -> StoreResult<Self> {
        check_unique_ids(&[], &projects)?;
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.id() == project_id)
    }

    pub fn todo(&self, project_id: ProjectId, todo_id: TodoId) -> Option<&TodoItem> {
        self.project(project_id)
            .and_then(|project| project.todo(todo_id))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of todo items across all projects.
    pub fn todo_count(&self) -> usize {
        self.projects.iter().map(Project::len).sum()
    }

    /// Appends a project, rejecting ids that collide with the store or
    /// with each other inside `project`.
    pub fn add_project(&mut self, project: Project) -> StoreResult<ProjectId> {
        check_unique_ids(&self.projects, std::slice::from_ref(&project))?;
        let project_id = project.id();
        self.projects.push(project);
        debug!("event=project_add module=store status=ok project_id={project_id}");
        Ok(project_id)
    }

    /// Creates and appends an empty project.
    pub fn create_project(&mut self, name: impl Into<String>) -> ProjectId {
        let project = Project::new(name);
        let project_id = project.id();
        self.projects.push(project);
        debug!("event=project_add module=store status=ok project_id={project_id}");
        project_id
    }

    /// Appends `todo` to the project with `project_id`.
    ///
    /// # Errors
    /// - `ProjectNotFound` when no project matches.
    /// - `DuplicateTodo` when the todo id already exists in any project.
    pub fn add_todo_to_project(&mut self, todo: TodoItem, project_id: ProjectId) -> StoreResult<()> {
        if self.contains_todo(todo.id()) {
            return Err(StoreError::DuplicateTodo(todo.id()));
        }
        let project = self.project_mut(project_id)?;
        let todo_id = todo.id();
        project.push_todo(todo);
        debug!(
            "event=todo_add module=store status=ok project_id={project_id} todo_id={todo_id}"
        );
        Ok(())
    }

    /// Removes the todo with `todo_id` from its project and returns it.
    ///
    /// Sibling items keep their relative order.
    pub fn delete_todo_from_project(
        &mut self,
        todo_id: TodoId,
        project_id: ProjectId,
    ) -> StoreResult<TodoItem> {
        let removed = self
            .project_mut(project_id)?
            .remove_todo(todo_id)
            .ok_or(StoreError::TodoNotFound {
                project_id,
                todo_id,
            })?;
        debug!(
            "event=todo_delete module=store status=ok project_id={project_id} todo_id={todo_id}"
        );
        Ok(removed)
    }

    /// Replaces every field of the matching todo except its id.
    pub fn update_todo_in_project(
        &mut self,
        todo_id: TodoId,
        project_id: ProjectId,
        fields: TodoFields,
    ) -> StoreResult<()> {
        let todo = self
            .project_mut(project_id)?
            .todo_mut(todo_id)
            .ok_or(StoreError::TodoNotFound {
                project_id,
                todo_id,
            })?;
        todo.update(fields);
        debug!(
            "event=todo_update module=store status=ok project_id={project_id} todo_id={todo_id}"
        );
        Ok(())
    }

    /// Returns the first project, creating "Default Project" when empty.
    pub fn ensure_default_project(&mut self) -> &Project {
        if self.projects.is_empty() {
            let project_id = self.create_project(DEFAULT_PROJECT_NAME);
            debug!("event=default_project_create module=store status=ok project_id={project_id}");
        }
        &self.projects[0]
    }

    /// Adds `todo` to the project resolved by `ensure_default_project`.
    ///
    /// Returns the id of the receiving project.
    pub fn add_todo_to_default_project(&mut self, todo: TodoItem) -> StoreResult<ProjectId> {
        if self.contains_todo(todo.id()) {
            return Err(StoreError::DuplicateTodo(todo.id()));
        }
        let project_id = self.ensure_default_project().id();
        self.add_todo_to_project(todo, project_id)?;
        Ok(project_id)
    }

    /// Replaces all projects with `other`'s projects.
    pub(crate) fn replace_with(&mut self, other: TodoStore) {
        self.projects = other.projects;
    }

    fn project_mut(&mut self, project_id: ProjectId) -> StoreResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id() == project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))
    }

    fn contains_todo(&self, todo_id: TodoId) -> bool {
        self.projects
            .iter()
            .any(|project| project.contains_todo(todo_id))
    }
}

/// Checks that `incoming` projects and todos neither collide with
/// `existing` nor with each other.
fn check_unique_ids(existing: &[Project], incoming: &[Project]) -> StoreResult<()> {
    let mut project_ids: HashSet<ProjectId> = existing.iter().map(Project::id).collect();
    let mut todo_ids: HashSet<TodoId> = existing
        .iter()
        .flat_map(|project| project.todos().iter().map(TodoItem::id))
        .collect();
    for project in incoming {
        if !project_ids.insert(project.id()) {
            return Err(StoreError::DuplicateProject(project.id()));
        }
        for todo in project.todos() {
            if !todo_ids.insert(todo.id()) {
                return Err(StoreError::DuplicateTodo(todo.id()));
            }
        }
    }
    Ok(())
}
