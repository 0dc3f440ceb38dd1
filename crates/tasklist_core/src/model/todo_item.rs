//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by a project.
//! - Provide full-field replacement as the only mutation path.
//!
//! # Invariants
//! - `id` is generated once and never reassigned by `update`.
//! - `update` takes every field explicitly; nothing is reset implicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo item.
pub type TodoId = Uuid;

/// Priority chosen for a todo item.
///
/// Serialized by variant name (`"Low"`, `"Medium"`, `"High"`, `"Unset"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    /// No priority picked. An empty wire string also maps here.
    #[default]
    #[serde(alias = "")]
    Unset,
}

/// One entry of a todo checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Full editable field set of a todo item, everything except `id`.
///
/// Used both for creation and for replacement updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub notes: String,
    pub checklist: Vec<ChecklistItem>,
}

impl TodoFields {
    /// Creates a field set with only a title; every other field is empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }
}

/// A single task record.
///
/// Wire names follow the persisted snapshot layout (`dueDate` is camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl TodoItem {
    /// Creates a todo item with a freshly generated id.
    ///
    /// No validation is applied; an empty title is accepted.
    pub fn new(fields: TodoFields) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    /// Creates a todo item with a caller-provided id.
    ///
    /// Used by import paths where identity already exists.
    pub fn with_id(id: TodoId, fields: TodoFields) -> Self {
        let TodoFields {
            title,
            description,
            due_date,
            priority,
            notes,
            checklist,
        } = fields;
        Self {
            id,
            title,
            description,
            due_date,
            priority,
            notes,
            checklist,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Replaces every field except `id`.
    pub fn update(&mut self, fields: TodoFields) {
        *self = Self::with_id(self.id, fields);
    }

    /// Returns a copy of the current editable fields.
    ///
    /// Edit flows start from this value so untouched fields keep their data.
    pub fn fields(&self) -> TodoFields {
        TodoFields {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            priority: self.priority,
            notes: self.notes.clone(),
            checklist: self.checklist.clone(),
        }
    }
}
