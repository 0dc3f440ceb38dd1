//! In-memory state of all projects and todo items.

pub mod todo_store;
