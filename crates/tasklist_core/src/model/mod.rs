//! Domain model for projects and their todo items.
//!
//! # Responsibility
//! - Define canonical data structures used by store and persistence.
//! - Keep the persisted snapshot shape identical to the in-memory shape.
//!
//! # Invariants
//! - Every project and todo item is identified by a stable UUID.
//! - Todo items are removed only through their owning project.

pub mod project;
pub mod todo_item;
