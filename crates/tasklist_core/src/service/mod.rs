//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and snapshot persistence.
//! - Keep the CLI and other callers decoupled from storage details.

pub mod todo_service;
