//! SQLite bootstrap backing `SqliteKeyValueStore`.
//!
//! Failures surface as `StorageError`; the snapshot adapter sees one error
//! type whether the connection, the schema or a single read failed.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
