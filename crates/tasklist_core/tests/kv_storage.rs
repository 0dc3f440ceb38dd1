use rusqlite::Connection;
use tasklist_core::db::migrations::latest_version;
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::{
    KeyValueStore, PersistenceAdapter, SqliteKeyValueStore, StorageError, TodoFields, TodoItem,
    TodoStore,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert!(SqliteKeyValueStore::try_new(&conn).is_ok());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKeyValueStore::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_kv_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteKeyValueStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StorageError::MissingRequiredTable("kv_entries"))
    ));
}

#[test]
fn set_get_and_remove_items() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn snapshot_survives_reopening_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasklist.db");

    let mut store = TodoStore::new();
    let todo = TodoItem::new(TodoFields::new("persist me"));
    let todo_id = todo.id();
    let project_id = store.add_todo_to_default_project(todo).unwrap();
    {
        let conn = open_db(&path).unwrap();
        let persistence = PersistenceAdapter::new(SqliteKeyValueStore::try_new(&conn).unwrap());
        persistence.save(&store).unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let persistence = PersistenceAdapter::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    let mut loaded = TodoStore::new();
    assert!(persistence.load(&mut loaded).unwrap());

    assert_eq!(loaded, store);
    assert_eq!(loaded.todo(project_id, todo_id).unwrap().title, "persist me");
}

#[test]
fn try_new_rejects_database_a_newer_binary_wrote() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let result = SqliteKeyValueStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StorageError::UninitializedConnection { actual_version, .. })
            if actual_version == latest_version() + 1
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
