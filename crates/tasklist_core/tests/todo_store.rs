use tasklist_core::{
    Priority, Project, StoreError, TodoFields, TodoItem, TodoStore, DEFAULT_PROJECT_NAME,
};
use uuid::Uuid;

fn todo(title: &str) -> TodoItem {
    TodoItem::new(TodoFields::new(title))
}

fn titles(store: &TodoStore, index: usize) -> Vec<String> {
    store.projects()[index]
        .todos()
        .iter()
        .map(|todo| todo.title.clone())
        .collect()
}

#[test]
fn add_todo_appends_in_insertion_order() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");

    store.add_todo_to_project(todo("a"), project_id).unwrap();
    store.add_todo_to_project(todo("b"), project_id).unwrap();

    assert_eq!(titles(&store, 0), vec!["a", "b"]);
}

#[test]
fn add_todo_to_unknown_project_leaves_store_unchanged() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");
    store.add_todo_to_project(todo("a"), project_id).unwrap();
    let before = store.clone();

    let missing = Uuid::new_v4();
    let err = store.add_todo_to_project(todo("b"), missing).unwrap_err();

    assert_eq!(err, StoreError::ProjectNotFound(missing));
    assert_eq!(store, before);
}

#[test]
fn add_todo_rejects_id_already_used_in_another_project() {
    let mut store = TodoStore::new();
    let first = store.create_project("one");
    let second = store.create_project("two");
    let item = todo("shared");
    store.add_todo_to_project(item.clone(), first).unwrap();
    let before = store.clone();

    let err = store.add_todo_to_project(item.clone(), second).unwrap_err();

    assert_eq!(err, StoreError::DuplicateTodo(item.id()));
    assert_eq!(store, before);
}

#[test]
fn delete_removes_exactly_one_and_keeps_sibling_order() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");
    let items: Vec<TodoItem> = ["a", "b", "c", "d"].into_iter().map(todo).collect();
    for item in &items {
        store.add_todo_to_project(item.clone(), project_id).unwrap();
    }

    let removed = store
        .delete_todo_from_project(items[1].id(), project_id)
        .unwrap();

    assert_eq!(removed, items[1]);
    assert_eq!(titles(&store, 0), vec!["a", "c", "d"]);
}

#[test]
fn delete_with_unknown_ids_reports_not_found() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");
    store.add_todo_to_project(todo("a"), project_id).unwrap();
    let before = store.clone();

    let missing_todo = Uuid::new_v4();
    let err = store
        .delete_todo_from_project(missing_todo, project_id)
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::TodoNotFound {
            project_id,
            todo_id: missing_todo
        }
    );

    let missing_project = Uuid::new_v4();
    let err = store
        .delete_todo_from_project(missing_todo, missing_project)
        .unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(missing_project));
    assert_eq!(store, before);
}

#[test]
fn update_replaces_fields_of_matching_todo() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");
    let item = todo("draft");
    let todo_id = item.id();
    store.add_todo_to_project(item, project_id).unwrap();
    store.add_todo_to_project(todo("other"), project_id).unwrap();

    store
        .update_todo_in_project(
            todo_id,
            project_id,
            TodoFields::new("final").priority(Priority::Low),
        )
        .unwrap();

    let updated = store.todo(project_id, todo_id).unwrap();
    assert_eq!(updated.id(), todo_id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(titles(&store, 0), vec!["final", "other"]);
}

#[test]
fn update_unknown_todo_reports_not_found() {
    let mut store = TodoStore::new();
    let project_id = store.create_project("Work");
    let missing = Uuid::new_v4();

    let err = store
        .update_todo_in_project(missing, project_id, TodoFields::new("x"))
        .unwrap_err();

    assert!(matches!(err, StoreError::TodoNotFound { todo_id, .. } if todo_id == missing));
}

#[test]
fn first_todo_on_empty_store_creates_single_default_project() {
    let mut store = TodoStore::new();

    let first_project = store.add_todo_to_default_project(todo("one")).unwrap();
    let second_project = store.add_todo_to_default_project(todo("two")).unwrap();

    assert_eq!(store.projects().len(), 1);
    assert_eq!(first_project, second_project);
    assert_eq!(store.projects()[0].name, DEFAULT_PROJECT_NAME);
    assert_eq!(titles(&store, 0), vec!["one", "two"]);
}

#[test]
fn ensure_default_project_returns_first_existing_project() {
    let mut store = TodoStore::new();
    let first = store.create_project("Inbox");
    store.create_project("Later");

    let resolved = store.ensure_default_project().id();

    assert_eq!(resolved, first);
    assert_eq!(store.projects().len(), 2);
}

#[test]
fn add_project_rejects_duplicate_id() {
    let mut store = TodoStore::new();
    let project = Project::new("Work");
    store.add_project(project.clone()).unwrap();

    let err = store.add_project(project.clone()).unwrap_err();

    assert_eq!(err, StoreError::DuplicateProject(project.id()));
    assert_eq!(store.projects().len(), 1);
}

#[test]
fn add_project_rejects_todos_repeated_inside_the_project() {
    let mut store = TodoStore::new();
    store.create_project("existing");
    let before = store.clone();
    let item = todo("twice");

    let err = store
        .add_project(Project::with_todos("p", vec![item.clone(), item.clone()]))
        .unwrap_err();

    assert_eq!(err, StoreError::DuplicateTodo(item.id()));
    assert_eq!(store, before);
}

#[test]
fn add_project_rejects_todo_already_in_another_project() {
    let mut store = TodoStore::new();
    let existing = store.create_project("existing");
    let item = todo("taken");
    store.add_todo_to_project(item.clone(), existing).unwrap();
    let before = store.clone();

    let err = store
        .add_project(Project::with_todos("p", vec![todo("fresh"), item.clone()]))
        .unwrap_err();

    assert_eq!(err, StoreError::DuplicateTodo(item.id()));
    assert_eq!(store, before);
}

#[test]
fn add_project_keeps_given_todo_order() {
    let mut store = TodoStore::new();
    let project = Project::with_todos("p", vec![todo("a"), todo("b")]);

    store.add_project(project).unwrap();

    assert_eq!(titles(&store, 0), vec!["a", "b"]);
    assert_eq!(store.todo_count(), 2);
}

#[test]
fn from_projects_rejects_todo_shared_between_projects() {
    let item = todo("shared");
    let first = Project::with_todos("one", vec![item.clone()]);
    let second = Project::with_todos("two", vec![item.clone()]);

    let err = TodoStore::from_projects(vec![first, second]).unwrap_err();

    assert_eq!(err, StoreError::DuplicateTodo(item.id()));
}
