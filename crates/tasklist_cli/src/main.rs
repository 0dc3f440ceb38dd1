//! CLI front end over `tasklist_core`.
//!
//! Translates arguments into service calls and prints the resulting
//! projects; no domain logic lives here.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{AddArgs, Cli, Commands};
use tasklist_core::db::open_db;
use tasklist_core::{
    core_version, init_logging_with, ChecklistItem, LoggingConfig, SqliteKeyValueStore,
    TodoFields, TodoService, TodoStore,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(config) = LoggingConfig::from_env()? {
        init_logging_with(config)?;
    }

    let conn = open_db(&cli.db).with_context(|| format!("opening {}", cli.db.display()))?;
    let storage = SqliteKeyValueStore::try_new(&conn)?;
    let mut service = TodoService::open(storage).context("loading saved projects")?;

    match cli.command {
        Commands::List => {}
        Commands::Add(args) => {
            let (project_id, todo_id) = service.create_todo(add_fields(args))?;
            println!("added {todo_id} to {project_id}");
        }
        Commands::Project { name } => {
            let project_id = service.create_project(name)?;
            println!("created project {project_id}");
        }
        Commands::Delete(todo) => {
            let removed = service.delete_todo_from_project(todo.todo_id, todo.project_id)?;
            println!("deleted {}", removed.title);
        }
        Commands::Rename { todo, title } => {
            let mut fields = service
                .store()
                .todo(todo.project_id, todo.todo_id)
                .map(|current| current.fields())
                .with_context(|| {
                    format!("todo {} not found in project {}", todo.todo_id, todo.project_id)
                })?;
            fields.title = title;
            service.update_todo_in_project(todo.todo_id, todo.project_id, fields)?;
        }
    }

    print_store(service.store());
    Ok(())
}

fn add_fields(args: AddArgs) -> TodoFields {
    TodoFields::new(args.title)
        .description(args.description)
        .due_date(args.due)
        .priority(args.priority.into())
        .notes(args.notes)
        .checklist(args.checklist.into_iter().map(ChecklistItem::new).collect())
}

fn print_store(store: &TodoStore) {
    println!("tasklist {}", core_version());
    for project in store.projects() {
        println!("{} [{}]", project.name, project.id());
        if project.is_empty() {
            println!("  No todos found.");
        }
        for todo in project.todos() {
            let due = todo
                .due_date
                .map_or_else(|| "-".to_string(), |date| date.to_string());
            println!(
                "  {} - Due: {} - Priority: {:?} [{}]",
                todo.title,
                due,
                todo.priority,
                todo.id()
            );
        }
    }
}
