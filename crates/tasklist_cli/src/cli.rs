use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tasklist_core::Priority;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Manage todo items grouped into projects")]
pub struct Cli {
    /// SQLite file holding the saved projects (created when missing)
    #[arg(long, env = "TASKLIST_DB", default_value = "tasklist.db")]
    pub db: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every project and its todos
    List,
    /// Add a todo to the first project ("Default Project" when none exist)
    Add(AddArgs),
    /// Create an empty project
    Project { name: String },
    /// Delete one todo
    Delete(TodoRef),
    /// Change the title of a todo, keeping its other fields
    Rename {
        #[command(flatten)]
        todo: TodoRef,
        title: String,
    },
}

#[derive(Parser)]
pub struct AddArgs {
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = PriorityArg::Unset)]
    pub priority: PriorityArg,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Checklist entry; repeat for more
    #[arg(long = "check")]
    pub checklist: Vec<String>,
}

#[derive(Parser)]
pub struct TodoRef {
    pub project_id: Uuid,
    pub todo_id: Uuid,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Unset,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
            PriorityArg::Unset => Priority::Unset,
        }
    }
}
