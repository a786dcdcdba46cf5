//! # Command Line
//!
//! Argument definitions and the non-interactive subcommands. With no
//! subcommand (or `tui`) the interactive list is launched by `main`.
//!
//! The subcommands talk to the same `TaskStore` as the TUI, so
//! `tasklist add "Buy milk"` shows up the next time the list is opened.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use crate::core::config::CliOverrides;
use crate::core::storage::{StoreError, TaskStore};
use crate::core::task::{Task, TaskError};

#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about = "A small task list that remembers")]
pub struct Args {
    /// Directory holding the task slots
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Slot (list) name to open
    #[arg(long, global = true, value_name = "NAME")]
    pub slot: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            data_dir: self.data_dir.clone(),
            slot: self.slot.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive list (default)
    Tui,
    /// Add a task
    Add {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Print stored tasks
    List,
    /// Remove the first task with this exact text
    Remove {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    Task(TaskError),
    Store(StoreError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Task(e) => write!(f, "{e}"),
            CliError::Store(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<TaskError> for CliError {
    fn from(e: TaskError) -> Self {
        CliError::Task(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

// ============================================================================
// Subcommands
// ============================================================================

/// Run a non-interactive subcommand against `store`, writing to `out`.
/// `Command::Tui` is a no-op here; `main` handles it.
pub fn run_command(
    command: &Command,
    store: &mut dyn TaskStore,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Tui => Ok(()),
        Command::Add { text } => {
            let task = Task::parse(text)?;
            store.append(task.as_str())?;
            info!("Added task {:?} from command line", task.as_str());
            writeln!(out, "Added: {task}")?;
            Ok(())
        }
        Command::List => {
            let tasks = store.load();
            if tasks.is_empty() {
                writeln!(out, "No tasks.")?;
            }
            for (i, task) in tasks.iter().enumerate() {
                writeln!(out, "{:>3}. {}", i + 1, task)?;
            }
            Ok(())
        }
        Command::Remove { text } => {
            // Stored tasks are always trimmed, so match on the trimmed text
            let needle = text.trim();
            if store.remove_first(needle)? {
                info!("Removed task {:?} from command line", needle);
                writeln!(out, "Removed: {needle}")?;
            } else {
                writeln!(out, "Not found: {needle}")?;
            }
            Ok(())
        }
    }
}
