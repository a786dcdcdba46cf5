//! # Application State
//!
//! Core business state. No TUI types here; cursor positions, scroll offsets
//! and hover state live in the `tui` module.
//!
//! ```text
//! App
//! ├── store: Box<dyn TaskStore>    // persisted slot
//! ├── items: Vec<TaskItem>         // displayed list, in order
//! ├── input: String                // text-entry field value
//! ├── input_focused: bool          // focus returns here after an add
//! ├── notice: Option<Notice>       // blocking validation modal
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::storage::TaskStore;
use crate::core::task::EMPTY_TASK_MESSAGE;

/// One displayed row. Carries the task text its remove control acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub text: String,
}

/// A blocking, user-facing message. While one is shown, input is swallowed
/// until it is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyTask,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyTask => EMPTY_TASK_MESSAGE,
        }
    }
}

pub struct App {
    pub store: Box<dyn TaskStore>,
    pub items: Vec<TaskItem>,
    pub input: String,
    pub input_focused: bool,
    pub notice: Option<Notice>,
    pub status_message: String,
    /// Slot name shown in the title bar.
    pub slot_name: String,
}

impl App {
    pub fn new(store: Box<dyn TaskStore>, slot_name: String) -> Self {
        Self {
            store,
            items: Vec::new(),
            input: String::new(),
            input_focused: true,
            notice: None,
            status_message: String::new(),
            slot_name,
        }
    }

    /// Texts of the displayed rows, in display order.
    pub fn displayed_texts(&self) -> Vec<String> {
        self.items.iter().map(|item| item.text.clone()).collect()
    }
}
