//! # TitleBar Component
//!
//! Top status bar: which slot is open, how many tasks it shows, and any
//! transient status (e.g. a failed write).
//!
//! Stateless: it receives all data as props and has no internal state.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Tasklist (slot: tasks) | 3 tasks | Save failed: ..."`
//! 2. **Default**: `"Tasklist (slot: tasks) | 3 tasks"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `slot_name`: Storage slot being shown
/// - `task_count`: Number of displayed tasks
/// - `status_message`: Transient status (empty = none)
pub struct TitleBar {
    pub slot_name: String,
    pub task_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(slot_name: String, task_count: usize, status_message: String) -> Self {
        Self {
            slot_name,
            task_count,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        let noun = if self.task_count == 1 { "task" } else { "tasks" };
        let base = format!(
            "Tasklist (slot: {}) | {} {}",
            self.slot_name, self.task_count, noun
        );
        if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.status_message.is_empty() {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(Line::from(Span::styled(self.title_text(), style)), area);
    }
}
