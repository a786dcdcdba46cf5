//! # Task List Component
//!
//! Shows every displayed task as one row with a `[Remove]` control on the
//! right edge.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TaskListState` lives in `TuiState` (selection, scroll offset, hover)
//! - `TaskList` is created each frame with borrowed state and items
//!
//! Removal itself is not handled here. A click on `[Remove]` or the remove
//! key on the selected row is turned into `Action::RemoveTask(index)` by the
//! event loop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::TaskItem;
use crate::tui::component::Component;

/// Label of each row's removal control.
pub const REMOVE_LABEL: &str = "[Remove]";

/// What a click inside the list landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    /// The row body (task text).
    Row(usize),
    /// The row's `[Remove]` control.
    Remove(usize),
}

/// Persistent state for the task list.
#[derive(Debug, Default)]
pub struct TaskListState {
    pub list_state: ListState,
    /// Row whose remove control is under the mouse.
    pub hovered: Option<usize>,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    /// Move the selection up one row; selects the last row if none is selected.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(len - 1);
        self.select(Some(idx));
    }

    /// Move the selection down one row; selects the first row if none is selected.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self.selected().map(|i| (i + 1).min(len - 1)).unwrap_or(0);
        self.select(Some(idx));
    }

    /// Keep the selection and hover inside `0..len` after rows were removed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.select(None);
            self.hovered = None;
            return;
        }
        if let Some(i) = self.selected()
            && i >= len
        {
            self.select(Some(len - 1));
        }
        if self.hovered.is_some_and(|h| h >= len) {
            self.hovered = None;
        }
    }

    /// Map a screen position to a row (or its remove control).
    ///
    /// `area` is the full list area including borders, as passed to render.
    pub fn hit_test(&self, area: Rect, len: usize, column: u16, row: u16) -> Option<ListHit> {
        let inner = list_inner(area);
        let inside = column >= inner.x
            && column < inner.x + inner.width
            && row >= inner.y
            && row < inner.y + inner.height;
        if !inside {
            return None;
        }

        let index = self.list_state.offset() + (row - inner.y) as usize;
        if index >= len {
            return None;
        }

        let label_start = inner.x + inner.width.saturating_sub(REMOVE_LABEL.width() as u16);
        if column >= label_start {
            Some(ListHit::Remove(index))
        } else {
            Some(ListHit::Row(index))
        }
    }
}

/// Area inside the list's border.
fn list_inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Transient render wrapper for the task list.
pub struct TaskList<'a> {
    state: &'a mut TaskListState,
    items: &'a [TaskItem],
    focused: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(state: &'a mut TaskListState, items: &'a [TaskItem], focused: bool) -> Self {
        Self {
            state,
            items,
            focused,
        }
    }

    fn row<'b>(&self, index: usize, item: &'b TaskItem, inner_width: u16) -> ListItem<'b> {
        let label_width = REMOVE_LABEL.width();
        let text_width = (inner_width as usize).saturating_sub(label_width + 1);
        let text = truncate_to_width(&item.text, text_width);
        let padding = text_width.saturating_sub(text.width()) + 1;

        let is_selected = self.state.selected() == Some(index);
        let text_style = if is_selected && self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let label_style = if self.state.hovered == Some(index) {
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
        };

        ListItem::new(Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(REMOVE_LABEL, label_style),
        ]))
    }
}

impl Component for TaskList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let help = if self.focused {
            " ↑↓ Select  d/Del Remove  Tab Input  q Quit "
        } else {
            " Enter Add  Tab List  Ctrl+C Quit "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Tasks ({}) ", self.items.len()))
            .title_bottom(Line::from(help).centered());

        if self.items.is_empty() {
            let empty = Paragraph::new("No tasks yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = list_inner(area).width;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| self.row(i, item, inner_width))
            .collect();

        let list = List::new(rows).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to at most `max_width` display columns, ending in "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
