use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ListHit, NoticeModal, TaskList, TitleBar};

/// Width of the `Add` control, borders included.
pub const ADD_BUTTON_WIDTH: u16 = 9;

/// Screen regions, shared by drawing and mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub list: Rect,
    pub input: Rect,
    pub add_button: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, list, input_row] = Layout::vertical([Length(1), Min(0), Length(3)]).areas(area);
    let [input, add_button] =
        Layout::horizontal([Min(0), Length(ADD_BUTTON_WIDTH)]).areas(input_row);
    ScreenLayout {
        title,
        list,
        input,
        add_button,
    }
}

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenHit {
    AddButton,
    Input,
    List(ListHit),
}

/// Hit test: given a screen position, find which control (if any) is there.
pub fn hit_test(
    frame_area: Rect,
    tui: &TuiState,
    task_count: usize,
    column: u16,
    row: u16,
) -> Option<ScreenHit> {
    let layout = screen_layout(frame_area);
    let pos = Position::new(column, row);

    if layout.add_button.contains(pos) {
        return Some(ScreenHit::AddButton);
    }
    if layout.input.contains(pos) {
        return Some(ScreenHit::Input);
    }
    tui.task_list
        .hit_test(layout.list, task_count, column, row)
        .map(ScreenHit::List)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(frame.area());

    TitleBar::new(
        app.slot_name.clone(),
        app.items.len(),
        app.status_message.clone(),
    )
    .render(frame, layout.title);

    TaskList::new(&mut tui.task_list, &app.items, !app.input_focused).render(frame, layout.list);

    tui.input_box.focused = app.input_focused && app.notice.is_none();
    tui.input_box.render(frame, layout.input);

    draw_add_button(frame, layout.add_button);

    if let Some(notice) = app.notice {
        let area = frame.area();
        NoticeModal::new(notice).render(frame, area);
    }
}

fn draw_add_button(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("Add")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::storage::MemoryStore;
    use crate::test_support::{app_with_store, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_screen_layout_regions() {
        let layout = screen_layout(Rect::new(0, 0, 60, 12));
        assert_eq!(layout.title, Rect::new(0, 0, 60, 1));
        assert_eq!(layout.list, Rect::new(0, 1, 60, 8));
        assert_eq!(layout.input, Rect::new(0, 9, 51, 3));
        assert_eq!(layout.add_button, Rect::new(51, 9, 9, 3));
    }

    #[test]
    fn test_draw_ui_shows_loaded_tasks() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["Buy milk", "Walk dog"]));
        update(&mut app, Action::LoadTasks);
        let mut tui = TuiState::new();

        let text = draw(&app, &mut tui);

        assert!(text.contains("Tasklist (slot: tasks) | 2 tasks"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
        assert!(text.contains("[Remove]"));
        assert!(text.contains("New task"));
        assert!(text.contains("Add"));
        assert!(!text.contains("Please enter a task"));
    }

    #[test]
    fn test_draw_ui_shows_notice_over_everything() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AddTask {
                text: None,
                persist: true,
            },
        );
        let mut tui = TuiState::new();

        let text = draw(&app, &mut tui);
        assert!(text.contains("Please enter a task"));
        assert!(!tui.input_box.focused);
    }

    #[test]
    fn test_hit_test_controls() {
        let area = Rect::new(0, 0, 60, 12);
        let tui = TuiState::new();

        assert_eq!(hit_test(area, &tui, 2, 55, 10), Some(ScreenHit::AddButton));
        assert_eq!(hit_test(area, &tui, 2, 10, 10), Some(ScreenHit::Input));
        // list inner starts at (1, 2); row 2 is the first task
        assert_eq!(
            hit_test(area, &tui, 2, 5, 2),
            Some(ScreenHit::List(ListHit::Row(0)))
        );
        assert_eq!(
            hit_test(area, &tui, 2, 55, 3),
            Some(ScreenHit::List(ListHit::Remove(1)))
        );
        // Title bar
        assert_eq!(hit_test(area, &tui, 2, 5, 0), None);
    }
}
