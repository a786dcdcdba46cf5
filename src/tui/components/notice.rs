//! # Notice Component
//!
//! Blocking modal for validation messages ("Please enter a task").
//! Drawn over everything else; while it is up the event loop routes every
//! event to dismissal instead of the input field or list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::state::Notice;
use crate::tui::component::Component;

const MODAL_WIDTH: u16 = 36;
const MODAL_HEIGHT: u16 = 6;

/// Stateless: the notice to show is the only prop.
pub struct NoticeModal {
    pub notice: Notice,
}

impl NoticeModal {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }
}

impl Component for NoticeModal {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let modal = centered_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
        frame.render_widget(Clear, modal);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_alignment(Alignment::Center);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.notice.message(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ OK ]",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, modal);
    }
}

/// A `width` x `height` rect centered in `outer`, shrunk to fit if needed.
fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    center
}
