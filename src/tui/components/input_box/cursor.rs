//! Cursor position tracking and horizontal scrolling for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset (in
//! display columns). Navigation methods take `buffer: &str` explicitly; the
//! text itself is owned by `InputBox`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns taken by the left border.
pub(super) const BORDER_OFFSET: u16 = 1;

/// Usable text columns inside a bordered box of `outer_width`.
pub(super) fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(BORDER_OFFSET * 2)
}

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column (0 when the text fits)
    pub scroll: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Reset cursor to start (used when the field is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll = 0;
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Adjust `scroll` so the cursor stays inside a field `visible` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, visible: u16) {
        if visible == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + visible {
            self.scroll = col - visible + 1;
        }
    }

    /// Screen position of the cursor inside the bordered field at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let col = self.column(buffer).saturating_sub(self.scroll);
        let max_col = inner_width(area.width).saturating_sub(1);
        (
            area.x + BORDER_OFFSET + col.min(max_col),
            area.y + BORDER_OFFSET,
        )
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The part of `text` visible when scrolled `scroll` columns and `visible`
/// columns wide.
pub(super) fn visible_slice(text: &str, scroll: u16, visible: u16) -> &str {
    let mut start = text.len();
    let mut col = 0u16;
    for (i, c) in text.char_indices() {
        if col >= scroll {
            start = i;
            break;
        }
        col += c.width().unwrap_or(0) as u16;
    }

    let mut end = text.len();
    let mut used = 0u16;
    for (i, c) in text[start..].char_indices() {
        let w = c.width().unwrap_or(0) as u16;
        if used + w > visible {
            end = start + i;
            break;
        }
        used += w;
    }
    &text[start..end]
}
