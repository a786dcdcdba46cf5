//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Wiring
//!
//! - Enter in the input field, or a click on `Add`, dispatches
//!   `AddTask { text: None, persist: true }`.
//! - A click on a row's `[Remove]`, or `d`/`Delete` on the selected row in
//!   list focus, dispatches `RemoveTask(index)`.
//! - While a notice is shown, every event except quit only dismisses it.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives, drains
//! every pending event, then redraws once.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::storage::JsonSlotStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ListHit, TaskListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenHit;

/// How long the loop sleeps waiting for input before checking again.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic).
///
/// Focus is not stored here: `App::input_focused` decides whether keys go
/// to the input field or the task list.
pub struct TuiState {
    pub task_list: TaskListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            task_list: TaskListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Apply an action and carry out its effect on the TUI side.
/// Returns `true` when the app should quit.
pub(crate) fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    debug!("Dispatching {:?}", action);
    let effect = update(app, action);
    tui.task_list.clamp(app.items.len());
    match effect {
        Effect::Quit => true,
        Effect::ResetInput => {
            tui.input_box.clear();
            tui.task_list.select(None);
            false
        }
        Effect::None => false,
    }
}

/// Route one event. `frame_area` is the current terminal size, used for
/// mouse hit testing. Returns `true` when the app should quit.
pub(crate) fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: ratatui::layout::Rect,
) -> bool {
    if matches!(event, TuiEvent::Quit) {
        return dispatch(app, tui, Action::Quit);
    }

    // Blocking notice: dismiss on Enter / Esc / Space / click, swallow the rest
    if app.notice.is_some() {
        if matches!(
            event,
            TuiEvent::Submit
                | TuiEvent::Escape
                | TuiEvent::InputChar(' ')
                | TuiEvent::MouseClick(_, _)
        ) {
            return dispatch(app, tui, Action::DismissNotice);
        }
        return false;
    }

    match event {
        TuiEvent::Resize => false,
        TuiEvent::MouseMove(col, row) => {
            let hit = ui::hit_test(frame_area, tui, app.items.len(), col, row);
            tui.task_list.hovered = match hit {
                Some(ScreenHit::List(ListHit::Remove(i))) => Some(i),
                _ => None,
            };
            false
        }
        TuiEvent::MouseClick(col, row) => {
            match ui::hit_test(frame_area, tui, app.items.len(), col, row) {
                Some(ScreenHit::AddButton) => {
                    return dispatch(app, tui, add_from_input());
                }
                Some(ScreenHit::Input) => app.input_focused = true,
                Some(ScreenHit::List(ListHit::Remove(i))) => {
                    return dispatch(app, tui, Action::RemoveTask(i));
                }
                Some(ScreenHit::List(ListHit::Row(i))) => {
                    app.input_focused = false;
                    tui.task_list.select(Some(i));
                }
                None => {}
            }
            false
        }
        TuiEvent::ScrollUp => {
            tui.task_list.select_prev(app.items.len());
            false
        }
        TuiEvent::ScrollDown => {
            tui.task_list.select_next(app.items.len());
            false
        }
        TuiEvent::FocusNext => {
            app.input_focused = !app.input_focused;
            if !app.input_focused && tui.task_list.selected().is_none() {
                tui.task_list.select_next(app.items.len());
            }
            false
        }
        event if app.input_focused => handle_input_focus(app, tui, event),
        event => handle_list_focus(app, tui, event),
    }
}

/// The add control's action: read the live input value and persist.
fn add_from_input() -> Action {
    Action::AddTask {
        text: None,
        persist: true,
    }
}

fn handle_input_focus(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    // Esc → list focus
    if matches!(event, TuiEvent::Escape) {
        app.input_focused = false;
        if tui.task_list.selected().is_none() {
            tui.task_list.select_prev(app.items.len());
        }
        return false;
    }
    // Up/Down jump into the list
    if matches!(event, TuiEvent::CursorUp | TuiEvent::CursorDown) && !app.items.is_empty() {
        app.input_focused = false;
        tui.task_list.select_prev(app.items.len());
        return false;
    }

    match tui.input_box.handle_event(&event) {
        Some(InputEvent::Submit) => dispatch(app, tui, add_from_input()),
        Some(InputEvent::ContentChanged) => {
            let value = tui.input_box.buffer.clone();
            dispatch(app, tui, Action::InputChanged(value))
        }
        Some(InputEvent::CursorMoved) | None => false,
    }
}

fn handle_list_focus(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let len = app.items.len();
    match event {
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar('d') | TuiEvent::Delete | TuiEvent::Backspace => {
            match tui.task_list.selected() {
                Some(i) => dispatch(app, tui, Action::RemoveTask(i)),
                None => false,
            }
        }
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
            tui.task_list.select_prev(len);
            false
        }
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            tui.task_list.select_next(len);
            false
        }
        TuiEvent::CursorHome => {
            if len > 0 {
                tui.task_list.select(Some(0));
            }
            false
        }
        TuiEvent::CursorEnd => {
            if len > 0 {
                tui.task_list.select(Some(len - 1));
            }
            false
        }
        // Enter returns to the input field
        TuiEvent::Submit => {
            app.input_focused = true;
            false
        }
        // Typing auto-switches to the input field and forwards the event
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            app.input_focused = true;
            handle_input_focus(app, tui, event)
        }
        _ => false,
    }
}

/// Open the configured slot and run the interactive task list.
pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let store = JsonSlotStore::new(&config.data_dir, &config.slot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!("Using task slot {}", store.path().display());

    let mut app = App::new(Box::new(store), config.slot.clone());
    let mut tui = TuiState::new();
    dispatch(&mut app, &mut tui, Action::LoadTasks);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        log::warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    info!("Exiting with {} task(s) displayed", app.items.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app, tui))?;

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        if handle_event(app, tui, first_event, frame_area) {
            return Ok(());
        }
        while let Some(event) = poll_event_immediate()? {
            if handle_event(app, tui, event, frame_area) {
                return Ok(());
            }
        }
    }
}
