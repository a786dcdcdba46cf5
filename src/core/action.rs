//! # Actions
//!
//! Everything that can happen in the task list becomes an `Action`.
//! User presses Enter in the input field? That's
//! `Action::AddTask { text: None, persist: true }`.
//! User clicks a row's remove control? That's `Action::RemoveTask(index)`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` telling the adapter what it still has to do on its
//! side (clear the editor, quit). Storage writes happen here, synchronously,
//! through the injected `TaskStore`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, Notice, TaskItem};
use crate::core::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a task. `text: None` reads the current input field value.
    /// `persist: false` renders without writing (used when loading).
    AddTask { text: Option<String>, persist: bool },
    /// Render every stored task, in stored order, without re-saving.
    LoadTasks,
    /// Remove control on the displayed row at this index was activated.
    RemoveTask(usize),
    /// The input field's value changed.
    InputChanged(String),
    /// Close the blocking validation notice.
    DismissNotice,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Input field was cleared and focused; the adapter should reset its editor.
    ResetInput,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AddTask { text, persist } => add_task(app, text, persist),
        Action::LoadTasks => {
            let stored = app.store.load();
            info!("Loading {} stored task(s)", stored.len());
            let mut effect = Effect::None;
            for text in stored {
                if add_task(app, Some(text), false) == Effect::ResetInput {
                    effect = Effect::ResetInput;
                }
            }
            effect
        }
        Action::RemoveTask(index) => {
            remove_task(app, index);
            Effect::None
        }
        Action::InputChanged(value) => {
            app.input = value;
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn add_task(app: &mut App, text: Option<String>, persist: bool) -> Effect {
    let raw = text.unwrap_or_else(|| app.input.clone());
    let task = match Task::parse(&raw) {
        Ok(task) => task,
        Err(e) => {
            debug!("Rejected task input {:?}: {}", raw, e);
            app.notice = Some(Notice::EmptyTask);
            return Effect::None;
        }
    };

    app.items.push(TaskItem {
        text: task.as_str().to_string(),
    });

    if persist {
        match app.store.append(task.as_str()) {
            Ok(()) => {
                debug!("Persisted task {:?}", task.as_str());
                app.status_message.clear();
            }
            Err(e) => {
                warn!("Failed to persist task {:?}: {}", task.as_str(), e);
                app.status_message = format!("Save failed: {e}");
            }
        }
    }

    app.input.clear();
    app.input_focused = true;
    Effect::ResetInput
}

/// Detach the displayed row, then drop the first stored entry with the same
/// text. With duplicate texts the stored entry removed may belong to a
/// different row than the one clicked.
fn remove_task(app: &mut App, index: usize) {
    if index >= app.items.len() {
        debug!("Ignoring remove for out-of-range row {}", index);
        return;
    }
    let item = app.items.remove(index);

    match app.store.remove_first(&item.text) {
        Ok(true) => {
            debug!("Removed task {:?}", item.text);
            app.status_message.clear();
        }
        Ok(false) => debug!("Task {:?} was not in storage", item.text),
        Err(e) => {
            warn!("Failed to remove task {:?} from storage: {}", item.text, e);
            app.status_message = format!("Save failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StoreError, TaskStore};
    use crate::test_support::{app_with_store, stored_tasks, test_app};

    fn add(text: &str) -> Action {
        Action::AddTask {
            text: Some(text.to_string()),
            persist: true,
        }
    }

    #[test]
    fn test_add_task_renders_and_persists() {
        let mut app = test_app();
        let effect = update(&mut app, add("  Buy milk  "));

        assert_eq!(effect, Effect::ResetInput);
        assert_eq!(app.displayed_texts(), vec!["Buy milk"]);
        assert_eq!(stored_tasks(&app), vec!["Buy milk"]);
        assert_eq!(app.notice, None);
    }

    #[test]
    fn test_add_task_reads_input_field_when_no_text() {
        let mut app = test_app();
        update(&mut app, Action::InputChanged(" Walk dog ".to_string()));
        app.input_focused = false;

        let effect = update(
            &mut app,
            Action::AddTask {
                text: None,
                persist: true,
            },
        );

        assert_eq!(effect, Effect::ResetInput);
        assert_eq!(app.displayed_texts(), vec!["Walk dog"]);
        assert_eq!(stored_tasks(&app), vec!["Walk dog"]);
        assert!(app.input.is_empty());
        assert!(app.input_focused);
    }

    #[test]
    fn test_explicit_text_wins_over_input_field() {
        let mut app = test_app();
        update(&mut app, Action::InputChanged("typed".to_string()));
        update(&mut app, add("given"));
        assert_eq!(app.displayed_texts(), vec!["given"]);
        // Input is cleared unconditionally
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_blank_input_raises_notice_and_mutates_nothing() {
        for blank in ["", "   ", "\t\n"] {
            let mut app = app_with_store(MemoryStore::with_tasks(&["keep"]));
            update(&mut app, Action::LoadTasks);
            update(&mut app, Action::InputChanged(blank.to_string()));

            let effect = update(
                &mut app,
                Action::AddTask {
                    text: None,
                    persist: true,
                },
            );

            assert_eq!(effect, Effect::None);
            assert_eq!(app.notice, Some(Notice::EmptyTask));
            assert_eq!(app.displayed_texts(), vec!["keep"]);
            assert_eq!(stored_tasks(&app), vec!["keep"]);
            assert_eq!(app.input, blank, "input is left as typed");
        }
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = test_app();
        update(&mut app, add("  "));
        assert_eq!(app.notice, Some(Notice::EmptyTask));
        update(&mut app, Action::DismissNotice);
        assert_eq!(app.notice, None);
    }

    #[test]
    fn test_add_without_persist_only_renders() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AddTask {
                text: Some("ephemeral".to_string()),
                persist: false,
            },
        );
        assert_eq!(app.displayed_texts(), vec!["ephemeral"]);
        assert!(stored_tasks(&app).is_empty());
    }

    #[test]
    fn test_load_tasks_renders_in_order_without_resaving() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["a", "b", "a"]));
        let effect = update(&mut app, Action::LoadTasks);

        assert_eq!(effect, Effect::ResetInput);
        assert_eq!(app.displayed_texts(), vec!["a", "b", "a"]);
        assert_eq!(stored_tasks(&app), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_load_tasks_from_empty_store() {
        let mut app = test_app();
        let effect = update(&mut app, Action::LoadTasks);
        assert_eq!(effect, Effect::None);
        assert!(app.items.is_empty());
    }

    #[test]
    fn test_load_tasks_from_corrupt_store_is_empty() {
        let mut app = app_with_store(MemoryStore::with_raw("{not an array"));
        update(&mut app, Action::LoadTasks);
        assert!(app.items.is_empty());
        assert_eq!(app.notice, None);
    }

    #[test]
    fn test_remove_detaches_row_and_first_stored_match() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["a", "b", "a"]));
        update(&mut app, Action::LoadTasks);

        update(&mut app, Action::RemoveTask(0));

        assert_eq!(app.displayed_texts(), vec!["b", "a"]);
        assert_eq!(stored_tasks(&app), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_last_duplicate_still_removes_first_stored() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["a", "b", "a"]));
        update(&mut app, Action::LoadTasks);

        update(&mut app, Action::RemoveTask(2));

        // Same multiset either way; storage removes by value, not position
        assert_eq!(app.displayed_texts(), vec!["a", "b"]);
        assert_eq!(stored_tasks(&app), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["a"]));
        update(&mut app, Action::LoadTasks);
        update(&mut app, Action::RemoveTask(5));
        assert_eq!(app.displayed_texts(), vec!["a"]);
        assert_eq!(stored_tasks(&app), vec!["a"]);
    }

    #[test]
    fn test_remove_text_missing_from_storage_is_noop_on_storage() {
        let mut app = app_with_store(MemoryStore::with_tasks(&["b"]));
        update(
            &mut app,
            Action::AddTask {
                text: Some("only on screen".to_string()),
                persist: false,
            },
        );
        update(&mut app, Action::RemoveTask(0));

        assert!(app.items.is_empty());
        assert_eq!(stored_tasks(&app), vec!["b"]);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl TaskStore for ReadOnlyStore {
        fn load(&self) -> Vec<String> {
            vec!["existing".to_string()]
        }

        fn save(&mut self, _tasks: &[String]) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_write_failure_keeps_row_and_reports_status() {
        let mut app = App::new(Box::new(ReadOnlyStore), "tasks".to_string());
        let effect = update(&mut app, add("new"));

        assert_eq!(effect, Effect::ResetInput);
        assert_eq!(app.displayed_texts(), vec!["new"]);
        assert!(app.status_message.starts_with("Save failed"));
    }

    #[test]
    fn test_remove_write_failure_reports_status() {
        let mut app = App::new(Box::new(ReadOnlyStore), "tasks".to_string());
        update(&mut app, Action::LoadTasks);
        update(&mut app, Action::RemoveTask(0));

        assert!(app.items.is_empty());
        assert!(app.status_message.contains("read-only"));
    }
}
