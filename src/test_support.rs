//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::core::storage::{DEFAULT_SLOT, MemoryStore};

/// Creates a test App backed by an empty in-memory store.
pub fn test_app() -> App {
    app_with_store(MemoryStore::new())
}

/// Creates a test App backed by the given in-memory store.
pub fn app_with_store(store: MemoryStore) -> App {
    App::new(Box::new(store), DEFAULT_SLOT.to_string())
}

/// Current contents of the app's persisted slot.
pub fn stored_tasks(app: &App) -> Vec<String> {
    app.store.load()
}
