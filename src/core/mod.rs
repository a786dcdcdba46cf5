//! # Core Application Logic
//!
//! Task list business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • TaskStore (slot)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │    CLI     │
//!           │  Adapter   │              │ subcommands│
//!           │ (ratatui)  │              │  (main.rs) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: The `Task` newtype: trimmed, non-empty text
//! - [`storage`]: The `TaskStore` trait and its JSON slot / in-memory stores
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` controller
//! - [`config`]: Config file + env + CLI resolution

pub mod action;
pub mod config;
pub mod state;
pub mod storage;
pub mod task;
