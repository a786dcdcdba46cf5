//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing slot, task count and status
//! - `NoticeModal`: Blocking validation message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line text entry for new tasks
//! - `TaskList`: Rows of tasks, each with a `[Remove]` control
//!
//! Components receive external data as props, never by reaching into global
//! state. Each file holds the component's state types, event types,
//! rendering, event handling and tests.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── task_list.rs     (Task rows + remove controls)
//! ├── notice.rs        (Validation modal)
//! └── input_box/       (Text entry + cursor)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod task_list;
pub use task_list::{ListHit, TaskList, TaskListState};
pub mod notice;
pub use notice::NoticeModal;
