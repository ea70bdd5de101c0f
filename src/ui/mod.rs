//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, input event loop, pane focus, mouse hit-testing
//! - **[`panes`]** — render functions for each visible pane (board, move list,
//!   status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`terminal`]** — raw mode / alternate screen setup, restore, and panic hook
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`History`] and call [`App::run`] to start the event loop.
//!
//! [`History`]: crate::snapshot::History
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
