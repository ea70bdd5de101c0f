//! TUI pane rendering modules
//!
//! - [`board`]: status line and the 3x3 grid, with the winning line highlighted
//! - [`moves`]: the "go to move" list, one row per history entry
//! - [`status`]: status bar with keybindings and history position
//!
//! Render functions only read game state. The board and move list return the
//! screen areas they drew so the app can route mouse clicks.

pub mod board;
pub mod moves;
pub mod status;

pub use board::{render_board_pane, BoardRenderData};
pub use moves::{render_moves_pane, MovesLayout, MovesScrollState};
pub use status::{render_status_bar, StatusRenderData};
