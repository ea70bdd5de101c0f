//! # Introduction
//!
//! tictactty is tic-tac-toe in the terminal. Every move is kept as a board
//! snapshot, and a move list lets you jump back to any earlier position and
//! play on from there.
//!
//! ## Pieces
//!
//! ```text
//! input → App → History::click → game::next_snapshot → History::play → redraw
//! ```
//!
//! 1. [`game`] — marks, boards, win detection, and status text. Pure functions.
//! 2. [`snapshot`] — [`snapshot::History`], the list of boards and the
//!    current move pointer.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 4. [`config`] and [`logging`] — command-line options and the file logger.

pub mod config;
pub mod game;
pub mod logging;
pub mod snapshot;
pub mod ui;
