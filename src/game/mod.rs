//! Tic-tac-toe rules.
//!
//! Everything here is pure: functions take a [`Snapshot`] by reference and
//! return new values. State over time lives in [`crate::snapshot::History`].
//!
//! - [`board`]: [`Mark`] and the nine-cell [`Snapshot`]
//! - [`rules`]: win detection over the eight fixed lines
//! - [`moves`]: legality check and next-board computation
//! - [`labels`]: status and move-list text

pub mod board;
pub mod labels;
pub mod moves;
pub mod rules;

pub use board::{cell_position, Mark, Snapshot, BOARD_WIDTH, CELL_COUNT};
pub use labels::{move_label, status_text};
pub use moves::{next_snapshot, IllegalMove};
pub use rules::{calculate_winner, winning_line, LINES};
