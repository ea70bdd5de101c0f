//! Move legality and next-board computation

use super::board::{Mark, Snapshot, CELL_COUNT};
use super::rules::calculate_winner;
use thiserror::Error;

/// Why a click did not produce a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The board already has a winner
    #[error("game is already won by {0}")]
    GameOver(Mark),

    /// The target cell already holds a mark
    #[error("cell {cell} is already taken by {mark}")]
    Occupied { cell: usize, mark: Mark },

    #[error("cell {0} is off the board")]
    OutOfBounds(usize),
}

/// Compute the board after the player to move claims `cell`.
///
/// `current` is left untouched; the result is a fresh copy with one more mark.
pub fn next_snapshot(
    current: &Snapshot,
    cell: usize,
    x_is_next: bool,
) -> Result<Snapshot, IllegalMove> {
    if cell >= CELL_COUNT {
        return Err(IllegalMove::OutOfBounds(cell));
    }

    if let Some(winner) = calculate_winner(current) {
        return Err(IllegalMove::GameOver(winner));
    }

    if let Some(mark) = current.get(cell) {
        return Err(IllegalMove::Occupied { cell, mark });
    }

    let mark = if x_is_next { Mark::X } else { Mark::O };
    Ok(current.with_mark(cell, mark))
}
