// Board history for time-travel navigation

use crate::game::{self, IllegalMove, Mark, Snapshot};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from history navigation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("move {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}

/// Result of clicking a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was accepted and appended to history
    Played {
        mark: Mark,
        cell: usize,
        move_number: usize,
    },
    /// The click was ignored; history and current move are unchanged
    Ignored(IllegalMove),
}

/// Ordered board snapshots plus a pointer to the one being shown.
///
/// Index 0 is always the empty board. Every accepted move drops any snapshots
/// after the current one before appending, so jumping back and playing forks
/// a new line of play.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    current_move: usize,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: vec![Snapshot::empty()],
            current_move: 0,
        }
    }

    /// Replace everything after the current move with `next` and move to it
    pub fn play(&mut self, next: Snapshot) {
        let discarded = self.snapshots.len() - (self.current_move + 1);
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        if discarded > 0 {
            debug!(discarded, "Dropped later moves");
        }
    }

    /// Show an earlier (or later) snapshot without changing history
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }

        self.current_move = index;
        info!(move_index = index, "Jumped to move");
        Ok(())
    }

    /// Handle a click on `cell` of the current board.
    ///
    /// Legal clicks are played; illegal ones leave everything as it was.
    pub fn click(&mut self, cell: usize) -> MoveOutcome {
        match game::next_snapshot(self.current(), cell, self.x_is_next()) {
            Ok(next) => {
                let mark = self.active_mark();
                self.play(next);
                info!(%mark, cell, move_number = self.current_move, "Played move");
                MoveOutcome::Played {
                    mark,
                    cell,
                    move_number: self.current_move,
                }
            }
            Err(reason) => {
                debug!(cell, %reason, "Ignored click");
                MoveOutcome::Ignored(reason)
            }
        }
    }

    /// The snapshot at the current move
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current_move]
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots, including the empty start
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty start board is never removed
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn active_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    pub fn winner(&self) -> Option<Mark> {
        game::calculate_winner(self.current())
    }

    /// Whether the current move is the last one in history
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.snapshots.len()
    }

    /// Status line for the current board
    pub fn status(&self) -> String {
        game::status_text(self.current(), self.x_is_next())
    }

    /// One label per history entry, in order
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.snapshots.len()).map(game::move_label).collect()
    }

    /// The cell played to reach snapshot `index`; `None` for the start board
    pub fn cell_played_at(&self, index: usize) -> Option<usize> {
        let prev = self.snapshots.get(index.checked_sub(1)?)?;
        self.snapshots.get(index)?.changed_cell(prev)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
