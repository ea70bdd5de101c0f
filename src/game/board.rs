//! Marks and board snapshots

use std::fmt;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Cells per row
pub const BOARD_WIDTH: usize = 3;

/// The symbol a player places in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark whose turn it is at the given move index (even → X, odd → O)
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One complete board state.
///
/// Cells are stored row-major:
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
///
/// Snapshots are `Copy` and never edited in place once they are part of a
/// history; [`Snapshot::with_mark`] returns a new board instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Snapshot {
    /// The empty starting board
    pub fn empty() -> Self {
        Snapshot {
            cells: [None; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Snapshot { cells }
    }

    /// Get the mark in a cell. Out-of-range indices read as empty.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    pub fn is_occupied(&self, cell: usize) -> bool {
        self.get(cell).is_some()
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy of this board with `mark` placed at `cell`.
    ///
    /// Panics if `cell >= CELL_COUNT`; callers validate the index first.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[cell] = Some(mark);
        next
    }

    /// The single cell that differs from `prev`, or `None` when the boards
    /// differ in zero or several cells
    pub fn changed_cell(&self, prev: &Snapshot) -> Option<usize> {
        let mut changed = self
            .cells
            .iter()
            .zip(prev.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (changed.next(), changed.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }
}

/// Row and column (both zero-based) of a cell index
pub fn cell_position(cell: usize) -> (usize, usize) {
    (cell / BOARD_WIDTH, cell % BOARD_WIDTH)
}
