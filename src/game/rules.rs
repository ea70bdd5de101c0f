//! Win detection

use super::board::{Mark, Snapshot};

/// Every winning triple, in scan order: rows, then columns, then diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The first line in [`LINES`] whose three cells hold the same mark
pub fn winning_line(snapshot: &Snapshot) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let first = snapshot.get(a);
        first.is_some() && first == snapshot.get(b) && first == snapshot.get(c)
    })
}

/// The winning mark, if any line is complete
pub fn calculate_winner(snapshot: &Snapshot) -> Option<Mark> {
    winning_line(snapshot).and_then(|[a, _, _]| snapshot.get(a))
}
