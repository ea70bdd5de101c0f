//! Status line and move-list text derived from game state

use super::board::{Mark, Snapshot};
use super::rules::calculate_winner;

/// `"Winner: X"` once a line is complete, otherwise whose turn it is
pub fn status_text(snapshot: &Snapshot, x_is_next: bool) -> String {
    match calculate_winner(snapshot) {
        Some(winner) => format!("Winner: {}", winner),
        None => {
            let next = if x_is_next { Mark::X } else { Mark::O };
            format!("Next player: {}", next)
        }
    }
}

/// Label for the history entry at `move_index`
pub fn move_label(move_index: usize) -> String {
    if move_index > 0 {
        format!("Go to move #{}", move_index)
    } else {
        "Go to game start".to_string()
    }
}
