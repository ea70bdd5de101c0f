//! Property-based tests for the win evaluator and history container.

use proptest::prelude::*;
use tictactty::game::{calculate_winner, winning_line, Mark, Snapshot, LINES};
use tictactty::snapshot::{History, MoveOutcome};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

fn arb_cell_value() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

/// Any assignment of marks to cells, reachable in a game or not
fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
    prop::array::uniform9(arb_cell_value()).prop_map(Snapshot::from_cells)
}

/// A sequence of clicks; some will be illegal and ignored
fn arb_clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..9, 0..20)
}

fn history_from(clicks: &[usize]) -> History {
    let mut history = History::new();
    for &cell in clicks {
        history.click(cell);
    }
    history
}

// =============================================================================
// Win evaluator
// =============================================================================

proptest! {
    /// A winner is reported exactly when some line holds three equal marks
    #[test]
    fn prop_winner_iff_uniform_line(snapshot in arb_snapshot()) {
        let uniform = LINES.iter().find(|line| {
            let first = snapshot.get(line[0]);
            first.is_some() && line.iter().all(|&c| snapshot.get(c) == first)
        });

        match calculate_winner(&snapshot) {
            Some(mark) => {
                let line = uniform.expect("winner without a complete line");
                prop_assert_eq!(snapshot.get(line[0]), Some(mark));
                prop_assert_eq!(winning_line(&snapshot), Some(*line));
            }
            None => prop_assert!(uniform.is_none()),
        }
    }
}

// =============================================================================
// History container
// =============================================================================

proptest! {
    /// Playing from any point leaves exactly current + 2 entries and keeps the prefix
    #[test]
    fn prop_play_truncates_after_current(
        clicks in arb_clicks(),
        jump in any::<usize>(),
        cell in 0usize..9,
    ) {
        let mut history = history_from(&clicks);
        let target = jump % history.len();
        history.jump_to(target).expect("index within history");

        let prefix: Vec<Snapshot> = history.iter().take(target + 1).copied().collect();

        if let MoveOutcome::Played { move_number, .. } = history.click(cell) {
            prop_assert_eq!(history.len(), target + 2);
            prop_assert_eq!(move_number, target + 1);
            prop_assert_eq!(history.current_move(), target + 1);
            let kept: Vec<Snapshot> = history.iter().take(target + 1).copied().collect();
            prop_assert_eq!(kept, prefix);
        }
    }

    /// Clicks are only accepted on an empty cell of an unfinished board
    #[test]
    fn prop_click_accepted_only_when_legal(clicks in arb_clicks(), cell in 0usize..9) {
        let mut history = history_from(&clicks);
        let before = *history.current();
        let len_before = history.len();
        let legal = calculate_winner(&before).is_none() && !before.is_occupied(cell);

        match history.click(cell) {
            MoveOutcome::Played { .. } => prop_assert!(legal),
            MoveOutcome::Ignored(_) => {
                prop_assert!(!legal);
                prop_assert_eq!(history.len(), len_before);
                prop_assert_eq!(*history.current(), before);
            }
        }
    }

    /// Jumping only moves the pointer
    #[test]
    fn prop_jump_leaves_history_unchanged(clicks in arb_clicks(), jump in any::<usize>()) {
        let mut history = history_from(&clicks);
        let before: Vec<Snapshot> = history.iter().copied().collect();
        let target = jump % history.len();

        history.jump_to(target).expect("index within history");

        prop_assert_eq!(history.current_move(), target);
        let after: Vec<Snapshot> = history.iter().copied().collect();
        prop_assert_eq!(after, before);
    }

    /// X moves on even indices, O on odd, one new mark per entry
    #[test]
    fn prop_turns_alternate(clicks in arb_clicks()) {
        let history = history_from(&clicks);

        for index in 0..history.len() {
            let snapshot = history.get(index).expect("index within history");
            prop_assert_eq!(snapshot.filled(), index);

            if index > 0 {
                let cell = history.cell_played_at(index).expect("one cell changed");
                prop_assert_eq!(snapshot.get(cell), Some(Mark::for_move(index - 1)));
            }
        }

        let expected = if history.current_move() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(history.active_mark(), expected);
        prop_assert_eq!(history.x_is_next(), expected == Mark::X);
    }
}
