use tictactty::game::{
    calculate_winner, cell_position, move_label, next_snapshot, status_text, winning_line,
    IllegalMove, Mark, Snapshot, LINES,
};

/// Build a board from a 9-character picture, e.g. "XO.X.O..X"
fn board(picture: &str) -> Snapshot {
    let mut cells = [None; 9];
    for (i, c) in picture.chars().enumerate() {
        cells[i] = match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Snapshot::from_cells(cells)
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(calculate_winner(&Snapshot::empty()), None);
    assert_eq!(winning_line(&Snapshot::empty()), None);
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut snapshot = Snapshot::empty();
            for cell in line {
                snapshot = snapshot.with_mark(cell, mark);
            }
            assert_eq!(calculate_winner(&snapshot), Some(mark), "line {:?}", line);
            assert_eq!(winning_line(&snapshot), Some(line));
        }
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    assert_eq!(calculate_winner(&board("XXO......")), None);
    assert_eq!(calculate_winner(&board("XO.XO.OX.")), None);
}

#[test]
fn test_full_board_draw_has_no_winner() {
    // X O X
    // X O O
    // O X X
    assert_eq!(calculate_winner(&board("XOXXOOOXX")), None);
}

#[test]
fn test_scan_order_prefers_rows_over_diagonals() {
    // Row 0 and the 0-4-8 diagonal are both X
    let snapshot = board("XXXOXO..X");
    assert_eq!(winning_line(&snapshot), Some([0, 1, 2]));
    assert_eq!(calculate_winner(&snapshot), Some(Mark::X));
}

#[test]
fn test_next_snapshot_places_the_right_mark() {
    let empty = Snapshot::empty();

    let after_x = next_snapshot(&empty, 4, true).expect("legal move");
    assert_eq!(after_x.get(4), Some(Mark::X));
    assert_eq!(after_x.filled(), 1);

    let after_o = next_snapshot(&after_x, 0, false).expect("legal move");
    assert_eq!(after_o.get(0), Some(Mark::O));
    assert_eq!(after_o.get(4), Some(Mark::X));

    // The input board is never modified
    assert_eq!(empty, Snapshot::empty());
    assert_eq!(after_x.get(0), None);
}

#[test]
fn test_next_snapshot_rejects_occupied_cell() {
    let snapshot = board("....X....");
    assert_eq!(
        next_snapshot(&snapshot, 4, false),
        Err(IllegalMove::Occupied {
            cell: 4,
            mark: Mark::X
        })
    );
}

#[test]
fn test_next_snapshot_rejects_moves_after_a_win() {
    let snapshot = board("XXXOO....");
    assert_eq!(
        next_snapshot(&snapshot, 8, false),
        Err(IllegalMove::GameOver(Mark::X))
    );
}

#[test]
fn test_next_snapshot_rejects_off_board_cell() {
    assert_eq!(
        next_snapshot(&Snapshot::empty(), 9, true),
        Err(IllegalMove::OutOfBounds(9))
    );
}

#[test]
fn test_status_text() {
    assert_eq!(status_text(&Snapshot::empty(), true), "Next player: X");
    assert_eq!(status_text(&board("....X...."), false), "Next player: O");
    assert_eq!(status_text(&board("OOOXX.X.."), true), "Winner: O");
}

#[test]
fn test_move_labels() {
    assert_eq!(move_label(0), "Go to game start");
    assert_eq!(move_label(1), "Go to move #1");
    assert_eq!(move_label(9), "Go to move #9");
}

#[test]
fn test_changed_cell() {
    let before = board("X........");
    let after = board("X...O....");
    assert_eq!(after.changed_cell(&before), Some(4));
    assert_eq!(before.changed_cell(&before), None);
    assert_eq!(board("X...O...X").changed_cell(&before), None);
}

#[test]
fn test_cell_position_is_row_major() {
    assert_eq!(cell_position(0), (0, 0));
    assert_eq!(cell_position(5), (1, 2));
    assert_eq!(cell_position(7), (2, 1));
}

#[test]
fn test_mark_display_and_turn_parity() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
    assert_eq!(Mark::for_move(0), Mark::X);
    assert_eq!(Mark::for_move(1), Mark::O);
    assert_eq!(Mark::for_move(6), Mark::X);
}
