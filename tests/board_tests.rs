//! Board tests - grid, floor sentinel, locking and line clearing

use blockfall::core::{Board, EngineError, GameEvent, NullSink};
use blockfall::types::{PieceColor, Pos, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i16, except: &[i16]) {
    for col in 0..board.width() as i16 {
        if !except.contains(&col) {
            board.set(Pos::new(col, row), Some(PieceColor::Gray));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i16 {
        for col in 0..BOARD_WIDTH as i16 {
            let pos = Pos::new(col, row);
            assert!(board.is_inside(pos), "{pos} should be inside");
            assert!(!board.is_occupied(pos));
            assert_eq!(board.color_at(pos), PieceColor::Gray);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_is_inside_edges() {
    let board = Board::new();
    assert!(board.is_inside(Pos::new(0, 0)));
    assert!(board.is_inside(Pos::new(9, 19)));
    assert!(!board.is_inside(Pos::new(-1, 0)));
    assert!(!board.is_inside(Pos::new(10, 0)));
    assert!(!board.is_inside(Pos::new(0, -1)));
    assert!(!board.is_inside(Pos::new(0, 20)));
}

#[test]
fn test_floor_sentinel_across_columns() {
    let board = Board::new();
    for col in -5..=15 {
        assert!(board.is_occupied(Pos::new(col, -1)), "floor at column {col}");
    }
    // Other out-of-grid cells are free.
    assert!(!board.is_occupied(Pos::new(-1, 5)));
    assert!(!board.is_occupied(Pos::new(10, 5)));
    assert!(!board.is_occupied(Pos::new(4, 21)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(Pos::new(5, 10), Some(PieceColor::Purple)));
    assert!(board.is_occupied(Pos::new(5, 10)));
    assert_eq!(board.get(Pos::new(5, 10)).map(|m| m.color), Some(PieceColor::Purple));

    assert!(board.set(Pos::new(5, 10), None));
    assert!(!board.is_occupied(Pos::new(5, 10)));

    assert!(!board.set(Pos::new(10, 0), Some(PieceColor::Red)));
    assert!(!board.set(Pos::new(0, 20), Some(PieceColor::Red)));
}

#[test]
fn test_lock_writes_color_and_emits_events() {
    let mut board = Board::new();
    let cells = [Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)];
    let mut events = Vec::new();

    let clear = board.lock_cells(&cells, PieceColor::Yellow, &mut events).unwrap();
    assert_eq!(clear.count(), 0);
    for pos in cells {
        assert_eq!(board.color_at(pos), PieceColor::Yellow);
    }

    let created: Vec<Pos> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MinoCreated { pos, .. } => Some(*pos),
            _ => None,
        })
        .collect();
    assert_eq!(created, cells.to_vec());
}

#[test]
fn test_lock_out_of_bounds_leaves_board_untouched() {
    let mut board = Board::new();
    let cells = [Pos::new(4, 19), Pos::new(5, 19), Pos::new(4, 20), Pos::new(5, 20)];
    let err = board.lock_cells(&cells, PieceColor::Yellow, &mut NullSink).unwrap_err();
    assert!(matches!(err, EngineError::LockOutOfBounds { pos } if pos == Pos::new(4, 20)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_single_line_clear_shifts_rows_down() {
    let mut board = Board::new();
    fill_row(&mut board, 0, &[3, 4]);
    board.set(Pos::new(0, 1), Some(PieceColor::Red));
    board.set(Pos::new(7, 5), Some(PieceColor::Blue));

    let cells = [Pos::new(3, 0), Pos::new(4, 0), Pos::new(3, 1), Pos::new(4, 1)];
    let clear = board.lock_cells(&cells, PieceColor::Yellow, &mut NullSink).unwrap();

    assert_eq!(clear.rows, vec![0]);
    assert_eq!(board.row_occupancy(0), 3);
    assert_eq!(board.color_at(Pos::new(0, 0)), PieceColor::Red);
    assert_eq!(board.color_at(Pos::new(3, 0)), PieceColor::Yellow);
    assert_eq!(board.color_at(Pos::new(4, 0)), PieceColor::Yellow);
    assert_eq!(board.color_at(Pos::new(7, 4)), PieceColor::Blue);
    assert!(!board.is_occupied(Pos::new(7, 5)));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_two_non_adjacent_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 0, &[0]);
    fill_row(&mut board, 1, &[0, 9]);
    fill_row(&mut board, 2, &[0]);
    board.set(Pos::new(5, 3), Some(PieceColor::Green));

    // Vertical I in column 0 completes rows 0 and 2.
    let cells = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)];
    let mut events = Vec::new();
    let clear = board.lock_cells(&cells, PieceColor::Cyan, &mut events).unwrap();

    // Row 0 clears, the old row 2 falls to slot 1 and clears there.
    assert_eq!(clear.rows, vec![0, 1]);
    assert_eq!(board.row_occupancy(0), 9);
    assert!(!board.is_occupied(Pos::new(9, 0)));
    assert_eq!(board.row_occupancy(1), 2);
    assert_eq!(board.color_at(Pos::new(0, 1)), PieceColor::Cyan);
    assert_eq!(board.color_at(Pos::new(5, 1)), PieceColor::Green);
    assert_eq!(board.row_occupancy(2), 0);

    let removed = events.iter().find_map(|e| match e {
        GameEvent::MinosRemoved { ids } => Some(ids.len()),
        _ => None,
    });
    assert_eq!(removed, Some(20));
    assert!(events.contains(&GameEvent::LinesCleared { rows: vec![0, 1] }));
}

#[test]
fn test_collapse_emits_moves_with_stable_ids() {
    let mut board = Board::new();
    fill_row(&mut board, 0, &[]);
    board.set(Pos::new(2, 1), Some(PieceColor::Orange));
    let id = board.get(Pos::new(2, 1)).unwrap().id;

    let mut events = Vec::new();
    board.clear_full_rows(&mut events);

    assert!(events.contains(&GameEvent::MinoMoved {
        id,
        from: Pos::new(2, 1),
        to: Pos::new(2, 0),
    }));
    assert_eq!(board.get(Pos::new(2, 0)).map(|m| m.id), Some(id));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 3, &[]);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_custom_board_size() {
    let board = Board::with_size(6, 8);
    assert!(board.is_inside(Pos::new(5, 7)));
    assert!(!board.is_inside(Pos::new(6, 0)));
    assert_eq!(board.colors().count(), 48);
}
