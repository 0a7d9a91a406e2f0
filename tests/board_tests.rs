//! Board tests - construction, lookups, swap, gravity and refill

use match3::core::{Board, BoardError, ScriptedSource, SourceError};
use match3::types::{Cell, Position};

fn board(rows: &[&str]) -> Board<char> {
    Board::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
}

fn text(board: &Board<char>) -> Vec<String> {
    board
        .rows()
        .map(|row| row.iter().map(|c| c.piece().copied().unwrap_or('.')).collect())
        .collect()
}

#[test]
fn test_create_fills_row_major() {
    let mut source = ScriptedSource::new("abcdef".chars());
    let board = Board::create(&mut source, 3, 2).unwrap();

    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 2);
    assert_eq!(board.len(), 6);
    assert_eq!(text(&board), vec!["abc", "def"]);
    assert_eq!(source.drawn(), 6);
}

#[test]
fn test_create_rejects_zero_dimensions() {
    let mut source = ScriptedSource::new("abc".chars());
    assert_eq!(
        Board::create(&mut source, 0, 3).unwrap_err(),
        BoardError::InvalidDimensions {
            width: 0,
            height: 3
        }
    );
    assert_eq!(
        Board::create(&mut source, 3, 0).unwrap_err(),
        BoardError::InvalidDimensions {
            width: 3,
            height: 0
        }
    );
    // Nothing drawn for a rejected board.
    assert_eq!(source.drawn(), 0);
}

#[test]
fn test_create_propagates_source_exhaustion() {
    let mut source = ScriptedSource::new("abcd".chars());
    let err = Board::create(&mut source, 3, 2).unwrap_err();
    assert_eq!(err, BoardError::Source(SourceError::Exhausted { drawn: 4 }));
}

#[test]
fn test_from_cells_checks_length() {
    let err = Board::<char>::from_cells(2, 2, vec![Cell::Empty; 3]).unwrap_err();
    assert_eq!(
        err,
        BoardError::CellCount {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn test_lookup_out_of_range_is_none() {
    let b = board(&["ab", "cd"]);
    assert_eq!(b.at(Position::new(1, 0)), Some(&'c'));
    assert_eq!(b.at(Position::new(-1, 0)), None);
    assert_eq!(b.at(Position::new(0, -1)), None);
    assert_eq!(b.at(Position::new(2, 0)), None);
    assert_eq!(b.at(Position::new(0, 2)), None);
    assert_eq!(b.index(Position::new(1, 1)), Some(3));
    assert_eq!(b.position_of(3), Position::new(1, 1));
}

#[test]
fn test_swap_and_out_of_range_swap() {
    let mut b = board(&["ab", "cd"]);
    assert!(b.swap(Position::new(0, 0), Position::new(1, 1)));
    assert_eq!(text(&b), vec!["db", "ca"]);

    let before = b.clone();
    assert!(!b.swap(Position::new(0, 0), Position::new(5, 5)));
    assert_eq!(b, before);
}

#[test]
fn test_gravity_compacts_columns() {
    let mut b = board(&["ab", "cd", "ef"]);
    b.clear(Position::new(1, 0));
    b.clear(Position::new(2, 1));

    let moved = b.apply_gravity();

    assert_eq!(text(&b), vec!["..", "ab", "ed"]);
    assert_eq!(moved, 3);
    assert_eq!(b.count_empty(), 2);
}

#[test]
fn test_gravity_on_full_board_is_noop() {
    let mut b = board(&["ab", "cd"]);
    let before = b.clone();
    assert_eq!(b.apply_gravity(), 0);
    assert_eq!(b, before);
}

#[test]
fn test_fill_top_row_only_touches_empty_top_cells() {
    let mut b = board(&["abc", "def"]);
    b.clear(Position::new(0, 1));
    b.clear(Position::new(1, 2));

    let mut source = ScriptedSource::new("xyz".chars());
    let drawn = b.fill_top_row(&mut source).unwrap();

    assert_eq!(drawn, 1);
    assert_eq!(text(&b), vec!["axc", "de."]);
    assert!(!b.is_full());
}

#[test]
fn test_positions_are_row_major() {
    let b = board(&["ab", "cd"]);
    let positions: Vec<Position> = b.positions().collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1),
        ]
    );
}
