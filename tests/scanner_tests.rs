//! Match scanner tests - run detection, ordering, empty cells

use match3::core::scanner::{scan_columns, scan_rows};
use match3::core::{has_match, scan, Board};
use match3::types::{Cell, Match, Position};

fn board(rows: &[&str]) -> Board<char> {
    Board::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
}

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn test_stable_board_has_no_matches() {
    let b = board(&["abc", "bca", "cab"]);
    assert!(scan(&b).is_empty());
    assert!(!has_match(&b));
}

#[test]
fn test_run_of_four_is_one_match() {
    let b = board(&["aaaab"]);
    assert_eq!(
        scan(&b),
        vec![Match {
            matched: 'a',
            positions: vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
        }]
    );
}

#[test]
fn test_run_ending_at_line_end() {
    let b = board(&["baaa"]);
    let matches = scan(&b);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].positions, vec![p(0, 1), p(0, 2), p(0, 3)]);
}

#[test]
fn test_two_runs_in_one_row() {
    let b = board(&["aaabbb"]);
    let matches = scan(&b);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].matched, 'a');
    assert_eq!(matches[1].matched, 'b');
}

#[test]
fn test_rows_before_columns_and_cross_reported_twice() {
    let b = board(&["bac", "aaa", "dae"]);
    let matches = scan(&b);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].positions, vec![p(1, 0), p(1, 1), p(1, 2)]);
    assert_eq!(matches[1].positions, vec![p(0, 1), p(1, 1), p(2, 1)]);
    assert!(matches[0].contains(p(1, 1)) && matches[1].contains(p(1, 1)));
}

#[test]
fn test_columns_scanned_right_to_left() {
    let b = board(&["abc", "adc", "aec"]);
    let matches = scan_columns(&b);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].matched, 'c');
    assert_eq!(matches[0].positions, vec![p(0, 2), p(1, 2), p(2, 2)]);
    assert_eq!(matches[1].matched, 'a');
    assert!(scan_rows(&b).is_empty());
}

#[test]
fn test_empty_cells_never_match() {
    let b = Board::<char>::from_cells(3, 1, vec![Cell::Empty; 3]).unwrap();
    assert!(scan(&b).is_empty());
    assert!(!has_match(&b));
}

#[test]
fn test_empty_cell_breaks_a_run() {
    let b = Board::from_cells(
        5,
        1,
        vec![
            Cell::Occupied('a'),
            Cell::Occupied('a'),
            Cell::Empty,
            Cell::Occupied('a'),
            Cell::Occupied('a'),
        ],
    )
    .unwrap();
    assert!(scan(&b).is_empty());
}

#[test]
fn test_short_board_cannot_match() {
    let b = board(&["aa", "aa"]);
    assert!(scan(&b).is_empty());
}
