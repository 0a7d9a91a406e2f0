//! Match detection - run-length scans over rows and columns
//!
//! A match is a maximal run of at least [`MIN_MATCH_LEN`] equal pieces in one
//! row or one column. Row and column scans are independent: an L or cross
//! shaped cluster yields one row match and one column match that share the
//! corner cell.
//!
//! Emission order is part of the observable effect log:
//! - rows top to bottom, each scanned left to right
//! - then columns right to left, each scanned top to bottom
//!
//! Empty cells never match anything, including other empty cells.

use std::mem;

use crate::board::Board;
use crate::types::{Cell, Match, Position, MIN_MATCH_LEN};

/// Every match on the board: row matches first, then column matches.
pub fn scan<P: Clone + PartialEq>(board: &Board<P>) -> Vec<Match<P>> {
    let mut out = Vec::new();
    scan_rows_into(board, &mut out);
    scan_columns_into(board, &mut out);
    out
}

/// Matches along rows only.
pub fn scan_rows<P: Clone + PartialEq>(board: &Board<P>) -> Vec<Match<P>> {
    let mut out = Vec::new();
    scan_rows_into(board, &mut out);
    out
}

/// Matches along columns only.
pub fn scan_columns<P: Clone + PartialEq>(board: &Board<P>) -> Vec<Match<P>> {
    let mut out = Vec::new();
    scan_columns_into(board, &mut out);
    out
}

fn scan_rows_into<P: Clone + PartialEq>(board: &Board<P>, out: &mut Vec<Match<P>>) {
    for row in 0..board.height() {
        let line = (0..board.width()).map(|col| {
            (
                Position::new(row as i32, col as i32),
                board.cell_at(row, col),
            )
        });
        scan_line(line, out);
    }
}

fn scan_columns_into<P: Clone + PartialEq>(board: &Board<P>, out: &mut Vec<Match<P>>) {
    for col in (0..board.width()).rev() {
        let line = (0..board.height()).map(|row| {
            (
                Position::new(row as i32, col as i32),
                board.cell_at(row, col),
            )
        });
        scan_line(line, out);
    }
}

/// Walk one line, closing a run whenever the piece changes or the line ends.
fn scan_line<'a, P, I>(line: I, out: &mut Vec<Match<P>>)
where
    P: Clone + PartialEq + 'a,
    I: Iterator<Item = (Position, &'a Cell<P>)>,
{
    let mut last: Option<&P> = None;
    let mut run: Vec<Position> = Vec::new();

    for (pos, cell) in line {
        let piece = cell.piece();
        if piece.is_some() && piece == last {
            run.push(pos);
            continue;
        }
        close_run(last, &mut run, out);
        run.push(pos);
        last = piece;
    }
    close_run(last, &mut run, out);
}

fn close_run<P: Clone>(last: Option<&P>, run: &mut Vec<Position>, out: &mut Vec<Match<P>>) {
    match last {
        Some(piece) if run.len() >= MIN_MATCH_LEN => out.push(Match {
            matched: piece.clone(),
            positions: mem::take(run),
        }),
        _ => run.clear(),
    }
}

/// True if any row or column holds a run of [`MIN_MATCH_LEN`] equal pieces.
///
/// Stops at the first run found; used by the move legality probe.
pub fn has_match<P: PartialEq>(board: &Board<P>) -> bool {
    let (width, height) = (board.width(), board.height());

    let in_rows =
        (0..height).any(|row| line_has_run((0..width).map(|col| board.cell_at(row, col))));
    if in_rows {
        return true;
    }
    (0..width).any(|col| line_has_run((0..height).map(|row| board.cell_at(row, col))))
}

fn line_has_run<'a, P: PartialEq + 'a>(mut line: impl Iterator<Item = &'a Cell<P>>) -> bool {
    let mut last = match line.next() {
        Some(cell) => cell.piece(),
        None => return false,
    };
    let mut count = 1;
    for cell in line {
        let piece = cell.piece();
        if piece.is_some() && piece == last {
            count += 1;
            if count >= MIN_MATCH_LEN {
                return true;
            }
        } else {
            count = 1;
            last = piece;
        }
    }
    false
}
