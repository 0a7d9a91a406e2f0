//! Move legality and execution
//!
//! A swap of `a` and `b` is legal when:
//! - `a` and `b` are different cells, both on the board and occupied
//! - they share a row or a column (they need not be neighbours)
//! - after swapping, some row or column anywhere on the board holds a run of
//!   three or more equal pieces
//!
//! The last rule is checked by actually swapping, scanning the whole board
//! and swapping back.

use serde::Serialize;
use tracing::{debug, trace};

use crate::board::Board;
use crate::cascade;
use crate::effect::MoveResult;
use crate::error::Result;
use crate::scanner;
use crate::source::PieceSource;
use crate::types::Position;

/// A candidate swap between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Swap {
    pub a: Position,
    pub b: Position,
}

impl Swap {
    pub fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    pub fn is_adjacent(&self) -> bool {
        self.a.is_adjacent_to(self.b)
    }
}

/// Why a swap was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    SamePosition,
    OutOfRange,
    NotAligned,
    NoMatch,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::SamePosition => "same position",
            Rejection::OutOfRange => "out of range",
            Rejection::NotAligned => "not on a shared row or column",
            Rejection::NoMatch => "no match after swap",
        }
    }
}

/// Full legality check; the board is unchanged when this returns.
pub fn check_move<P: PartialEq>(
    board: &mut Board<P>,
    a: Position,
    b: Position,
) -> std::result::Result<(), Rejection> {
    if a == b {
        return Err(Rejection::SamePosition);
    }
    if board.at(a).is_none() || board.at(b).is_none() {
        return Err(Rejection::OutOfRange);
    }
    if !a.is_aligned_with(b) {
        return Err(Rejection::NotAligned);
    }

    board.swap(a, b);
    let found = scanner::has_match(board);
    board.swap(a, b);

    if found {
        Ok(())
    } else {
        Err(Rejection::NoMatch)
    }
}

/// True if swapping `a` and `b` is legal. Never modifies the board.
pub fn can_move<P: PartialEq>(board: &mut Board<P>, a: Position, b: Position) -> bool {
    check_move(board, a, b).is_ok()
}

/// Swap `a` and `b` and settle the board.
///
/// An illegal swap is not an error: the result carries the unchanged board
/// and no effects. Errors come only from the piece source.
pub fn make_move<P, S>(
    board: &mut Board<P>,
    source: &mut S,
    a: Position,
    b: Position,
) -> Result<MoveResult<P>>
where
    P: Clone + PartialEq,
    S: PieceSource<P> + ?Sized,
{
    if let Err(reason) = check_move(board, a, b) {
        trace!(?a, ?b, reason = reason.as_str(), "move rejected");
        return Ok(MoveResult {
            board: board.clone(),
            effects: Vec::new(),
        });
    }

    board.swap(a, b);
    let effects = cascade::settle(board, source)?;
    debug!(?a, ?b, effects = effects.len(), "move applied");

    Ok(MoveResult {
        board: board.clone(),
        effects,
    })
}

/// Every legal swap, each unordered pair once, in row-major order of the
/// first cell.
pub fn legal_moves<P: PartialEq>(board: &mut Board<P>) -> Vec<Swap> {
    let mut out = Vec::new();
    let (width, height) = (board.width() as i32, board.height() as i32);

    for row in 0..height {
        for col in 0..width {
            let a = Position::new(row, col);
            let along_row = (col + 1..width).map(|c| Position::new(row, c));
            let along_col = (row + 1..height).map(|r| Position::new(r, col));
            for b in along_row.chain(along_col) {
                if can_move(board, a, b) {
                    out.push(Swap::new(a, b));
                }
            }
        }
    }
    out
}

/// A legal swap to suggest to a player.
///
/// Neighbour swaps are preferred; a longer aligned swap is returned only when
/// no neighbour swap works.
pub fn hint<P: PartialEq>(board: &mut Board<P>) -> Option<Swap> {
    let positions: Vec<Position> = board.positions().collect();
    for &a in &positions {
        for b in board.neighbours(a) {
            // Each unordered pair once: only look right and down.
            if b < a {
                continue;
            }
            if can_move(board, a, b) {
                return Some(Swap::new(a, b));
            }
        }
    }
    legal_moves(board).into_iter().next()
}

pub fn has_legal_move<P: PartialEq>(board: &mut Board<P>) -> bool {
    hint(board).is_some()
}
