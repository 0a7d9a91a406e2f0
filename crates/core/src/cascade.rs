//! Cascade - clear, drop, refill, rescan until the board is stable
//!
//! One settle sub-cycle:
//! 1. scan the board; every run becomes a [`Effect::Match`]
//! 2. no runs: the board is stable, stop
//! 3. empty every matched cell (cells shared by two runs are cleared once)
//! 4. until no cell is empty: compact columns, then fill the top row
//! 5. record a [`Effect::Refill`] with the settled board
//!
//! Filling only the top row and compacting again makes new pieces enter from
//! above one row at a time.

use tracing::debug;

use crate::board::Board;
use crate::effect::Effect;
use crate::error::Result;
use crate::scanner;
use crate::source::PieceSource;

/// Run sub-cycles until a scan finds no match; returns the effect log.
///
/// On a board without matches this returns an empty log and draws nothing.
/// A source failure aborts the cascade and leaves the board partially
/// refilled.
pub fn settle<P, S>(board: &mut Board<P>, source: &mut S) -> Result<Vec<Effect<P>>>
where
    P: Clone + PartialEq,
    S: PieceSource<P> + ?Sized,
{
    let mut effects = Vec::new();
    let mut cycle = 0usize;

    loop {
        let matches = scanner::scan(board);
        if matches.is_empty() {
            return Ok(effects);
        }
        cycle += 1;

        for m in &matches {
            for &pos in &m.positions {
                board.clear(pos);
            }
        }
        let cleared = board.count_empty();
        debug!(cycle, matches = matches.len(), cleared, "clearing matches");

        effects.extend(matches.into_iter().map(Effect::Match));

        let drawn = refill(board, source)?;
        debug!(cycle, drawn, "board refilled");

        effects.push(Effect::Refill {
            board: board.clone(),
        });
    }
}

/// Alternate gravity and top-row fills until no cell is empty.
///
/// Returns the number of pieces drawn from `source`.
pub fn refill<P, S>(board: &mut Board<P>, source: &mut S) -> Result<usize>
where
    S: PieceSource<P> + ?Sized,
{
    let mut drawn = 0;
    while !board.is_full() {
        board.apply_gravity();
        drawn += board.fill_top_row(source)?;
    }
    Ok(drawn)
}
