//! Effects - the ordered audit trail of one move
//!
//! A move produces a flat list of effects: each detected run as a
//! [`Effect::Match`] (before it is cleared), and one [`Effect::Refill`] per
//! settle sub-cycle carrying the board as it stood once gravity and refill
//! finished.

use serde::Serialize;

use crate::board::Board;
use crate::types::Match;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Effect<P> {
    Match(Match<P>),
    Refill { board: Board<P> },
}

impl<P> Effect<P> {
    pub fn as_match(&self) -> Option<&Match<P>> {
        match self {
            Effect::Match(m) => Some(m),
            Effect::Refill { .. } => None,
        }
    }

    pub fn is_refill(&self) -> bool {
        matches!(self, Effect::Refill { .. })
    }
}

/// Terminal board state and full effect trace of one move.
///
/// An illegal move yields the unchanged board and no effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult<P> {
    pub board: Board<P>,
    pub effects: Vec<Effect<P>>,
}

impl<P> MoveResult<P> {
    /// True when the move was rejected or changed nothing.
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match<P>> + '_ {
        self.effects.iter().filter_map(Effect::as_match)
    }

    /// Number of settle sub-cycles (one refill each).
    pub fn cascades(&self) -> usize {
        self.effects.iter().filter(|e| e.is_refill()).count()
    }
}
