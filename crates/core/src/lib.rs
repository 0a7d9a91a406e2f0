//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: board state, swap legality, match
//! detection and the clear/gravity/refill cascade. It has **no dependencies**
//! on terminals, files or networking.
//!
//! - **Generic**: pieces are any `Clone + PartialEq` type; the engine only
//!   compares them
//! - **Deterministic**: the same board and piece source always produce the
//!   same effect log
//! - **Explicit**: every move returns its full, ordered effect log; nothing is
//!   pushed to global listeners
//!
//! # Module Structure
//!
//! - [`board`]: flat `width x height` grid, lookups, swap, gravity, top-row fill
//! - [`scanner`]: row and column run detection
//! - [`cascade`]: the settle loop producing [`Effect`]s
//! - [`moves`]: legality probe, move execution, hints
//! - [`source`]: the [`PieceSource`] trait and the provided sources
//! - [`game`]: a board bundled with its source
//!
//! # Example
//!
//! ```
//! use match3_core::{make_move, Board, Effect, ScriptedSource};
//! use match3_core::types::Position;
//!
//! let mut board = Board::from_rows(vec![vec!['a', 'a', 'b', 'a']]).unwrap();
//! let mut source = ScriptedSource::new(['x', 'y', 'z']);
//!
//! let result = make_move(&mut board, &mut source, Position::new(0, 2), Position::new(0, 3)).unwrap();
//!
//! assert_eq!(result.effects.len(), 2);
//! assert!(matches!(result.effects[0], Effect::Match(_)));
//! assert!(result.effects[1].is_refill());
//! ```

pub mod board;
pub mod cascade;
pub mod effect;
pub mod error;
pub mod game;
pub mod moves;
pub mod scanner;
pub mod source;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::settle;
pub use effect::{Effect, MoveResult};
pub use error::{BoardError, Result, SourceError};
pub use game::Game;
pub use moves::{
    can_move, check_move, has_legal_move, hint, legal_moves, make_move, Rejection, Swap,
};
pub use scanner::{has_match, scan};
pub use source::{from_fn, FnSource, PieceSource, RandomSource, ScriptedSource, SimpleRng};
