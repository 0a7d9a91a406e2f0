//! Game module - a board paired with the source that feeds it
//!
//! [`Game`] is the convenience owner used by frontends: it keeps the board
//! and its piece source together so moves and resets need no extra wiring.
//! All rules live in [`crate::moves`] and [`crate::cascade`].

use tracing::info;

use crate::board::Board;
use crate::cascade;
use crate::effect::{Effect, MoveResult};
use crate::error::Result;
use crate::moves::{self, Swap};
use crate::source::PieceSource;
use crate::types::Position;

#[derive(Debug, Clone)]
pub struct Game<P, S> {
    board: Board<P>,
    source: S,
    /// Legal moves applied since the last reset.
    moves_made: u32,
    /// Monotonic board id (increments on reset).
    episode_id: u32,
}

impl<P, S> Game<P, S>
where
    P: Clone + PartialEq,
    S: PieceSource<P>,
{
    /// Create a board of the given size filled from `source`.
    ///
    /// The fresh board may already contain matches; call [`Game::settle`]
    /// to clear them before play.
    pub fn new(mut source: S, width: usize, height: usize) -> Result<Self> {
        let board = Board::create(&mut source, width, height)?;
        Ok(Self {
            board,
            source,
            moves_made: 0,
            episode_id: 0,
        })
    }

    /// Wrap an existing board.
    pub fn from_board(board: Board<P>, source: S) -> Self {
        Self {
            board,
            source,
            moves_made: 0,
            episode_id: 0,
        }
    }

    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Resolve any matches already on the board.
    pub fn settle(&mut self) -> Result<Vec<Effect<P>>> {
        cascade::settle(&mut self.board, &mut self.source)
    }

    pub fn can_move(&mut self, a: Position, b: Position) -> bool {
        moves::can_move(&mut self.board, a, b)
    }

    /// Attempt the swap; see [`moves::make_move`].
    pub fn apply_move(&mut self, a: Position, b: Position) -> Result<MoveResult<P>> {
        let result = moves::make_move(&mut self.board, &mut self.source, a, b)?;
        if !result.is_noop() {
            self.moves_made += 1;
        }
        Ok(result)
    }

    pub fn apply_swap(&mut self, swap: Swap) -> Result<MoveResult<P>> {
        self.apply_move(swap.a, swap.b)
    }

    pub fn legal_moves(&mut self) -> Vec<Swap> {
        moves::legal_moves(&mut self.board)
    }

    pub fn hint(&mut self) -> Option<Swap> {
        moves::hint(&mut self.board)
    }

    pub fn has_legal_move(&mut self) -> bool {
        moves::has_legal_move(&mut self.board)
    }

    /// Refill the whole board from the source and settle it.
    ///
    /// The source keeps its state, so a reset deals a new board rather than
    /// replaying the old one.
    pub fn reset(&mut self) -> Result<Vec<Effect<P>>> {
        self.board = Board::create(&mut self.source, self.board.width(), self.board.height())?;
        self.moves_made = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "board reset");
        self.settle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RandomSource, ScriptedSource};

    #[test]
    fn new_game_draws_every_cell() {
        let game = Game::new(ScriptedSource::new("abcdef".chars()), 3, 2).unwrap();
        assert_eq!(game.board().len(), 6);
        assert_eq!(game.source().drawn(), 6);
        assert_eq!(game.moves_made(), 0);
    }

    #[test]
    fn settle_leaves_a_stable_full_board() {
        let mut game = Game::new(RandomSource::gems(3, 4), 8, 8).unwrap();
        game.settle().unwrap();
        assert!(game.board().is_full());
        assert!(crate::scanner::scan(game.board()).is_empty());
    }

    #[test]
    fn only_legal_moves_are_counted() {
        let board = Board::from_rows(vec![vec!['a', 'a', 'b', 'a']]).unwrap();
        let mut game = Game::from_board(board, ScriptedSource::new("xyz".chars()));

        let noop = game
            .apply_move(Position::new(0, 0), Position::new(0, 1))
            .unwrap();
        assert!(noop.is_noop());
        assert_eq!(game.moves_made(), 0);

        let result = game
            .apply_move(Position::new(0, 2), Position::new(0, 3))
            .unwrap();
        assert!(!result.is_noop());
        assert_eq!(game.moves_made(), 1);
    }

    #[test]
    fn reset_bumps_episode() {
        let mut game = Game::new(RandomSource::gems(11, 6), 5, 5).unwrap();
        game.settle().unwrap();
        game.reset().unwrap();
        assert_eq!(game.episode_id(), 1);
        assert!(game.board().is_full());
        assert_eq!(game.moves_made(), 0);
    }
}
