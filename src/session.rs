//! Interactive play state: cursor, pending selection, hint and status text.
//!
//! Pure (no terminal I/O); the binary feeds it [`PlayerAction`]s and draws
//! [`Session::play_state`].

use tracing::debug;

use crate::core::{BoardError, Game, RandomSource, Swap};
use crate::observe::{notify, EffectCounter};
use crate::term::PlayState;
use crate::types::{Gem, PlayerAction, Position};

pub struct Session {
    game: Game<Gem, RandomSource<Gem>>,
    cursor: Position,
    selected: Option<Position>,
    hint: Option<Swap>,
    last_chain: usize,
    status: String,
}

impl Session {
    pub fn new(game: Game<Gem, RandomSource<Gem>>) -> Self {
        let mut session = Self {
            game,
            cursor: Position::new(0, 0),
            selected: None,
            hint: None,
            last_chain: 0,
            status: String::new(),
        };
        session.check_stuck();
        session
    }

    pub fn game(&self) -> &Game<Gem, RandomSource<Gem>> {
        &self.game
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn play_state(&self) -> PlayState<'_> {
        PlayState {
            cursor: self.cursor,
            selected: self.selected,
            hint: self.hint,
            moves: self.game.moves_made(),
            last_chain: self.last_chain,
            status: &self.status,
        }
    }

    pub fn apply(&mut self, action: PlayerAction) -> Result<(), BoardError> {
        if let Some((d_row, d_col)) = action.cursor_delta() {
            self.move_cursor(d_row, d_col);
            return Ok(());
        }
        match action {
            PlayerAction::Select => self.select()?,
            PlayerAction::Cancel => {
                self.selected = None;
                self.status.clear();
            }
            PlayerAction::Hint => {
                self.hint = self.game.hint();
                self.status = match self.hint {
                    Some(_) => "try the highlighted pair".to_string(),
                    None => "no moves left, press r".to_string(),
                };
            }
            PlayerAction::Restart => {
                self.game.reset()?;
                self.selected = None;
                self.hint = None;
                self.last_chain = 0;
                self.status = "new board".to_string();
                self.check_stuck();
            }
            _ => {}
        }
        Ok(())
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let board = self.game.board();
        let max_row = board.height() as i32 - 1;
        let max_col = board.width() as i32 - 1;
        let next = self.cursor.offset(d_row, d_col);
        self.cursor = Position::new(next.row.clamp(0, max_row), next.col.clamp(0, max_col));
    }

    fn select(&mut self) -> Result<(), BoardError> {
        let Some(first) = self.selected.take() else {
            self.selected = Some(self.cursor);
            self.status.clear();
            return Ok(());
        };
        if first == self.cursor {
            return Ok(());
        }

        let result = self.game.apply_move(first, self.cursor)?;
        if result.is_noop() {
            self.status = "no match".to_string();
            return Ok(());
        }

        let mut counter = EffectCounter::new();
        notify(&result.effects, &mut counter);
        self.hint = None;
        self.last_chain = counter.refills;
        self.status = format!("{} matched", counter.matched_cells);
        debug!(
            matches = counter.matches,
            chain = counter.refills,
            "player move"
        );
        self.check_stuck();
        Ok(())
    }

    fn check_stuck(&mut self) {
        if !self.game.has_legal_move() {
            self.status = "no moves left, press r".to_string();
        }
    }
}
