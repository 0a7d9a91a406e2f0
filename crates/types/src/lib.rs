//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the workspace.
//! They carry no game logic, making them usable in any context (rules engine,
//! terminal rendering, JSON traces).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs, zero-based, with row 0 at the top of the
//! board. Both components are signed so that a position one step off the
//! board is still representable; the board rejects it on lookup.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 8 | Columns on a fresh board |
//! | `DEFAULT_HEIGHT` | 8 | Rows on a fresh board |
//! | `DEFAULT_KINDS` | 6 | Gem kinds drawn by the random source |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Cell, Gem, Position};
//!
//! let a = Position::new(2, 3);
//! let b = Position::new(2, 5);
//! assert!(a.is_aligned_with(b));
//! assert!(!a.is_adjacent_to(b));
//!
//! let cell = Cell::Occupied(Gem::Ruby);
//! assert_eq!(cell.piece(), Some(&Gem::Ruby));
//! assert!(Cell::<Gem>::Empty.is_empty());
//!
//! assert_eq!(Gem::from_str("topaz"), Some(Gem::Topaz));
//! ```

use serde::{Deserialize, Serialize};

/// Board width used when nothing else is configured
pub const DEFAULT_WIDTH: usize = 8;

/// Board height used when nothing else is configured
pub const DEFAULT_HEIGHT: usize = 8;

/// Number of distinct gems the random source draws from by default
pub const DEFAULT_KINDS: usize = 6;

/// Shortest run of equal pieces that is reported as a match
pub const MIN_MATCH_LEN: usize = 3;

/// A zero-based grid coordinate.
///
/// Positions have no intrinsic validity; range checks happen on board lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True when both positions lie on the same row or the same column.
    ///
    /// A position is aligned with itself.
    pub fn is_aligned_with(&self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// True when the positions are orthogonal neighbours (distance exactly 1).
    pub fn is_adjacent_to(&self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Offset this position by `(d_row, d_col)`.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Position {
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

/// One board location: either a piece or nothing.
///
/// `Empty` is the engine's own marker for a cleared cell. It is never a piece
/// value, so a piece source cannot produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell<P> {
    Occupied(P),
    Empty,
}

impl<P> Cell<P> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Borrow the piece stored in this cell, if any.
    pub fn piece(&self) -> Option<&P> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    /// Take the piece out, leaving the cell empty.
    pub fn take(&mut self) -> Option<P> {
        match std::mem::replace(self, Cell::Empty) {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty => None,
        }
    }
}

impl<P> Default for Cell<P> {
    fn default() -> Self {
        Cell::Empty
    }
}

impl<P> From<P> for Cell<P> {
    fn from(piece: P) -> Self {
        Cell::Occupied(piece)
    }
}

impl<P> From<Option<P>> for Cell<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }
}

/// A maximal run of at least [`MIN_MATCH_LEN`] equal pieces found in a single
/// row or column.
///
/// Positions are in discovery order: left to right for row runs, top to
/// bottom for column runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match<P> {
    pub matched: P,
    pub positions: Vec<Position>,
}

impl<P> Match<P> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// The gem kinds used by the playable game.
///
/// The engine itself is generic over the piece type; `Gem` is what the
/// random source, the terminal view and the JSON trace work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gem {
    Ruby,
    Emerald,
    Sapphire,
    Topaz,
    Amethyst,
    Pearl,
}

impl Gem {
    /// Every gem, in draw order. The random source uses a prefix of this.
    pub const ALL: [Gem; 6] = [
        Gem::Ruby,
        Gem::Emerald,
        Gem::Sapphire,
        Gem::Topaz,
        Gem::Amethyst,
        Gem::Pearl,
    ];

    /// Parse gem from string (case-insensitive, full name or initial)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Gem;
    ///
    /// assert_eq!(Gem::from_str("Ruby"), Some(Gem::Ruby));
    /// assert_eq!(Gem::from_str("e"), Some(Gem::Emerald));
    /// assert_eq!(Gem::from_str("opal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" | "r" => Some(Gem::Ruby),
            "emerald" | "e" => Some(Gem::Emerald),
            "sapphire" | "s" => Some(Gem::Sapphire),
            "topaz" | "t" => Some(Gem::Topaz),
            "amethyst" | "a" => Some(Gem::Amethyst),
            "pearl" | "p" => Some(Gem::Pearl),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gem::Ruby => "ruby",
            Gem::Emerald => "emerald",
            Gem::Sapphire => "sapphire",
            Gem::Topaz => "topaz",
            Gem::Amethyst => "amethyst",
            Gem::Pearl => "pearl",
        }
    }

    /// Single-character symbol for plain-text board dumps.
    pub fn symbol(&self) -> char {
        match self {
            Gem::Ruby => 'R',
            Gem::Emerald => 'E',
            Gem::Sapphire => 'S',
            Gem::Topaz => 'T',
            Gem::Amethyst => 'A',
            Gem::Pearl => 'P',
        }
    }
}

/// Player actions in the interactive frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Pick the cell under the cursor, or swap with the picked cell
    Select,
    /// Drop the current pick
    Cancel,
    Hint,
    Restart,
}

impl PlayerAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(PlayerAction::CursorUp),
            "down" => Some(PlayerAction::CursorDown),
            "left" => Some(PlayerAction::CursorLeft),
            "right" => Some(PlayerAction::CursorRight),
            "select" => Some(PlayerAction::Select),
            "cancel" => Some(PlayerAction::Cancel),
            "hint" => Some(PlayerAction::Hint),
            "restart" => Some(PlayerAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::CursorUp => "up",
            PlayerAction::CursorDown => "down",
            PlayerAction::CursorLeft => "left",
            PlayerAction::CursorRight => "right",
            PlayerAction::Select => "select",
            PlayerAction::Cancel => "cancel",
            PlayerAction::Hint => "hint",
            PlayerAction::Restart => "restart",
        }
    }

    /// Cursor offset as `(d_row, d_col)` for the four cursor actions.
    pub fn cursor_delta(&self) -> Option<(i32, i32)> {
        match self {
            PlayerAction::CursorUp => Some((-1, 0)),
            PlayerAction::CursorDown => Some((1, 0)),
            PlayerAction::CursorLeft => Some((0, -1)),
            PlayerAction::CursorRight => Some((0, 1)),
            _ => None,
        }
    }
}
