//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is either occupied by
//! a piece or empty. Cells live in one flat vector for cache locality.
//! Coordinates: `(row, col)` where row 0 is the top and col 0 the left edge;
//! the flat index is `col + row * width`.
//!
//! The board is the only owner of its cells. Every mutation goes through
//! [`Board::set`], [`Board::swap`], [`Board::apply_gravity`] or
//! [`Board::fill_top_row`], so `cells.len() == width * height` always holds.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::error::{BoardError, Result};
use crate::source::PieceSource;
use crate::types::{Cell, Position};

/// The game board, stored row-major in a flat vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board<P> {
    width: usize,
    height: usize,
    cells: Vec<Cell<P>>,
}

impl<P> Board<P> {
    /// Fill a new `width x height` board from `source`, one call per cell in
    /// row-major order.
    pub fn create<S>(source: &mut S, width: usize, height: usize) -> Result<Self>
    where
        S: PieceSource<P> + ?Sized,
    {
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for _ in 0..width * height {
            cells.push(Cell::Occupied(source.next_piece()?));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a board from an explicit row-major cell vector.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell<P>>) -> Result<Self> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(BoardError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a fully occupied board from rows of pieces, top row first.
    pub fn from_rows(rows: Vec<Vec<P>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, pieces) in rows.into_iter().enumerate() {
            if pieces.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    actual: pieces.len(),
                });
            }
            cells.extend(pieces.into_iter().map(Cell::Occupied));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell<P>] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell<P>]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Flat index for `pos`, or `None` if it lies outside the board.
    #[inline]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(col + row * self.width)
    }

    /// Position of a flat index. The index is not range-checked.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.width) as i32, (index % self.width) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Piece at `pos`; `None` when out of range or empty.
    pub fn at(&self, pos: Position) -> Option<&P> {
        self.cell(pos).and_then(Cell::piece)
    }

    /// Cell at `pos`; `None` when out of range.
    pub fn cell(&self, pos: Position) -> Option<&Cell<P>> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    #[inline]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> &Cell<P> {
        &self.cells[col + row * self.width]
    }

    /// Write a cell. Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell<P>) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Empty a cell. Clearing an already empty cell is a no-op.
    pub fn clear(&mut self, pos: Position) -> bool {
        self.set(pos, Cell::Empty)
    }

    /// Exchange two cells in place. Returns false (and changes nothing) if
    /// either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Cell::is_occupied)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |idx| self.position_of(idx))
    }

    /// In-range orthogonal neighbours of `pos`: up, left, right, down.
    pub fn neighbours(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        if !self.contains(pos) {
            return out;
        }
        for (d_row, d_col) in [(-1, 0), (0, -1), (0, 1), (1, 0)] {
            let next = pos.offset(d_row, d_col);
            if self.contains(next) {
                out.push(next);
            }
        }
        out
    }

    /// Compact every column downward.
    ///
    /// Each column is scanned bottom to top; every piece drops to the lowest
    /// free slot below it. Relative top-to-bottom order of pieces inside a
    /// column is preserved and all empty cells end up at the top.
    ///
    /// Returns the number of pieces that moved.
    pub fn apply_gravity(&mut self) -> usize {
        let mut moved = 0;
        for col in 0..self.width {
            let mut write_row = self.height;
            for read_row in (0..self.height).rev() {
                let read = col + read_row * self.width;
                if self.cells[read].is_empty() {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    // Everything between read and write is empty, so swapping
                    // carries the piece down and the hole up.
                    self.cells.swap(read, col + write_row * self.width);
                    moved += 1;
                }
            }
        }
        moved
    }

    /// Fill every empty cell in the top row from `source`, left to right.
    ///
    /// Returns the number of pieces drawn.
    pub fn fill_top_row<S>(&mut self, source: &mut S) -> Result<usize>
    where
        S: PieceSource<P> + ?Sized,
    {
        let mut drawn = 0;
        for cell in &mut self.cells[..self.width] {
            if cell.is_empty() {
                *cell = Cell::Occupied(source.next_piece()?);
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(BoardError::InvalidDimensions { width, height });
    }
    Ok(())
}
