//! The rectangular board of cells.
//!
//! A [`Board`] has fixed dimensions for its whole lifetime and at least one
//! row and one column. Cells are stored row-major in a single buffer. The
//! only ways to build a board are the validated constructors here (and
//! deserialization, which goes through [`Board::from_rows`]), so every
//! board the engine sees is rectangular. That is what lets
//! [`step`](crate::evolution::step) be infallible.

use core::fmt;

use generations_types::Cell;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// A rectangular grid of cells, addressed as `(x, y)` = (column, row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cells, `width * height` long.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a `width x height` board with every cell set to `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if either side is 0, or
    /// [`BoardError::MalformedBoard`] if the cell count overflows `usize`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, BoardError> {
        if width == 0 {
            return Err(BoardError::InvalidDimension { size: width });
        }
        if height == 0 {
            return Err(BoardError::InvalidDimension { size: height });
        }
        let len = width
            .checked_mul(height)
            .ok_or_else(|| BoardError::MalformedBoard {
                reason: format!("{width} x {height} cells overflow the address space"),
            })?;
        Ok(Self {
            width,
            height,
            cells: vec![cell; len],
        })
    }

    /// Create a `size x size` board of empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimension`] if `size` is 0.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        Self::filled(size, size, Cell::empty())
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedBoard`] if there are no rows, the rows
    /// are empty or ragged, or a cell's age disagrees with its stage.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::MalformedBoard {
                reason: "board has no cells".to_owned(),
            });
        }

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(BoardError::MalformedBoard {
                reason: format!("row {y} has {} cells, expected {width}", row.len()),
            });
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        if let Some(index) = cells.iter().position(|cell| !cell.is_consistent()) {
            let x = index.checked_rem(width).unwrap_or(0);
            let y = index.checked_div(width).unwrap_or(0);
            return Err(BoardError::MalformedBoard {
                reason: format!("cell ({x}, {y}) has an age that contradicts its stage"),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Buffer index of `(x, y)`, or `None` when off the board.
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        y.checked_mul(self.width)?.checked_add(x)
    }

    /// The cell at `(x, y)`, or `None` when off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).and_then(|i| self.cells.get(i))
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOutOfBounds`] if `(x, y)` is off the board.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .index(x, y)
            .and_then(|i| self.cells.get_mut(i))
            .ok_or(BoardError::CellOutOfBounds { x, y })?;
        *slot = cell;
        Ok(())
    }

    /// Set every listed coordinate to `cell`, consuming and returning the
    /// board. Handy for building fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOutOfBounds`] for the first coordinate that
    /// is off the board.
    pub fn with_cells(mut self, coords: &[(usize, usize)], cell: Cell) -> Result<Self, BoardError> {
        for &(x, y) in coords {
            self.set(x, y, cell)?;
        }
        Ok(self)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate over every `(x, y)` coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Iterate over `((x, y), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.coordinates().zip(self.cells.iter())
    }

    /// Build a board of the same dimensions by computing each cell from its
    /// coordinate and the corresponding cell of `self`.
    pub(crate) fn map_cells<F>(&self, mut f: F) -> Self
    where
        F: FnMut((usize, usize), &Cell) -> Cell,
    {
        let cells = self.iter().map(|(coord, cell)| f(coord, cell)).collect();
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether at least one cell is alive.
    pub fn has_life(&self) -> bool {
        self.cells.iter().any(Cell::is_alive)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Cell]>::to_vec).collect()
    }
}

/// Compact text form: `O` for a living cell, `.` otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
