//! Board factory: randomly seeded starting boards.
//!
//! Each cell is seeded independently: a uniform draw in `[0, 1)` below the
//! life chance makes it a newborn, anything else leaves it empty. The random
//! source is always passed in so runs can be reproduced from a seed.

use generations_types::Cell;
use rand::Rng;

use crate::board::Board;
use crate::error::BoardError;

/// Probability that a seeded cell starts alive.
pub const CHANCE_OF_LIFE: f64 = 0.3;

/// Side length used when no size is configured.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Create a `size x size` board seeded with [`CHANCE_OF_LIFE`].
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimension`] if `size` is 0.
pub fn create_board(size: usize, rng: &mut impl Rng) -> Result<Board, BoardError> {
    create_board_with_chance(size, CHANCE_OF_LIFE, rng)
}

/// Create a [`DEFAULT_BOARD_SIZE`] board seeded with [`CHANCE_OF_LIFE`].
///
/// # Errors
///
/// Never fails in practice; the default size is positive.
pub fn create_default_board(rng: &mut impl Rng) -> Result<Board, BoardError> {
    create_board(DEFAULT_BOARD_SIZE, rng)
}

/// Create a `size x size` board where each cell is alive with probability
/// `chance`.
///
/// `chance` is clamped to `[0, 1]`; a NaN chance seeds nothing.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimension`] if `size` is 0.
pub fn create_board_with_chance(
    size: usize,
    chance: f64,
    rng: &mut impl Rng,
) -> Result<Board, BoardError> {
    let chance = chance.clamp(0.0, 1.0);
    let mut board = Board::empty(size)?;
    for (x, y) in board.coordinates() {
        if rng.random::<f64>() < chance {
            board.set(x, y, Cell::new_born())?;
        }
    }
    Ok(board)
}

/// Create a `size x size` board with every cell empty.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimension`] if `size` is 0.
pub fn create_empty_board(size: usize) -> Result<Board, BoardError> {
    Board::empty(size)
}
