//! Moore-neighborhood live-neighbor counting.
//!
//! The eight surrounding positions are visited uniformly. Positions that
//! fall off the board simply contribute nothing, so corners and edges need
//! no special casing.

use generations_types::is_alive;

use crate::board::Board;

/// Offsets `(dx, dy)` of the eight Moore neighbors.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the living cells among the eight neighbors of `(x, y)`.
///
/// The cell itself is never counted. Neighbors outside the board count as
/// not alive.
pub fn neighbor_count(board: &Board, x: usize, y: usize) -> u8 {
    let mut count: u8 = 0;
    for (dx, dy) in MOORE_OFFSETS {
        let neighbor = x
            .checked_add_signed(dx)
            .zip(y.checked_add_signed(dy))
            .and_then(|(nx, ny)| board.get(nx, ny));
        if is_alive(neighbor) {
            count = count.saturating_add(1);
        }
    }
    count
}
