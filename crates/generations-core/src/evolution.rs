//! The evolution step: one generation of Conway's Game of Life with ages.
//!
//! Every next cell is derived from the previous board only, so the order in
//! which cells are visited does not matter. The rules:
//!
//! | current  | live neighbors | next                          |
//! |----------|----------------|-------------------------------|
//! | alive    | < 2 or > 3     | dead (underpopulation / overpopulation) |
//! | alive    | 2 or 3         | survivor, age + 1, tier from new age    |
//! | not alive| exactly 3      | newborn, age 1 (reproduction)           |
//! | not alive| otherwise      | empty                                   |
//!
//! Dead only marks "died this generation" while rules are applied. Before a
//! board is returned every dead cell is collapsed to empty.

use core::num::NonZeroU32;

use generations_types::{AgeThresholds, Cell, Stage, SurvivorTier};

use crate::board::Board;
use crate::neighbors::neighbor_count;

/// Fewest live neighbors a living cell needs to survive.
pub const SURVIVAL_MIN: u8 = 2;

/// Most live neighbors a living cell can have and still survive.
pub const SURVIVAL_MAX: u8 = 3;

/// Exact number of live neighbors that brings an empty cell to life.
pub const BIRTH_COUNT: u8 = 3;

/// Advance `board` by one generation using the default age thresholds.
pub fn step(board: &Board) -> Board {
    step_with(board, &AgeThresholds::default())
}

/// Advance `board` by one generation, staging survivors by `thresholds`.
///
/// Returns a fresh board of the same dimensions; the input is untouched.
pub fn step_with(board: &Board, thresholds: &AgeThresholds) -> Board {
    board.map_cells(|(x, y), cell| {
        let neighbors = neighbor_count(board, x, y);
        normalize(next_cell(cell, neighbors, thresholds))
    })
}

/// Apply the life rules to a single cell given its live-neighbor count.
///
/// May return [`Stage::Dead`]; callers outside this module should go
/// through [`step`] or [`step_with`], which normalize it away.
pub fn next_cell(cell: &Cell, neighbors: u8, thresholds: &AgeThresholds) -> Cell {
    if cell.is_alive() {
        if (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbors) {
            survive(cell, thresholds)
        } else {
            Cell::dead()
        }
    } else if neighbors == BIRTH_COUNT {
        Cell::new_born()
    } else {
        Cell::empty()
    }
}

/// Age a living cell by one generation and restage it.
fn survive(cell: &Cell, thresholds: &AgeThresholds) -> Cell {
    let age = NonZeroU32::new(cell.age_in_generations())
        .unwrap_or(NonZeroU32::MIN)
        .saturating_add(1);
    Cell::survivor(age, SurvivorTier::for_age(age.get(), thresholds))
}

/// Collapse a dead cell to empty. Every other cell passes through.
const fn normalize(cell: Cell) -> Cell {
    match cell.stage() {
        Stage::Dead => Cell::empty(),
        _ => cell,
    }
}
