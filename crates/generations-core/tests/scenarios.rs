//! Whole-run scenarios for well-known patterns.
//!
//! Each test seeds a board by hand, then drives it through
//! [`Simulation::tick`] or [`run_to_completion`] and checks the verdict the
//! termination detector reaches.

#![allow(clippy::unwrap_used)]

use generations_core::board::Board;
use generations_core::evolution::step;
use generations_core::history::{HistoryWindow, evaluate};
use generations_core::runner::{EndReason, NoOpCallback, run_to_completion};
use generations_core::simulation::Simulation;
use generations_types::{AgeThresholds, Cell, EvolutionMode, SurvivorTier, TerminationReason};

const BLOCK: [(usize, usize); 4] = [(1, 1), (2, 1), (1, 2), (2, 2)];
const BLINKER: [(usize, usize); 3] = [(2, 1), (2, 2), (2, 3)];
const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn board_with(size: usize, alive: &[(usize, usize)]) -> Board {
    Board::empty(size)
        .unwrap()
        .with_cells(alive, Cell::new_born())
        .unwrap()
}

fn alive_set(board: &Board) -> Vec<(usize, usize)> {
    let mut alive: Vec<_> = board
        .iter()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(coord, _)| coord)
        .collect();
    alive.sort_unstable();
    alive
}

#[allow(clippy::arithmetic_side_effects)]
fn shifted(cells: &[(usize, usize)], by: usize) -> Vec<(usize, usize)> {
    let mut out: Vec<_> = cells.iter().map(|&(x, y)| (x + by, y + by)).collect();
    out.sort_unstable();
    out
}

#[test]
fn lone_cell_dies_out() {
    let seed = board_with(3, &[(1, 1)]);
    let next = step(&seed);
    assert!(!next.has_life());

    let history = HistoryWindow::primed(&seed, EvolutionMode::Population);
    let evaluation = evaluate(&next, history, 1, EvolutionMode::Population);
    let termination = evaluation.verdict.termination().unwrap();
    assert_eq!(termination.reason, TerminationReason::Extinction);
    assert_eq!(termination.message(), "everyone died out after 1 generations");
    // Extinction leaves the window as it was.
    assert_eq!(evaluation.history.len(), 1);
}

#[test]
fn block_stays_stable() {
    let mut sim = Simulation::new(
        board_with(4, &BLOCK),
        EvolutionMode::Population,
        AgeThresholds::default(),
    );

    for generation in 1..=2 {
        let summary = sim.tick().unwrap();
        let termination = summary.verdict.termination().unwrap();
        assert_eq!(termination.reason, TerminationReason::Stability);
        assert_eq!(termination.generation, generation);
        assert_eq!(alive_set(sim.board()), shifted(&BLOCK, 0));
    }
}

#[test]
fn blinker_is_caught_looping() {
    let mut sim = Simulation::new(
        board_with(5, &BLINKER),
        EvolutionMode::Population,
        AgeThresholds::default(),
    );
    let result = run_to_completion(&mut sim, 0, &mut NoOpCallback).unwrap();

    let EndReason::Terminated(termination) = result.end_reason else {
        panic!("expected a verdict, got {:?}", result.end_reason);
    };
    assert_eq!(termination.reason, TerminationReason::InfiniteLoop);
    assert_eq!(termination.generation, 2);
    assert_eq!(
        termination.message(),
        "evolution is stuck in an infinite loop after 2 generations"
    );
}

#[test]
fn glider_travels_diagonally() {
    let mut board = board_with(10, &GLIDER);
    for _ in 0..4 {
        board = step(&board);
    }
    assert_eq!(alive_set(&board), shifted(&GLIDER, 1));
}

#[test]
fn glider_settles_against_the_corner() {
    // No wrap-around: the glider runs into the far corner and stops moving.
    let mut sim = Simulation::new(
        board_with(8, &GLIDER),
        EvolutionMode::Population,
        AgeThresholds::default(),
    );
    let result = run_to_completion(&mut sim, 200, &mut NoOpCallback).unwrap();
    assert!(
        matches!(result.end_reason, EndReason::Terminated(_)),
        "glider never settled: {:?}",
        result.end_reason
    );
}

#[test]
fn block_reaches_wizardhood() {
    let mut sim = Simulation::new(
        board_with(4, &BLOCK),
        EvolutionMode::Wizardhood,
        AgeThresholds::default(),
    );
    let result = run_to_completion(&mut sim, 0, &mut NoOpCallback).unwrap();

    // Newborns start at age 1, so every cell turns ancient (age 16) at
    // generation 15 and generation 16 is the first repeat.
    let EndReason::Terminated(termination) = result.end_reason else {
        panic!("expected a verdict, got {:?}", result.end_reason);
    };
    assert_eq!(termination.reason, TerminationReason::Stability);
    assert_eq!(termination.generation, 16);
    assert_eq!(
        termination.message(),
        "complete wizardhood achieved after 16 generations"
    );
    assert!(
        sim.board()
            .cells()
            .iter()
            .filter(|cell| cell.is_alive())
            .all(|cell| cell.presentation_tier() == Some(SurvivorTier::Ancient))
    );
    assert_eq!(result.final_summary.unwrap().census.ancient, 4);
}

#[test]
fn wizardhood_blinker_never_settles() {
    // The blinker's end cells are newborns every generation.
    let mut sim = Simulation::new(
        board_with(5, &BLINKER),
        EvolutionMode::Wizardhood,
        AgeThresholds::default(),
    );
    let result = run_to_completion(&mut sim, 40, &mut NoOpCallback).unwrap();
    assert_eq!(result.end_reason, EndReason::GenerationLimit);
    assert_eq!(result.total_ticks, 40);
}
