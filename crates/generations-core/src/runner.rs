//! Headless run loop.
//!
//! [`run_to_completion`] ticks a [`Simulation`] back to back until the
//! termination detector reports a verdict or a generation limit is hit.
//! It has no notion of wall-clock cadence; a paced driver layers its own
//! timer on top of [`Simulation::tick`] and reuses [`TickCallback`],
//! [`SimulationResult`], and [`log_simulation_end`].

use generations_types::{Termination, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::simulation::{Simulation, SimulationError, TickSummary};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The termination detector reached a verdict.
    Terminated(Termination),
    /// The configured `max_generations` limit was reached first.
    GenerationLimit,
    /// The driver was asked to stop (e.g. Ctrl-C).
    Interrupted,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Why the run ended.
    pub end_reason: EndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
}

/// Callback invoked after each tick completes.
///
/// Implementations render or record the new generation. The callback
/// receives the tick summary and the board it describes.
pub trait TickCallback {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, board: &Board);
}

/// A no-op tick callback.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _board: &Board) {}
}

/// Decide whether the run ends after `summary`.
///
/// `max_generations` of 0 means unlimited. A verdict takes precedence over
/// the limit when both land on the same tick.
pub const fn end_reason_after(summary: &TickSummary, max_generations: u64) -> Option<EndReason> {
    if let Verdict::Done(termination) = summary.verdict {
        return Some(EndReason::Terminated(termination));
    }
    if max_generations > 0 && summary.generation >= max_generations {
        return Some(EndReason::GenerationLimit);
    }
    None
}

/// Tick `sim` until it terminates or reaches `max_generations`.
///
/// # Errors
///
/// Returns [`SimulationError`] if a tick fails.
pub fn run_to_completion(
    sim: &mut Simulation,
    max_generations: u64,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, SimulationError> {
    let mut total_ticks: u64 = 0;

    info!(
        run_id = %sim.run_id(),
        max_generations,
        "Simulation starting"
    );

    loop {
        let summary = sim.tick()?;
        total_ticks = total_ticks.saturating_add(1);

        callback.on_tick(&summary, sim.board());

        if let Some(end_reason) = end_reason_after(&summary, max_generations) {
            return Ok(SimulationResult {
                end_reason,
                final_summary: Some(summary),
                total_ticks,
            });
        }
    }
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    let message = match result.end_reason {
        EndReason::Terminated(termination) => termination.message(),
        EndReason::GenerationLimit => "generation limit reached".to_owned(),
        EndReason::Interrupted => "interrupted".to_owned(),
    };

    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_generation = result.final_summary.as_ref().map(|s| s.generation),
        final_population = result.final_summary.as_ref().map(|s| s.census.population),
        message = %message,
        "Simulation ended"
    );

    if result.final_summary.is_none() {
        warn!("Simulation ended with no ticks executed");
    }
}
