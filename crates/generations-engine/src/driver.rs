//! Real-time driver.
//!
//! Waits `tick_interval_ms` between generations and stops on a verdict, on
//! the generation limit, or when the shutdown future resolves.

use std::future::Future;

use generations_core::config::RunConfig;
use generations_core::runner::{EndReason, SimulationResult, TickCallback, end_reason_after};
use generations_core::simulation::{Simulation, SimulationError, TickSummary};
use tokio::time::{Duration, sleep};
use tracing::info;

/// Run `sim` at the cadence in `settings` until it ends.
///
/// The wait comes before each tick, so the seed board stays on screen for a
/// full interval. An interval of 0 runs as fast as the runtime allows.
///
/// # Errors
///
/// Returns [`SimulationError`] if a tick fails.
pub async fn run_paced<F>(
    sim: &mut Simulation,
    settings: &RunConfig,
    callback: &mut dyn TickCallback,
    shutdown: F,
) -> Result<SimulationResult, SimulationError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    info!(
        run_id = %sim.run_id(),
        tick_interval_ms = settings.tick_interval_ms,
        max_generations = settings.max_generations,
        "Simulation starting"
    );

    loop {
        let interval_ms = settings.tick_interval_ms;
        let pause = async move {
            if interval_ms > 0 {
                sleep(Duration::from_millis(interval_ms)).await;
            } else {
                tokio::task::yield_now().await;
            }
        };

        tokio::select! {
            biased;
            () = &mut shutdown => {
                info!(generation = sim.generation(), "Stop requested");
                return Ok(SimulationResult {
                    end_reason: EndReason::Interrupted,
                    final_summary: last_summary,
                    total_ticks,
                });
            }
            () = pause => {}
        }

        let summary = sim.tick()?;
        total_ticks = total_ticks.saturating_add(1);

        callback.on_tick(&summary, sim.board());

        if let Some(end_reason) = end_reason_after(&summary, settings.max_generations) {
            return Ok(SimulationResult {
                end_reason,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);
    }
}
