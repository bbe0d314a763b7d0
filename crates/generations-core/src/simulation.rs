//! The state a driver threads from one tick to the next.
//!
//! [`Simulation`] owns exactly two pieces of cross-tick state, the current
//! [`Board`] and the [`HistoryWindow`], plus the generation counter and the
//! run's settings. Each [`Simulation::tick`] is one [`step_with`] followed
//! by one [`evaluate`]; both are pure, so all mutation happens here.
//!
//! The history window is primed with the starting board, so a seed that is
//! already a still life is recognized when generation 1 is evaluated.

use generations_types::{AgeThresholds, EvolutionMode, RunId, Stage, Verdict};
use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::census::Census;
use crate::config::SimulationConfig;
use crate::error::BoardError;
use crate::evolution::step_with;
use crate::factory::create_board_with_chance;
use crate::history::{HistoryWindow, Snapshot, evaluate};

/// Errors that can occur while advancing a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// Generation counter would overflow.
    #[error("generation counter overflow: cannot advance beyond u64::MAX")]
    GenerationOverflow,

    /// The starting board could not be built.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

/// Summary of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummary {
    /// The run this tick belongs to.
    pub run_id: RunId,
    /// Generation number of the board produced by this tick.
    pub generation: u64,
    /// Counts for the new board.
    pub census: Census,
    /// Cells born this tick.
    pub births: u32,
    /// Cells that were alive before this tick and are not alive after it.
    pub deaths: u32,
    /// What the termination detector made of the new board.
    pub verdict: Verdict,
}

/// A single simulation run: board, history, and settings.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Identifier of the current run.
    run_id: RunId,
    /// Board for the current generation.
    board: Board,
    /// Up to two previous generations, reduced for comparison.
    history: HistoryWindow,
    /// Generation number of `board` (0 = the seed).
    generation: u64,
    /// How termination is judged.
    mode: EvolutionMode,
    /// Age bounds for survivor tiers.
    thresholds: AgeThresholds,
}

impl Simulation {
    /// Start a run from an explicit board.
    pub fn new(board: Board, mode: EvolutionMode, thresholds: AgeThresholds) -> Self {
        let history = HistoryWindow::primed(&board, mode);
        let run_id = RunId::new();
        info!(
            run_id = %run_id,
            width = board.width(),
            height = board.height(),
            population = board.population(),
            mode = ?mode,
            "Simulation run started"
        );
        Self {
            run_id,
            board,
            history,
            generation: 0,
            mode,
            thresholds,
        }
    }

    /// Start a run on a freshly seeded board described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Board`] if the configured size is 0.
    pub fn from_config(
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, SimulationError> {
        let board = create_board_with_chance(config.board.size, config.board.life_chance, rng)?;
        Ok(Self::new(
            board,
            config.evolution.mode,
            config.evolution.thresholds,
        ))
    }

    /// Advance one generation and judge it.
    ///
    /// Ticking after a terminal verdict is allowed and simply keeps
    /// evaluating; stopping is the driver's call.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::GenerationOverflow`] if the generation
    /// counter would exceed `u64::MAX`.
    pub fn tick(&mut self) -> Result<TickSummary, SimulationError> {
        let generation = self
            .generation
            .checked_add(1)
            .ok_or(SimulationError::GenerationOverflow)?;

        let next = step_with(&self.board, &self.thresholds);
        let (births, deaths) = births_and_deaths(&self.board, &next);

        let history = std::mem::take(&mut self.history);
        let evaluation = evaluate(&next, history, generation, self.mode);

        self.board = next;
        self.history = evaluation.history;
        self.generation = generation;

        let summary = TickSummary {
            run_id: self.run_id,
            generation,
            census: Census::of(&self.board),
            births,
            deaths,
            verdict: evaluation.verdict,
        };

        debug!(
            run_id = %self.run_id,
            generation,
            population = summary.census.population,
            short_of_wizardhood = summary.census.short_of_wizardhood(),
            births,
            deaths,
            done = summary.verdict.is_done(),
            "Tick complete"
        );

        Ok(summary)
    }

    /// Throw away the current run and start a new one on `board`.
    ///
    /// Assigns a new [`RunId`], resets the generation counter, and clears
    /// the history window before priming it with `board`.
    pub fn reset(&mut self, board: Board) {
        let previous = self.run_id;
        self.run_id = RunId::new();
        self.history.clear();
        self.history.push(Snapshot::of(&board, self.mode));
        self.board = board;
        self.generation = 0;
        info!(
            previous_run_id = %previous,
            run_id = %self.run_id,
            population = self.board.population(),
            "Simulation reset"
        );
    }

    /// Identifier of the current run.
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Board for the current generation.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Rolling history of the previous generations.
    pub const fn history(&self) -> &HistoryWindow {
        &self.history
    }

    /// Generation number of the current board.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// How termination is judged in this run.
    pub const fn mode(&self) -> EvolutionMode {
        self.mode
    }

    /// Age bounds used for survivor tiers.
    pub const fn thresholds(&self) -> &AgeThresholds {
        &self.thresholds
    }
}

/// Count births (newborns in `next`) and deaths (alive in `prev`, not alive
/// in `next`). Both boards share dimensions.
fn births_and_deaths(prev: &Board, next: &Board) -> (u32, u32) {
    let mut births: u32 = 0;
    let mut deaths: u32 = 0;
    for (before, after) in prev.cells().iter().zip(next.cells()) {
        if after.stage() == Stage::NewBorn {
            births = births.saturating_add(1);
        }
        if before.is_alive() && !after.is_alive() {
            deaths = deaths.saturating_add(1);
        }
    }
    (births, deaths)
}
