//! Evolution modes and the verdicts the termination detector hands back.

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What "done" means for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EvolutionMode {
    /// Plain life/death convergence. Only whether a cell is alive is
    /// compared between generations.
    Population,
    /// Full-stage convergence. A run is only judged stable once every living
    /// cell has reached the highest tier, and comparisons include the stage.
    #[default]
    Wizardhood,
}

impl EvolutionMode {
    /// Whether history comparisons carry each living cell's stage.
    pub const fn tracks_stage_identity(self) -> bool {
        matches!(self, Self::Wizardhood)
    }
}

/// Why a run stopped evolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TerminationReason {
    /// No living cell is left.
    Extinction,
    /// The board equals the previous generation.
    Stability,
    /// The board equals the generation before the previous one.
    InfiniteLoop,
}

/// A terminal verdict: the reason plus the context needed to phrase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Termination {
    /// Why evolution stopped.
    pub reason: TerminationReason,
    /// Generation number of the board that triggered the verdict.
    pub generation: u64,
    /// Mode the run was evaluated in.
    pub mode: EvolutionMode,
}

impl Termination {
    /// Human-readable message for the verdict.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.generation;
        match (self.reason, self.mode) {
            (TerminationReason::Extinction, _) => {
                write!(f, "everyone died out after {n} generations")
            }
            (TerminationReason::Stability, EvolutionMode::Population) => {
                write!(f, "evolution reached stability after {n} generations")
            }
            (TerminationReason::Stability, EvolutionMode::Wizardhood) => {
                write!(f, "complete wizardhood achieved after {n} generations")
            }
            (TerminationReason::InfiniteLoop, _) => {
                write!(f, "evolution is stuck in an infinite loop after {n} generations")
            }
        }
    }
}

/// Result of evaluating one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Verdict {
    /// Keep ticking.
    Continue,
    /// Evolution is over.
    Done(Termination),
}

impl Verdict {
    /// Whether the run should stop.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The termination, if evolution is over.
    pub const fn termination(&self) -> Option<Termination> {
        match self {
            Self::Continue => None,
            Self::Done(termination) => Some(*termination),
        }
    }
}
