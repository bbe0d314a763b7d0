//! Shared type definitions for the Generations life engine.
//!
//! These are the value types that cross the boundary between the engine and
//! whatever drives and renders it. Types flow downstream to `TypeScript` via
//! `ts-rs` so a browser front end can consume boards and verdicts directly.
//!
//! # Modules
//!
//! - [`cell`] -- Cells, lifecycle stages, survivor tiers, and age thresholds
//! - [`ids`] -- Type-safe UUID wrapper for run identifiers
//! - [`verdict`] -- Evolution modes and termination verdicts

pub mod cell;
pub mod ids;
pub mod verdict;

// Re-export all public types at crate root for convenience.
pub use cell::{AgeThresholds, Cell, Stage, SurvivorTier, is_alive};
pub use ids::RunId;
pub use verdict::{EvolutionMode, Termination, TerminationReason, Verdict};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. The files are written to the `bindings/`
        // directory relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::RunId::export_all();

        let _ = crate::cell::SurvivorTier::export_all();
        let _ = crate::cell::AgeThresholds::export_all();
        let _ = crate::cell::Stage::export_all();
        let _ = crate::cell::Cell::export_all();

        let _ = crate::verdict::EvolutionMode::export_all();
        let _ = crate::verdict::TerminationReason::export_all();
        let _ = crate::verdict::Termination::export_all();
        let _ = crate::verdict::Verdict::export_all();
    }
}
