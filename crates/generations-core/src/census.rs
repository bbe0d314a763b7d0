//! Population counts for a board, broken down by presentation tier.

use generations_types::{Stage, SurvivorTier};
use serde::{Deserialize, Serialize};

use crate::board::Board;

/// How many cells of each kind a board holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Living cells of any stage.
    pub population: u32,
    /// Cells born this generation.
    pub newborns: u32,
    /// Survivors in [`SurvivorTier::Young`].
    pub young: u32,
    /// Survivors in [`SurvivorTier::Adult`].
    pub adult: u32,
    /// Survivors in [`SurvivorTier::Elder`].
    pub elder: u32,
    /// Survivors in [`SurvivorTier::Ancient`].
    pub ancient: u32,
}

impl Census {
    /// Count the cells of `board`.
    pub fn of(board: &Board) -> Self {
        let mut census = Self::default();
        for cell in board.cells() {
            let slot = match cell.stage() {
                Stage::Empty | Stage::Dead => continue,
                Stage::NewBorn => &mut census.newborns,
                Stage::Survivor(SurvivorTier::Young) => &mut census.young,
                Stage::Survivor(SurvivorTier::Adult) => &mut census.adult,
                Stage::Survivor(SurvivorTier::Elder) => &mut census.elder,
                Stage::Survivor(SurvivorTier::Ancient) => &mut census.ancient,
            };
            *slot = slot.saturating_add(1);
            census.population = census.population.saturating_add(1);
        }
        census
    }

    /// Living cells that have not yet reached the highest tier.
    pub const fn short_of_wizardhood(&self) -> u32 {
        self.population.saturating_sub(self.ancient)
    }
}
