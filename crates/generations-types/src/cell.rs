//! Cell state and its lifecycle stage.
//!
//! A cell is either empty, alive (newborn or a survivor of some age tier),
//! or dead. Dead is transient: it only exists while a generation is being
//! computed and is collapsed to empty before a board leaves the engine.
//!
//! # Invariant
//!
//! `age_in_generations > 0` exactly when the stage is [`Stage::NewBorn`] or
//! [`Stage::Survivor`]. The constructors on [`Cell`] are the only way to
//! build a cell in code, so the invariant holds by construction. Cells that
//! arrive through deserialization can be checked with [`Cell::is_consistent`].

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age tier of a surviving cell, ordered from youngest to oldest.
///
/// The tier is a presentation concern derived from age. It never affects
/// whether a cell lives or dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SurvivorTier {
    /// Recently born, still small.
    Young,
    /// Grown up.
    Adult,
    /// Getting on in years.
    Elder,
    /// The highest tier. Wizardhood.
    Ancient,
}

impl SurvivorTier {
    /// All tiers, youngest first.
    pub const ALL: [Self; 4] = [Self::Young, Self::Adult, Self::Elder, Self::Ancient];

    /// Derive the tier for a cell of the given age.
    ///
    /// Each threshold is an inclusive upper bound. Thresholds that are not
    /// ascending are not rejected; the first bound the age fits under wins.
    pub const fn for_age(age: u32, thresholds: &AgeThresholds) -> Self {
        if age <= thresholds.young_max {
            Self::Young
        } else if age <= thresholds.adult_max {
            Self::Adult
        } else if age <= thresholds.elder_max {
            Self::Elder
        } else {
            Self::Ancient
        }
    }

    /// Whether this is the highest tier a cell can reach.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ancient)
    }
}

/// Inclusive upper age bounds for each [`SurvivorTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AgeThresholds {
    /// Oldest age still counted as [`SurvivorTier::Young`].
    #[serde(default = "default_young_max")]
    pub young_max: u32,

    /// Oldest age still counted as [`SurvivorTier::Adult`].
    #[serde(default = "default_adult_max")]
    pub adult_max: u32,

    /// Oldest age still counted as [`SurvivorTier::Elder`]. Anything older
    /// is [`SurvivorTier::Ancient`].
    #[serde(default = "default_elder_max")]
    pub elder_max: u32,
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self {
            young_max: default_young_max(),
            adult_max: default_adult_max(),
            elder_max: default_elder_max(),
        }
    }
}

const fn default_young_max() -> u32 {
    5
}

const fn default_adult_max() -> u32 {
    10
}

const fn default_elder_max() -> u32 {
    15
}

/// Lifecycle stage of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Nothing lives here.
    Empty,
    /// Born this generation.
    NewBorn,
    /// Alive for more than one generation.
    Survivor(SurvivorTier),
    /// Died this generation. Never observed outside the evolution step.
    Dead,
}

impl Stage {
    /// Whether a cell in this stage counts as alive.
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::NewBorn | Self::Survivor(_))
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Cell {
    /// Current lifecycle stage.
    stage: Stage,

    /// Number of generations this cell has been alive (0 when not alive).
    age_in_generations: u32,
}

impl Cell {
    /// A freshly born cell: [`Stage::NewBorn`], age 1.
    pub const fn new_born() -> Self {
        Self {
            stage: Stage::NewBorn,
            age_in_generations: 1,
        }
    }

    /// An empty cell: [`Stage::Empty`], age 0.
    pub const fn empty() -> Self {
        Self {
            stage: Stage::Empty,
            age_in_generations: 0,
        }
    }

    /// A cell that died this generation: [`Stage::Dead`], age 0.
    pub const fn dead() -> Self {
        Self {
            stage: Stage::Dead,
            age_in_generations: 0,
        }
    }

    /// A surviving cell of the given age and tier.
    pub const fn survivor(age: NonZeroU32, tier: SurvivorTier) -> Self {
        Self {
            stage: Stage::Survivor(tier),
            age_in_generations: age.get(),
        }
    }

    /// The cell's lifecycle stage.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Generations this cell has been alive.
    pub const fn age_in_generations(&self) -> u32 {
        self.age_in_generations
    }

    /// Whether the cell is alive (newborn or survivor).
    pub const fn is_alive(&self) -> bool {
        self.stage.is_alive()
    }

    /// The tier a renderer should draw this cell as.
    ///
    /// Newborns draw as [`SurvivorTier::Young`]. Empty and dead cells have
    /// no tier.
    pub const fn presentation_tier(&self) -> Option<SurvivorTier> {
        match self.stage {
            Stage::NewBorn => Some(SurvivorTier::Young),
            Stage::Survivor(tier) => Some(tier),
            Stage::Empty | Stage::Dead => None,
        }
    }

    /// Whether the stage and age agree with each other.
    pub const fn is_consistent(&self) -> bool {
        self.stage.is_alive() == (self.age_in_generations > 0)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// Whether the cell at a possibly missing position is alive.
///
/// Positions off the board come through as `None` and count as not alive.
pub fn is_alive(cell: Option<&Cell>) -> bool {
    cell.is_some_and(Cell::is_alive)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn age(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn constructors_respect_age_invariant() {
        assert_eq!(Cell::new_born().age_in_generations(), 1);
        assert_eq!(Cell::empty().age_in_generations(), 0);
        assert_eq!(Cell::dead().age_in_generations(), 0);
        assert!(Cell::new_born().is_consistent());
        assert!(Cell::empty().is_consistent());
        assert!(Cell::dead().is_consistent());
        assert!(Cell::survivor(age(7), SurvivorTier::Adult).is_consistent());
    }

    #[test]
    fn only_newborns_and_survivors_are_alive() {
        assert!(Cell::new_born().is_alive());
        assert!(Cell::survivor(age(2), SurvivorTier::Young).is_alive());
        assert!(!Cell::empty().is_alive());
        assert!(!Cell::dead().is_alive());
    }

    #[test]
    fn missing_cell_is_not_alive() {
        assert!(!is_alive(None));
        assert!(is_alive(Some(&Cell::new_born())));
        assert!(!is_alive(Some(&Cell::dead())));
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        let t = AgeThresholds::default();
        assert_eq!(SurvivorTier::for_age(1, &t), SurvivorTier::Young);
        assert_eq!(SurvivorTier::for_age(5, &t), SurvivorTier::Young);
        assert_eq!(SurvivorTier::for_age(6, &t), SurvivorTier::Adult);
        assert_eq!(SurvivorTier::for_age(10, &t), SurvivorTier::Adult);
        assert_eq!(SurvivorTier::for_age(11, &t), SurvivorTier::Elder);
        assert_eq!(SurvivorTier::for_age(15, &t), SurvivorTier::Elder);
        assert_eq!(SurvivorTier::for_age(16, &t), SurvivorTier::Ancient);
        assert_eq!(SurvivorTier::for_age(u32::MAX, &t), SurvivorTier::Ancient);
    }

    #[test]
    fn custom_thresholds_shift_tiers() {
        let t = AgeThresholds {
            young_max: 1,
            adult_max: 2,
            elder_max: 3,
        };
        assert_eq!(SurvivorTier::for_age(2, &t), SurvivorTier::Adult);
        assert_eq!(SurvivorTier::for_age(4, &t), SurvivorTier::Ancient);
    }

    #[test]
    fn unordered_thresholds_do_not_fail() {
        let t = AgeThresholds {
            young_max: 10,
            adult_max: 2,
            elder_max: 3,
        };
        assert_eq!(SurvivorTier::for_age(8, &t), SurvivorTier::Young);
        assert_eq!(SurvivorTier::for_age(11, &t), SurvivorTier::Ancient);
    }

    #[test]
    fn presentation_tier_maps_newborn_to_young() {
        assert_eq!(
            Cell::new_born().presentation_tier(),
            Some(SurvivorTier::Young)
        );
        assert_eq!(
            Cell::survivor(age(20), SurvivorTier::Ancient).presentation_tier(),
            Some(SurvivorTier::Ancient)
        );
        assert_eq!(Cell::empty().presentation_tier(), None);
        assert_eq!(Cell::dead().presentation_tier(), None);
    }

    #[test]
    fn only_ancient_is_terminal() {
        assert!(SurvivorTier::Ancient.is_terminal());
        assert!(!SurvivorTier::Elder.is_terminal());
        assert!(!SurvivorTier::Young.is_terminal());
    }

    #[test]
    fn inconsistent_cell_is_detected() {
        let json = r#"{"stage":"empty","age_in_generations":3}"#;
        let cell: Cell = serde_json::from_str(json).unwrap();
        assert!(!cell.is_consistent());
    }

    #[test]
    fn cell_serializes_with_snake_case_stage() {
        let cell = Cell::survivor(age(12), SurvivorTier::Elder);
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"stage":{"survivor":"elder"},"age_in_generations":12}"#);
    }

    #[test]
    fn thresholds_fill_missing_fields_with_defaults() {
        let t: AgeThresholds = serde_json::from_str(r#"{"adult_max":20}"#).unwrap();
        assert_eq!(t.young_max, 5);
        assert_eq!(t.adult_max, 20);
        assert_eq!(t.elder_max, 15);
    }
}
