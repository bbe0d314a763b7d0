//! Rolling history and termination detection.
//!
//! After every step the driver hands the new board to [`evaluate`] together
//! with the [`HistoryWindow`] it owns. The board is reduced to a
//! [`Snapshot`] that keeps only what matters for equality (alive or not,
//! plus the stage in [`EvolutionMode::Wizardhood`]) and compared against the
//! two previous generations.
//!
//! # Decision order
//!
//! First match wins:
//!
//! 1. No living cell: extinction. History is left as it was.
//! 2. The snapshot is appended to history (evicting the oldest entry).
//! 3. Wizardhood mode with a living cell below the highest tier: continue.
//! 4. Equal to generation n-1: stability.
//! 5. Equal to generation n-2: infinite loop (period 2).
//! 6. Otherwise: continue.
//!
//! Checks 4 and 5 compare against the window as it was before step 2. When
//! both hold, stability wins.

use std::collections::VecDeque;

use generations_types::{EvolutionMode, Stage, Termination, TerminationReason, Verdict};

use crate::board::Board;

/// Number of past generations the window remembers.
pub const HISTORY_DEPTH: usize = 2;

/// One cell of a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotCell {
    /// Empty or dead.
    Empty,
    /// Alive, stage not tracked.
    Alive,
    /// Alive, with its full stage.
    Staged(Stage),
}

/// A board reduced to the fields compared between generations.
///
/// Two snapshots are equal iff they have the same dimensions and every
/// cell matches positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major reduced cells.
    cells: Vec<SnapshotCell>,
}

impl Snapshot {
    /// Reduce `board` for comparison under `mode`.
    pub fn of(board: &Board, mode: EvolutionMode) -> Self {
        Reduction::of(board, mode).snapshot
    }

    /// `(width, height)` of the board this snapshot was taken from.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Reduced cells in row-major order.
    pub fn cells(&self) -> &[SnapshotCell] {
        &self.cells
    }
}

/// A snapshot plus the flags gathered while reducing the board.
struct Reduction {
    snapshot: Snapshot,
    any_alive: bool,
    non_terminal_stage_found: bool,
}

impl Reduction {
    fn of(board: &Board, mode: EvolutionMode) -> Self {
        let track_stage = mode.tracks_stage_identity();
        let mut any_alive = false;
        let mut non_terminal_stage_found = false;

        let cells = board
            .cells()
            .iter()
            .map(|cell| {
                if !cell.is_alive() {
                    return SnapshotCell::Empty;
                }
                any_alive = true;
                if !track_stage {
                    return SnapshotCell::Alive;
                }
                let stage = cell.stage();
                if !matches!(stage, Stage::Survivor(tier) if tier.is_terminal()) {
                    non_terminal_stage_found = true;
                }
                SnapshotCell::Staged(stage)
            })
            .collect();

        let (width, height) = board.dimensions();
        Self {
            snapshot: Snapshot {
                width,
                height,
                cells,
            },
            any_alive,
            non_terminal_stage_found,
        }
    }
}

/// The last [`HISTORY_DEPTH`] snapshots, oldest first.
///
/// Owned by the driver for one run and cleared when a new board is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryWindow {
    entries: VecDeque<Snapshot>,
}

impl HistoryWindow {
    /// An empty window.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_DEPTH),
        }
    }

    /// A window holding only the snapshot of a run's starting board.
    pub fn primed(board: &Board, mode: EvolutionMode) -> Self {
        let mut window = Self::new();
        window.push(Snapshot::of(board, mode));
        window
    }

    /// Append a snapshot, evicting the oldest one if the window is full.
    pub fn push(&mut self, snapshot: Snapshot) {
        while self.entries.len() >= HISTORY_DEPTH {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent snapshot (generation n-1).
    pub fn previous(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// The snapshot before the most recent one (generation n-2).
    pub fn before_previous(&self) -> Option<&Snapshot> {
        self.entries
            .len()
            .checked_sub(2)
            .and_then(|i| self.entries.get(i))
    }
}

/// Outcome of [`evaluate`]: the verdict and the history to carry forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether to keep going.
    pub verdict: Verdict,
    /// History after this generation was recorded.
    pub history: HistoryWindow,
}

/// Classify the generation `new_board` against `history`.
///
/// `generations_elapsed` is the generation number of `new_board`, i.e. how
/// many steps produced it from the seed. It is reported unadjusted in every
/// terminal verdict.
pub fn evaluate(
    new_board: &Board,
    mut history: HistoryWindow,
    generations_elapsed: u64,
    mode: EvolutionMode,
) -> Evaluation {
    let done = |reason| {
        Verdict::Done(Termination {
            reason,
            generation: generations_elapsed,
            mode,
        })
    };

    let reduction = Reduction::of(new_board, mode);
    if !reduction.any_alive {
        return Evaluation {
            verdict: done(TerminationReason::Extinction),
            history,
        };
    }

    // Both comparisons use the window as it stood before this generation.
    let matches_previous = history.previous() == Some(&reduction.snapshot);
    let matches_before_previous = history.before_previous() == Some(&reduction.snapshot);

    history.push(reduction.snapshot);

    let verdict = if mode.tracks_stage_identity() && reduction.non_terminal_stage_found {
        Verdict::Continue
    } else if matches_previous {
        done(TerminationReason::Stability)
    } else if matches_before_previous {
        done(TerminationReason::InfiniteLoop)
    } else {
        Verdict::Continue
    };

    Evaluation { verdict, history }
}
