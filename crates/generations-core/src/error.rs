//! Error types for board construction and access.
//!
//! Evolution and termination detection are total over well-formed boards,
//! so every failure the engine can report comes from building or editing a
//! [`Board`](crate::board::Board).

/// Errors that can occur while building or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Board size must be a positive integer.
    #[error("invalid board dimension: {size} (must be at least 1)")]
    InvalidDimension {
        /// The rejected size.
        size: usize,
    },

    /// The rows handed in do not form a valid rectangular board.
    #[error("malformed board: {reason}")]
    MalformedBoard {
        /// Explanation of what is wrong with the rows.
        reason: String,
    },

    /// A coordinate lies outside the board.
    #[error("cell ({x}, {y}) is outside the board")]
    CellOutOfBounds {
        /// Column index.
        x: usize,
        /// Row index.
        y: usize,
    },
}
