//! Error types for the Generations engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and the tick loop.

/// Top-level error for the Generations engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: generations_core::config::ConfigError,
    },

    /// Building the starting board or advancing the run failed.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: generations_core::simulation::SimulationError,
    },

    /// The configured log level is not a valid filter directive.
    #[error("invalid log level {level:?}: {message}")]
    LogLevel {
        /// The rejected level string.
        level: String,
        /// Why it was rejected.
        message: String,
    },
}
