//! Error taxonomy for automapper invocations.

use thiserror::Error;

/// Errors an automapper invocation can report.
///
/// All variants are synchronous caller errors; no partial proposal is
/// produced when any of them occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutomapError {
    /// The configured algorithm id is not in the registry.
    #[error("unknown algorithm id: {0}")]
    UnknownAlgorithm(String),
    /// The similarity threshold is outside [0, 1].
    #[error("similarity threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    /// The per-target match limit is below 1.
    #[error("match limit must be at least 1, got {0}")]
    MatchLimitOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, AutomapError>;
