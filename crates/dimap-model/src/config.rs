//! Automapper invocation configuration.

use serde::{Deserialize, Serialize};

/// Similarity threshold used when the caller supplies none.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Per-target match limit used when the caller supplies none.
pub const DEFAULT_MATCH_LIMIT: usize = 1;

/// Configuration supplied fresh for each automapper invocation.
///
/// The algorithm is referenced by registry id so that an unknown id can be
/// reported as a configuration error rather than failing at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    /// Registry id of the similarity algorithm to use.
    pub algorithm: String,
    /// Whether target alternative names participate in matching.
    #[serde(default)]
    pub use_alternative_names: bool,
    /// Minimum rounded similarity a source must reach, in [0, 1].
    pub similarity_threshold: f64,
    /// Maximum number of matched sources kept per target (at least 1).
    pub match_limit: usize,
}

impl MatchConfig {
    /// Creates a configuration with the default threshold and match limit.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            use_alternative_names: false,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            match_limit: DEFAULT_MATCH_LIMIT,
        }
    }

    /// Enables or disables matching against target alternative names.
    #[must_use]
    pub fn with_alternative_names(mut self, enable: bool) -> Self {
        self.use_alternative_names = enable;
        self
    }

    /// Sets the similarity threshold.
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Sets the per-target match limit.
    #[must_use]
    pub fn with_match_limit(mut self, limit: usize) -> Self {
        self.match_limit = limit;
        self
    }
}
