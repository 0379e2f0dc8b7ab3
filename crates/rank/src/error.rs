//! Error types for the ridgewave-rank crate.

/// Error type for score lookups and comparisons between ranks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// Returned when a score is requested for a feature that was never added.
    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    /// Returned when two ranks are compared but share no feature.
    #[error("ranks share no common feature")]
    NoCommonFeatures,
}
