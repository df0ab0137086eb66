/// Errors raised at the edges of the scoring core.
///
/// The scoring pipeline itself never fails; only user-facing inputs
/// (criterion names and configuration) are validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// A criterion name did not match any known criterion.
    #[error("unknown scoring criterion '{0}': expected one of InboundEdges, OutboundEdges")]
    UnknownCriterion(String),

    /// The rank ceiling must leave room for at least rank 1.
    #[error("rank ceiling must be at least 1, got {0}")]
    InvalidRankCeiling(u32),

    /// The configuration document could not be parsed.
    #[error("invalid scoring configuration: {0}")]
    Config(String),
}
