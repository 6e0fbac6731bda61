use thiserror::Error;

/// Errors produced by the rating core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// Score outside `[0, max_score]` (NaN included)
    #[error("score must be between 0 and {max_score}, got {score}")]
    InvalidScore { score: f64, max_score: u32 },
}
