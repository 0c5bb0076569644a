use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    /// No eligible records after filtering. Carries the human-readable
    /// message the caller should display.
    #[error("{0}")]
    InsufficientData(String),
}
