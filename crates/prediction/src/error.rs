use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Yield model expects input schema version {expected}, got {actual}.")]
    SchemaMismatch { expected: u32, actual: u32 },

    #[error("Yield model failed to produce a prediction: {0}")]
    ModelFailure(String),
}
