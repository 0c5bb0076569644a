use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// Version of the training-column contract between this input schema and the
/// externally trained model. Bump whenever the column set changes.
pub const SCHEMA_VERSION: u32 = 1;

/// One prediction request, matching the trained model's feature columns.
///
/// The categorical fields are passed as raw strings; one-hot encoding and
/// reindexing to the training columns happen on the model side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPredictionInput {
    pub planted_area_acres: f64,
    /// Market price in KES per kg.
    pub market_price: f64,
    pub crop_type: String,
    pub county: String,
    pub season: String,
    pub soil_type: String,
    pub irrigation_method: String,
    pub fertilizer_used: String,
    pub pest_control: String,
    pub weather_impact: String,
}

/// An externally trained yield predictor.
///
/// The analytics layer treats the model as an opaque function from a feature
/// row to a predicted yield in kg. Implementations live with their model
/// artifacts, outside this workspace.
pub trait YieldModel {
    fn predict_yield(&self, input: &YieldPredictionInput) -> Result<f64, PredictionError>;
}
