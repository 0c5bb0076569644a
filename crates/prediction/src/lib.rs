//! # Shamba Yield Prediction Contract
//!
//! The yield model is trained and hosted outside this repository. This crate
//! defines the seam: the `YieldModel` trait callers implement to inject a
//! predictor, and the fixed training-column input schema it accepts.
//!
//! Feature encoding and column reindexing against the trained model's schema
//! are the model side's half of a versioned contract (`SCHEMA_VERSION`);
//! they are not reimplemented here.

pub mod error;
pub mod model;

pub use error::PredictionError;
pub use model::{SCHEMA_VERSION, YieldModel, YieldPredictionInput};
