//! # Shamba Recommendation Engine
//!
//! Ranks crops by historical profitability and recommends what to plant
//! next. Two heuristics are available:
//!
//! - **Basic:** highest mean profit per season.
//! - **Risk-adjusted:** highest mean profit divided by its standard
//!   deviation, a Sharpe-ratio analogue that penalizes volatile crops.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** a pure logic crate depending only on `core-types`.
//! - **Stateless Calculation:** the `RecommendationEngine` carries no state;
//!   the per-crop profit series is rebuilt fresh on every call and never
//!   persisted.
//!
//! "Not enough data" is an expected domain outcome, surfaced as
//! `RecommendationError::InsufficientData` so callers can render messaging
//! instead of crashing.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{CropRecommendation, RecommendationEngine, RiskAdjustedRecommendation};
pub use error::RecommendationError;
