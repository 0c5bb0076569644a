//! # Shamba Valuation Engine
//!
//! This crate estimates a farm's economic worth from its season history.
//! It offers two models:
//!
//! - **Simple valuation:** a fixed multiple of total recorded profit. Crude,
//!   but defensible with very little data.
//! - **DCF valuation:** a discounted-cash-flow model that projects the most
//!   recent year's profit forward and adds a Gordon-growth terminal value.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** this is a pure logic crate. It has no knowledge of
//!   external systems and depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** the `ValuationEngine` takes season records as
//!   input and produces a number as output. This makes it highly reliable
//!   and easy to test.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{DcfParams, ValuationEngine};
pub use error::ValuationError;
