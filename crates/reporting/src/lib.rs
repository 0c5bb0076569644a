//! # Shamba Reporting Aggregator
//!
//! Groups season records by crop and computes display-ready summary
//! statistics: average market price, average ROI and total investment
//! volume. The output rows carry pre-formatted currency and percentage
//! strings, since the summary exists purely for presentation.
//!
//! Unlike the valuation and recommendation engines, this crate consumes the
//! upstream-recorded `profit` field directly, and it is the one place that
//! screens out NaN sentinels left behind by the raw dataset.

pub mod engine;
pub mod report;

pub use engine::ReportingEngine;
pub use report::CropPerformance;
