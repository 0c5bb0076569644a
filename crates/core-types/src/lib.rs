//! # Shamba Core Types
//!
//! Layer 0 of the workspace: the season record consumed by every analytics
//! crate, together with the field-defaulting policy shared by all of them.
//!
//! ## Architectural Principles
//!
//! - **No upward knowledge:** this crate knows nothing about valuation,
//!   recommendation or reporting. It only defines the data they read.
//! - **Records are immutable inputs:** the analytics crates never create,
//!   mutate or destroy a record. Everything downstream is a pure
//!   transformation of a caller-supplied slice.

pub mod structs;

// Re-export the core types to provide a clean public API.
pub use structs::{SeasonRecord, finite};
