//! # drape-types
//!
//! Shared error types, identifiers, and physical constants
//! for the drape cloth simulation.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other drape crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{DrapeError, DrapeResult};
pub use ids::ConstraintId;
