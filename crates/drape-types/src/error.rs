//! Error types for the drape simulation.
//!
//! All setup paths return `DrapeResult<T>`. Stepping a built cloth
//! is infallible: degenerate geometry is short-circuited in place.

use thiserror::Error;

use crate::ids::ConstraintId;

/// Unified error type for drape.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A constraint or pin references a particle that does not exist.
    #[error("Particle index {index} is out of range (particle count: {count})")]
    ParticleOutOfRange {
        index: usize,
        count: usize,
    },

    /// No registered constraint has this id.
    #[error("Unknown constraint: {0:?}")]
    UnknownConstraint(ConstraintId),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
