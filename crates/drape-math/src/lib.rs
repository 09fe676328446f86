//! # drape-math
//!
//! Vector primitives for the drape cloth simulation.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`): subtract, add, scale,
//!   length and normalize all come from there
//! - Geometric helpers shared by the constraint set and the wind model

pub mod vector;

// Re-export glam types as the canonical math types for drape.
pub use glam::{Vec2, Vec3};

pub use vector::{project_onto, push_to_sphere_surface, relaxation_correction};
