//! # drape-solver
//!
//! Verlet particles, the constraint set, wind, and the cloth stepper.
//!
//! ## Key Types
//!
//! - [`Cloth`]: Owns particles, ordered constraints, and the render mesh;
//!   advanced one sub-step at a time by [`Cloth::step`]
//! - [`Particle`]: Störmer–Verlet point mass with implicit velocity
//! - [`Constraint`]: Structural link, pin set, floor, or sphere collider,
//!   applied through a single dispatch
//! - [`GridSpec`]: Open-plane or closed-hoop particle layout
//! - [`ClothConfig`]: Physical parameters and toggles
//! - [`WindField`]: Time-varying wind sampled each step

pub mod cloth;
pub mod collider;
pub mod config;
pub mod constraint;
pub mod grid;
pub mod particle;
pub mod pins;
pub mod wind;

pub use cloth::{Cloth, StepReport};
pub use collider::{FloorPlane, Sphere, SphereCollision};
pub use config::ClothConfig;
pub use constraint::{Constraint, PinSet, StructuralLink};
pub use grid::{GridSpec, SurfaceTopology};
pub use particle::Particle;
pub use pins::PinPreset;
pub use wind::{CalmWind, OscillatingWind, WindField};
