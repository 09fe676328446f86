//! Collision response against analytic shapes: spheres and a floor plane.
//!
//! Both are position projections. Neither touches `previous`, so the
//! implicit velocity picks up the correction on the next step.

use drape_math::{push_to_sphere_surface, Vec3};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::particle::Particle;

/// A sphere the cloth cannot enter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Rejects a non-finite center or a radius that is not finite and positive.
    pub fn validate(&self) -> DrapeResult<()> {
        if !self.center.is_finite() {
            return Err(DrapeError::InvalidConfig(format!(
                "Sphere center must be finite, got {}",
                self.center
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "Sphere radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Pushes particles out of every sphere in the list.
///
/// The list is owned by the constraint and replaced by the caller
/// whenever the spheres move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SphereCollision {
    pub spheres: Vec<Sphere>,
}

impl SphereCollision {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self { spheres }
    }

    pub fn validate(&self) -> DrapeResult<()> {
        self.spheres.iter().try_for_each(Sphere::validate)
    }

    /// Projects every particle strictly inside a sphere onto its surface.
    ///
    /// Spheres are handled in list order, so with overlapping spheres a
    /// particle can end up inside an earlier one.
    pub fn solve(&self, particles: &mut [Particle]) {
        for sphere in &self.spheres {
            for p in particles.iter_mut() {
                if let Some(surface) = push_to_sphere_surface(p.position, sphere.center, sphere.radius) {
                    p.position = surface;
                }
            }
        }
    }
}

/// Horizontal plane at `y = height`; particles below are clamped onto it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorPlane {
    pub height: f32,
}

impl FloorPlane {
    pub fn new(height: f32) -> Self {
        Self { height }
    }

    pub fn validate(&self) -> DrapeResult<()> {
        if !self.height.is_finite() {
            return Err(DrapeError::InvalidConfig(format!(
                "Floor height must be finite, got {}",
                self.height
            )));
        }
        Ok(())
    }

    /// Clamps `position.y` to the floor. No restitution.
    pub fn solve(&self, particles: &mut [Particle]) {
        for p in particles.iter_mut() {
            if p.position.y < self.height {
                p.position.y = self.height;
            }
        }
    }
}
