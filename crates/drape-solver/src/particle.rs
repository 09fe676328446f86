//! Verlet particle.
//!
//! Velocity is never stored. It is implied by the displacement between
//! `position` and `previous`, and damped by scaling that displacement.

use drape_math::Vec3;

/// A point mass advanced by Störmer–Verlet integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Position one integration step ago.
    pub previous: Vec3,
    /// Rest position. Pins restore to it; integration never touches it.
    pub rest: Vec3,
    /// Accumulated acceleration, cleared by every [`Particle::integrate`].
    pub acceleration: Vec3,
    mass: f32,
    inv_mass: f32,
}

impl Particle {
    /// Creates a particle at rest at `rest`.
    ///
    /// A non-positive `mass` produces an immovable particle (`inv_mass = 0`);
    /// [`crate::ClothConfig::validate`] rejects such configurations before
    /// a cloth is built.
    pub fn new(rest: Vec3, mass: f32) -> Self {
        let inv_mass = if mass > 0.0 { mass.recip() } else { 0.0 };
        Self {
            position: rest,
            previous: rest,
            rest,
            acceleration: Vec3::ZERO,
            mass,
            inv_mass,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Accumulates `force / mass` into the acceleration.
    #[inline]
    pub fn add_force(&mut self, force: Vec3) {
        self.acceleration += force * self.inv_mass;
    }

    /// Advances one step: `new = pos + (pos - prev) * drag + a * h²`.
    #[inline]
    pub fn integrate(&mut self, timestep_sq: f32, drag: f32) {
        let delta = (self.position - self.previous) * drag;
        let next = self.position + delta + self.acceleration * timestep_sq;
        self.previous = self.position;
        self.position = next;
        self.acceleration = Vec3::ZERO;
    }

    /// Displacement over the last step.
    #[inline]
    pub fn implicit_velocity(&self) -> Vec3 {
        self.position - self.previous
    }

    /// Offset from the rest position.
    #[inline]
    pub fn displacement(&self) -> Vec3 {
        self.position - self.rest
    }

    /// Places the particle back at rest with no motion.
    pub fn reset(&mut self) {
        self.position = self.rest;
        self.previous = self.rest;
        self.acceleration = Vec3::ZERO;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.previous.is_finite()
    }
}
