//! Constraint set: structural links, pins, floor, and sphere colliders.
//!
//! Every constraint is a plain value describing *what* to enforce. The
//! single [`Constraint::apply`] dispatch enforces it against a particle
//! slice owned by someone else, so constraints hold no references and
//! no per-frame state.

use drape_math::relaxation_correction;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::collider::{FloorPlane, SphereCollision};
use crate::particle::Particle;

/// A constraint that can be applied to a set of particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    Structural(StructuralLink),
    Pin(PinSet),
    Floor(FloorPlane),
    Spheres(SphereCollision),
}

impl Constraint {
    /// Enforces the constraint once.
    pub fn apply(&self, particles: &mut [Particle]) {
        match self {
            Constraint::Structural(link) => link.solve(particles),
            Constraint::Pin(pins) => pins.solve(particles),
            Constraint::Floor(floor) => floor.solve(particles),
            Constraint::Spheres(spheres) => spheres.solve(particles),
        }
    }

    /// Returns a short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::Structural(_) => "structural",
            Constraint::Pin(_) => "pin",
            Constraint::Floor(_) => "floor",
            Constraint::Spheres(_) => "spheres",
        }
    }

    /// Largest particle index the constraint touches, if it names any.
    pub fn max_index(&self) -> Option<usize> {
        match self {
            Constraint::Structural(link) => Some(link.a.max(link.b)),
            Constraint::Pin(pins) => pins.indices.iter().copied().max(),
            Constraint::Floor(_) | Constraint::Spheres(_) => None,
        }
    }

    /// Checks that every referenced particle exists and every parameter
    /// is usable.
    pub fn validate(&self, particle_count: usize) -> DrapeResult<()> {
        if let Some(index) = self.max_index() {
            if index >= particle_count {
                return Err(DrapeError::ParticleOutOfRange {
                    index,
                    count: particle_count,
                });
            }
        }
        match self {
            Constraint::Structural(link) => link.validate(),
            Constraint::Pin(_) => Ok(()),
            Constraint::Floor(floor) => floor.validate(),
            Constraint::Spheres(spheres) => spheres.validate(),
        }
    }
}

/// Keeps two particles `rest_length` apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralLink {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
}

impl StructuralLink {
    pub fn new(a: usize, b: usize, rest_length: f32) -> Self {
        Self { a, b, rest_length }
    }

    pub fn validate(&self) -> DrapeResult<()> {
        if !self.rest_length.is_finite() || self.rest_length < 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "Link {}-{} rest length must be non-negative, got {}",
                self.a, self.b, self.rest_length
            )));
        }
        Ok(())
    }

    /// One relaxation step toward `rest_length`.
    ///
    /// A zero rest length welds `b` onto `a`. Coincident particles are
    /// left alone. Otherwise the correction is split by inverse mass,
    /// which for equal masses is half each.
    pub fn solve(&self, particles: &mut [Particle]) {
        if self.rest_length == 0.0 {
            particles[self.b].position = particles[self.a].position;
            return;
        }

        let (pa, wa) = (particles[self.a].position, particles[self.a].inv_mass());
        let (pb, wb) = (particles[self.b].position, particles[self.b].inv_mass());

        let w_total = wa + wb;
        if w_total == 0.0 {
            return; // both immovable
        }

        let Some(correction) = relaxation_correction(pa, pb, self.rest_length) else {
            return;
        };

        particles[self.a].position += correction * (wa / w_total);
        particles[self.b].position -= correction * (wb / w_total);
    }
}

/// Holds a set of particles at their rest positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinSet {
    pub indices: Vec<usize>,
}

impl PinSet {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Sets both `position` and `previous` to rest, which also zeroes
    /// the implicit velocity.
    pub fn solve(&self, particles: &mut [Particle]) {
        for &i in &self.indices {
            let p = &mut particles[i];
            p.position = p.rest;
            p.previous = p.rest;
        }
    }
}
