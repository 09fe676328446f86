//! Approximate aerodynamics.
//!
//! A [`WindField`] maps a millisecond timestamp to a wind vector. The
//! force on the cloth is derived per triangle vertex from the render
//! mesh normals, which are one frame stale by the time they are read.

use drape_math::{project_onto, Vec3};
use drape_mesh::TriangleMesh;

use crate::particle::Particle;

/// Time-varying wind.
pub trait WindField {
    /// Wind vector at `now` (milliseconds).
    fn sample(&self, now: f64) -> Vec3;
}

impl<F> WindField for F
where
    F: Fn(f64) -> Vec3,
{
    fn sample(&self, now: f64) -> Vec3 {
        self(now)
    }
}

/// Slowly turning gusts.
///
/// Direction `normalize(sin(t/2000), cos(t/3000), sin(t/1000))`,
/// strength `cos(t/7000) * 20 + 40`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillatingWind;

impl OscillatingWind {
    pub fn direction(&self, now: f64) -> Vec3 {
        let raw = [(now / 2000.0).sin(), (now / 3000.0).cos(), (now / 1000.0).sin()];
        let len = (raw[0] * raw[0] + raw[1] * raw[1] + raw[2] * raw[2]).sqrt();
        if len == 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new((raw[0] / len) as f32, (raw[1] / len) as f32, (raw[2] / len) as f32)
    }

    pub fn strength(&self, now: f64) -> f32 {
        ((now / 7000.0).cos() * 20.0 + 40.0) as f32
    }
}

impl WindField for OscillatingWind {
    fn sample(&self, now: f64) -> Vec3 {
        self.direction(now) * self.strength(now)
    }
}

/// No wind at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalmWind;

impl WindField for CalmWind {
    fn sample(&self, _now: f64) -> Vec3 {
        Vec3::ZERO
    }
}

/// Adds `n̂ * dot(n, wind)` to each vertex's particle once per triangle
/// that references it.
///
/// Vertex `i` of `mesh` must be particle `i`; vertices without a
/// particle are skipped.
pub fn apply_aerodynamic_forces(particles: &mut [Particle], mesh: &TriangleMesh, wind: Vec3) {
    if wind == Vec3::ZERO {
        return;
    }
    for &index in &mesh.indices {
        let i = index as usize;
        let Some(p) = particles.get_mut(i) else {
            continue;
        };
        p.add_force(project_onto(mesh.normal_vec3(i), wind));
    }
}
