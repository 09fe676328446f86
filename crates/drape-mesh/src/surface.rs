//! Parametric surfaces: `(u, v) ∈ [0, 1]² -> position`.
//!
//! A surface seeds particle rest positions and the render mesh at the
//! same resolution. Implementations must be pure.

use std::f32::consts::PI;

use drape_math::Vec3;
use serde::{Deserialize, Serialize};

/// A deterministic map from parametric coordinates to a 3D rest position.
pub trait Surface {
    /// Position of parametric point `(u, v)`, both in `[0, 1]`.
    fn position(&self, u: f32, v: f32) -> Vec3;
}

impl<F> Surface for F
where
    F: Fn(f32, f32) -> Vec3,
{
    #[inline]
    fn position(&self, u: f32, v: f32) -> Vec3 {
        self(u, v)
    }
}

/// Built-in surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Flat rectangle in the XY plane, hanging upward from `y = height / 2`.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
    },
    /// Unit-radius cylinder loop around the Y axis, extending downward.
    Hoop,
}

impl SurfaceKind {
    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Plane { .. } => "plane",
            SurfaceKind::Hoop => "hoop",
        }
    }
}

impl Surface for SurfaceKind {
    fn position(&self, u: f32, v: f32) -> Vec3 {
        match *self {
            SurfaceKind::Plane { width, height } => plane(width, height, u, v),
            SurfaceKind::Hoop => hoop(u, v),
        }
    }
}

/// `x = (u - 0.5) * width, y = (v + 0.5) * height, z = 0`.
#[inline]
pub fn plane(width: f32, height: f32, u: f32, v: f32) -> Vec3 {
    Vec3::new((u - 0.5) * width, (v + 0.5) * height, 0.0)
}

/// `θ = (u - 0.5) * 2π + π/2`, `x = cos θ, y = -(v + 0.5), z = sin θ`.
///
/// `u = 0` and `u = 1` land on the same point, which is what lets a
/// hoop grid close on itself.
#[inline]
pub fn hoop(u: f32, v: f32) -> Vec3 {
    let theta = (u - 0.5) * 2.0 * PI + PI / 2.0;
    Vec3::new(theta.cos(), -(v + 0.5), theta.sin())
}
