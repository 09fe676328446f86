//! Geometric helpers on `Vec3`.
//!
//! Every helper is total: degenerate input (zero-length vectors)
//! yields `None` or a zero vector instead of NaN.

use glam::Vec3;

/// Component of `v` along the direction of `axis`, scaled by the raw dot product.
///
/// Returns `axis.normalize() * axis.dot(v)`. For a unit `axis` this is the
/// orthogonal projection of `v` onto it. A zero `axis` yields zero.
#[inline]
pub fn project_onto(axis: Vec3, v: Vec3) -> Vec3 {
    axis.normalize_or_zero() * axis.dot(v)
}

/// Correction that moves `p1` and `p2` to lie `rest` apart.
///
/// Returns `(p2 - p1) * (1 - rest / |p2 - p1|)`, i.e. the full
/// displacement to share between the two endpoints: adding it to `p1`
/// and subtracting it from `p2` (in any split) shortens or lengthens the
/// segment toward `rest`. `None` when the points coincide.
#[inline]
pub fn relaxation_correction(p1: Vec3, p2: Vec3, rest: f32) -> Option<Vec3> {
    let diff = p2 - p1;
    let dist = diff.length();
    if dist == 0.0 {
        return None;
    }
    Some(diff * (1.0 - rest / dist))
}

/// Projects `point` onto the surface of a sphere if it lies strictly inside.
///
/// Returns `None` when `|point - center| >= radius` or either side is NaN.
/// A point exactly at the center has no separating direction and is pushed
/// along `+Y`.
#[inline]
pub fn push_to_sphere_surface(point: Vec3, center: Vec3, radius: f32) -> Option<Vec3> {
    let diff = point - center;
    // Negated `<`: a NaN distance or radius returns None.
    if !(diff.length() < radius) {
        return None;
    }
    let direction = diff.try_normalize().unwrap_or(Vec3::Y);
    Some(center + direction * radius)
}
