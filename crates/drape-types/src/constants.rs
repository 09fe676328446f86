//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.82;

/// Fixed integration sub-step (seconds).
pub const DEFAULT_TIMESTEP: f32 = 18.0 / 1000.0;

/// Fraction of the implicit velocity removed every step.
pub const DAMPING: f32 = 0.03;

/// Base rest distance between neighbouring particles.
pub const REST_DISTANCE: f32 = 0.5;

/// Default floor height (Y coordinate).
pub const FLOOR_HEIGHT: f32 = -250.0;

/// Rest length of the link that closes a hoop.
pub const SEAM_DISTANCE: f32 = 0.01;

/// Rows per unit of taper: `base / (row / TAPER_ROWS + 1)`.
pub const TAPER_ROWS: f32 = 8.0;

/// Default mass per particle (kg).
pub const PARTICLE_MASS: f32 = 0.1;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
