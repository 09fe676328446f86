//! Cloth configuration.
//!
//! Physical parameters and toggles for a [`crate::Cloth`]. Every field
//! has a default, so scene files only need to list what they change.

use drape_types::constants;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Configuration for a cloth simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Mass of every particle.
    pub mass: f32,

    /// Base rest distance between neighbouring particles.
    pub rest_distance: f32,

    /// Shrink rest distances row by row: `base / (row / 8 + 1)`.
    pub taper: bool,

    /// Rest length of the link that closes a hoop. Zero welds the seam.
    pub seam_distance: f32,

    /// Integration sub-step (seconds).
    pub timestep: f32,

    /// Fraction of the implicit velocity removed each step (0.0–1.0).
    pub damping: f32,

    /// Gravitational acceleration magnitude, applied along -Y.
    pub gravity: f32,

    /// Constraint sweeps per step.
    pub iterations: u32,

    /// Floor height. `None` registers no floor.
    pub floor_height: Option<f32>,

    /// Whether the wind field pushes the cloth.
    pub wind_enabled: bool,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            mass: constants::PARTICLE_MASS,
            rest_distance: constants::REST_DISTANCE,
            taper: true,
            seam_distance: constants::SEAM_DISTANCE,
            timestep: constants::DEFAULT_TIMESTEP,
            damping: constants::DAMPING,
            gravity: constants::GRAVITY,
            iterations: 1,
            floor_height: Some(constants::FLOOR_HEIGHT),
            wind_enabled: false,
        }
    }
}

impl ClothConfig {
    /// Default cloth with wind switched on.
    pub fn windy() -> Self {
        Self {
            wind_enabled: true,
            ..Default::default()
        }
    }

    /// Several constraint sweeps per step for a less stretchy cloth.
    pub fn stiff() -> Self {
        Self {
            iterations: 4,
            ..Default::default()
        }
    }

    /// Multiplier applied to last step's displacement.
    #[inline]
    pub fn drag(&self) -> f32 {
        1.0 - self.damping
    }

    #[inline]
    pub fn timestep_sq(&self) -> f32 {
        self.timestep * self.timestep
    }

    /// Checks every field for a usable value.
    pub fn validate(&self) -> DrapeResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(invalid(format!("mass must be positive, got {}", self.mass)));
        }
        if !self.rest_distance.is_finite() || self.rest_distance < 0.0 {
            return Err(invalid(format!(
                "rest_distance must be non-negative, got {}",
                self.rest_distance
            )));
        }
        if !self.seam_distance.is_finite() || self.seam_distance < 0.0 {
            return Err(invalid(format!(
                "seam_distance must be non-negative, got {}",
                self.seam_distance
            )));
        }
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(invalid(format!("timestep must be positive, got {}", self.timestep)));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(invalid(format!("damping must be in [0, 1], got {}", self.damping)));
        }
        if !self.gravity.is_finite() {
            return Err(invalid(format!("gravity must be finite, got {}", self.gravity)));
        }
        if self.iterations == 0 {
            return Err(invalid("iterations must be at least 1".into()));
        }
        if let Some(height) = self.floor_height {
            if !height.is_finite() {
                return Err(invalid(format!("floor_height must be finite, got {}", height)));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> DrapeError {
    DrapeError::InvalidConfig(message)
}
