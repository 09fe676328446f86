//! Benchmark scenarios: surface + grid + pins + config for each case.
//!
//! Three canonical scenarios:
//! 1. **Hanging sheet**: Flat plane held by its two top corners
//! 2. **Hoop net**: Closed hoop pinned along its rim, balls thrown through it
//! 3. **Windy flag**: Flat plane pinned along its top edge, wind enabled
//!
//! A [`Scenario`] is also what a TOML scene file deserializes into.

use std::fmt;
use std::str::FromStr;

use drape_mesh::SurfaceKind;
use drape_solver::{Cloth, ClothConfig, Constraint, GridSpec, PinPreset, Sphere, SphereCollision};
use drape_types::{ConstraintId, DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::balls::{self, BallTrack};

/// Which built-in scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Plane hanging from two corners.
    HangingSheet,
    /// Hoop with balls thrown through it.
    HoopNet,
    /// Plane flapping in the wind.
    WindyFlag,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingSheet,
            ScenarioKind::HoopNet,
            ScenarioKind::WindyFlag,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::HoopNet => "hoop_net",
            ScenarioKind::WindyFlag => "windy_flag",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = DrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                DrapeError::InvalidConfig(format!(
                    "Unknown scenario '{}'. Available: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

fn default_name() -> String {
    "scene".to_string()
}

fn default_frames() -> u32 {
    120
}

fn default_frame_interval() -> f64 {
    1000.0 / 60.0
}

/// A fully specified scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Label used in logs and metrics.
    #[serde(default = "default_name")]
    pub name: String,
    /// Surface that seeds rest positions.
    pub surface: SurfaceKind,
    /// Particle layout.
    pub grid: GridSpec,
    #[serde(default)]
    pub pins: PinPreset,
    #[serde(default)]
    pub cloth: ClothConfig,
    /// Fixed spheres.
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    /// Moving balls; their spheres are refreshed every frame.
    #[serde(default)]
    pub balls: Vec<BallTrack>,
    /// Number of steps to run.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Clock advance per step (ms), fed to the wind field and the balls.
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: f64,
}

impl Scenario {
    /// Create the hanging sheet scenario.
    ///
    /// A 4×4 plane at 16×16 segments, held by the two corners of its
    /// top edge, sagging under gravity for 2 seconds at 60fps.
    pub fn hanging_sheet() -> Self {
        Self {
            name: ScenarioKind::HangingSheet.name().to_string(),
            surface: SurfaceKind::Plane {
                width: 4.0,
                height: 4.0,
            },
            grid: GridSpec::open_plane(16, 16),
            pins: PinPreset::TwoCorners,
            cloth: ClothConfig {
                rest_distance: 0.25,
                taper: false,
                ..Default::default()
            },
            spheres: Vec::new(),
            balls: Vec::new(),
            frames: 120,
            frame_interval_ms: default_frame_interval(),
        }
    }

    /// Create the hoop net scenario.
    ///
    /// A unit hoop at 10×10 segments pinned along its rim, with a floor
    /// at -250 and a volley of five balls thrown through it.
    pub fn hoop_net() -> Self {
        Self {
            name: ScenarioKind::HoopNet.name().to_string(),
            surface: SurfaceKind::Hoop,
            grid: GridSpec::closed_hoop(10, 10),
            pins: PinPreset::TopEdge,
            cloth: ClothConfig::default(),
            spheres: Vec::new(),
            balls: balls::volley(5),
            frames: 300,
            frame_interval_ms: default_frame_interval(),
        }
    }

    /// Create the windy flag scenario.
    ///
    /// A 3×2 plane at 15×10 segments pinned along its top edge, wind on.
    pub fn windy_flag() -> Self {
        Self {
            name: ScenarioKind::WindyFlag.name().to_string(),
            surface: SurfaceKind::Plane {
                width: 3.0,
                height: 2.0,
            },
            grid: GridSpec::open_plane(15, 10),
            pins: PinPreset::TopEdge,
            cloth: ClothConfig {
                rest_distance: 0.2,
                taper: false,
                ..ClothConfig::windy()
            },
            spheres: Vec::new(),
            balls: Vec::new(),
            frames: 180,
            frame_interval_ms: default_frame_interval(),
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::HoopNet => Self::hoop_net(),
            ScenarioKind::WindyFlag => Self::windy_flag(),
        }
    }

    /// Whether the scene needs a sphere collider.
    pub fn has_spheres(&self) -> bool {
        !self.spheres.is_empty() || !self.balls.is_empty()
    }

    /// Fixed spheres plus every ball in flight at `now`.
    pub fn spheres_at(&self, now: f64) -> Vec<Sphere> {
        let mut spheres = self.spheres.clone();
        spheres.extend(balls::spheres_at(&self.balls, now));
        spheres
    }

    /// Builds the cloth, registering a sphere collider last when needed.
    pub fn build(&self) -> DrapeResult<(Cloth, Option<ConstraintId>)> {
        self.validate_timing()?;
        for sphere in &self.spheres {
            sphere.validate()?;
        }
        for ball in &self.balls {
            if !ball.radius.is_finite() || ball.radius <= 0.0 {
                return Err(DrapeError::InvalidConfig(format!(
                    "Ball radius must be positive, got {}",
                    ball.radius
                )));
            }
        }

        let mut cloth = Cloth::new(&self.surface, self.grid, self.cloth.clone(), &self.pins)?;
        let collider = if self.has_spheres() {
            let spheres = SphereCollision::new(self.spheres_at(0.0));
            Some(cloth.add_constraint(Constraint::Spheres(spheres))?)
        } else {
            None
        };
        Ok((cloth, collider))
    }

    fn validate_timing(&self) -> DrapeResult<()> {
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms < 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "frame_interval_ms must be non-negative, got {}",
                self.frame_interval_ms
            )));
        }
        Ok(())
    }
}
