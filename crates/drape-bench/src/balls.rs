//! Thrown balls for the hoop-net scene.
//!
//! Each ball follows a closed-form ballistic track, `p0 + v t + ½ g t²`,
//! and starts its throw over once it falls below `kill_height`. Position
//! is a pure function of time, so runs are reproducible.

use drape_math::Vec3;
use drape_solver::Sphere;
use drape_types::constants::GRAVITY;
use serde::{Deserialize, Serialize};

/// One ball and the throw it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallTrack {
    /// Launch point.
    pub start: Vec3,
    /// Launch velocity (units/s).
    pub velocity: Vec3,
    pub radius: f32,
    /// Time of the first throw (ms). The ball does not exist before it.
    #[serde(default)]
    pub launch_ms: f64,
    /// Height below which the throw restarts.
    #[serde(default = "default_kill_height")]
    pub kill_height: f32,
}

fn default_kill_height() -> f32 {
    -20.0
}

impl BallTrack {
    /// Ball radius used by the hoop-net scene.
    pub const RADIUS: f32 = 0.475;

    pub fn new(start: Vec3, velocity: Vec3, launch_ms: f64) -> Self {
        Self {
            start,
            velocity,
            radius: Self::RADIUS,
            launch_ms,
            kill_height: default_kill_height(),
        }
    }

    /// Seconds from launch until the ball drops to `kill_height`.
    ///
    /// `None` when the track starts at or below the kill height.
    pub fn flight_time(&self) -> Option<f64> {
        let g = GRAVITY as f64;
        let vy = self.velocity.y as f64;
        let drop = (self.start.y - self.kill_height) as f64;
        if drop <= 0.0 {
            return None;
        }
        // y(t) = y0 + vy t - g t² / 2 = kill
        Some((vy + (vy * vy + 2.0 * g * drop).sqrt()) / g)
    }

    /// Ball center at `now` (ms), or `None` before launch.
    pub fn position(&self, now: f64) -> Option<Vec3> {
        if now < self.launch_ms {
            return None;
        }
        let mut t = (now - self.launch_ms) / 1000.0;
        match self.flight_time() {
            Some(period) if period > 0.0 => t %= period,
            _ => return None,
        }
        let t = t as f32;
        let gravity = Vec3::new(0.0, -GRAVITY, 0.0);
        Some(self.start + self.velocity * t + gravity * (0.5 * t * t))
    }

    pub fn sphere_at(&self, now: f64) -> Option<Sphere> {
        self.position(now).map(|center| Sphere::new(center, self.radius))
    }
}

/// Spheres of every ball in flight at `now`.
pub fn spheres_at(tracks: &[BallTrack], now: f64) -> Vec<Sphere> {
    tracks.iter().filter_map(|track| track.sphere_at(now)).collect()
}

/// A volley of `count` throws from below the hoop toward it, one per
/// second, with a fixed per-ball spread.
pub fn volley(count: usize) -> Vec<BallTrack> {
    const SPREAD: [[f32; 3]; 5] = [
        [1.2, 0.6, 2.1],
        [0.3, 2.4, 0.9],
        [2.7, 1.5, 1.8],
        [1.8, 0.0, 2.7],
        [0.6, 2.9, 0.3],
    ];
    let start = Vec3::new(0.0, -2.0, 5.0);
    let base = Vec3::new(-1.5, 7.0, -10.0);
    (0..count)
        .map(|k| {
            let velocity = base + Vec3::from_array(SPREAD[k % SPREAD.len()]);
            BallTrack::new(start, velocity, k as f64 * 1000.0)
        })
        .collect()
}
