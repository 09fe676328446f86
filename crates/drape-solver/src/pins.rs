//! Pin presets: named ways of choosing which particles hold still.

use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::particle::Particle;

/// Which particles to pin.
///
/// Presets are resolved against the rest positions of a grid laid out
/// row-major with `columns` particles per row. The "top" row is whichever
/// of the first and last rows sits higher at rest, so the same preset
/// works for a plane (rising with `v`) and a hoop (falling with `v`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPreset {
    /// Every particle of the top row.
    #[default]
    TopEdge,
    /// Particle 0 only.
    Single,
    /// The two ends of the top row.
    TwoCorners,
    /// Nothing pinned.
    Unpinned,
    /// Explicit particle indices.
    Custom(Vec<usize>),
}

impl PinPreset {
    /// Returns the pinned particle indices, sorted and deduplicated.
    pub fn resolve(&self, particles: &[Particle], columns: usize) -> DrapeResult<Vec<usize>> {
        let count = particles.len();
        if count == 0 || columns == 0 {
            return match self {
                PinPreset::Unpinned => Ok(Vec::new()),
                _ => Err(DrapeError::InvalidConfig(
                    "Cannot pin particles of an empty grid".into(),
                )),
            };
        }

        let mut indices = match self {
            PinPreset::TopEdge => top_row(particles, columns).collect(),
            PinPreset::Single => vec![0],
            PinPreset::TwoCorners => {
                let row = top_row(particles, columns);
                vec![row.start, row.end - 1]
            }
            PinPreset::Unpinned => Vec::new(),
            PinPreset::Custom(indices) => indices.clone(),
        };

        indices.sort_unstable();
        indices.dedup();

        if let Some(&index) = indices.last() {
            if index >= count {
                return Err(DrapeError::ParticleOutOfRange { index, count });
            }
        }
        Ok(indices)
    }
}

fn top_row(particles: &[Particle], columns: usize) -> std::ops::Range<usize> {
    let columns = columns.min(particles.len());
    let rows = particles.len() / columns;
    let last_start = rows.saturating_sub(1) * columns;

    let mean_y = |start: usize| {
        particles[start..start + columns]
            .iter()
            .map(|p| p.rest.y)
            .sum::<f32>()
            / columns as f32
    };

    if mean_y(last_start) > mean_y(0) {
        last_start..last_start + columns
    } else {
        0..columns
    }
}
