//! Particle grids over a parametric surface.
//!
//! Two layouts are supported and kept apart on purpose, since they
//! disagree on column count, indexing, and how the last column links:
//!
//! | Topology     | Particles         | Index          | Parametric `u` |
//! |--------------|-------------------|----------------|----------------|
//! | `OpenPlane`  | `(w + 1)(h + 1)`  | `u + v(w + 1)` | `u / w`        |
//! | `ClosedHoop` | `w (h + 1)`       | `u + v w`      | `u / (w - 1)`  |
//!
//! In both, rows run along `v` with parametric `v / h`.

use drape_mesh::Surface;
use drape_types::constants::TAPER_ROWS;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::config::ClothConfig;
use crate::constraint::StructuralLink;
use crate::particle::Particle;

/// How grid columns connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceTopology {
    /// A sheet with four free edges.
    OpenPlane,
    /// A loop whose last column is linked back to the first.
    ClosedHoop,
}

/// Topology plus segment counts `(w, h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub topology: SurfaceTopology,
    pub segments: (usize, usize),
}

/// `base / (row / 8 + 1)`.
#[inline]
pub fn taper(base: f32, row: usize) -> f32 {
    base / (row as f32 / TAPER_ROWS + 1.0)
}

impl GridSpec {
    pub fn open_plane(w: usize, h: usize) -> Self {
        Self {
            topology: SurfaceTopology::OpenPlane,
            segments: (w, h),
        }
    }

    pub fn closed_hoop(w: usize, h: usize) -> Self {
        Self {
            topology: SurfaceTopology::ClosedHoop,
            segments: (w, h),
        }
    }

    /// Rejects grids too small to index.
    pub fn validate(&self) -> DrapeResult<()> {
        let (w, h) = self.segments;
        let min_w = match self.topology {
            SurfaceTopology::OpenPlane => 1,
            SurfaceTopology::ClosedHoop => 2,
        };
        if w < min_w || h < 1 {
            return Err(DrapeError::InvalidConfig(format!(
                "{:?} grid needs at least {}x1 segments, got {}x{}",
                self.topology, min_w, w, h
            )));
        }
        Ok(())
    }

    /// Particles per row.
    pub fn columns(&self) -> usize {
        let (w, _) = self.segments;
        match self.topology {
            SurfaceTopology::OpenPlane => w + 1,
            SurfaceTopology::ClosedHoop => w,
        }
    }

    pub fn rows(&self) -> usize {
        self.segments.1 + 1
    }

    pub fn particle_count(&self) -> usize {
        self.columns() * self.rows()
    }

    #[inline]
    pub fn index(&self, u: usize, v: usize) -> usize {
        u + v * self.columns()
    }

    /// Parametric coordinate of grid point `(u, v)`.
    pub fn parametric(&self, u: usize, v: usize) -> (f32, f32) {
        let (w, h) = self.segments;
        let u_span = match self.topology {
            SurfaceTopology::OpenPlane => w,
            SurfaceTopology::ClosedHoop => w - 1,
        };
        (u as f32 / u_span as f32, v as f32 / h as f32)
    }

    /// `(slices, stacks)` of the render mesh whose vertex `i` is particle `i`.
    pub fn mesh_resolution(&self) -> (usize, usize) {
        (self.columns() - 1, self.segments.1)
    }

    /// One particle per grid point, row-major, resting on `surface`.
    pub fn build_particles<S: Surface + ?Sized>(&self, surface: &S, mass: f32) -> Vec<Particle> {
        let mut particles = Vec::with_capacity(self.particle_count());
        for v in 0..self.rows() {
            for u in 0..self.columns() {
                let (pu, pv) = self.parametric(u, v);
                particles.push(Particle::new(surface.position(pu, pv), mass));
            }
        }
        particles
    }

    /// Vertical and horizontal links, in registration order.
    ///
    /// Rows `0..h` contribute a vertical and a horizontal link per column.
    /// The open plane then links its extra column downward; both
    /// topologies finish with the horizontal links of the last row.
    pub fn structural_links(&self, config: &ClothConfig) -> Vec<StructuralLink> {
        let (w, h) = self.segments;
        let rest = |row: usize| {
            if config.taper {
                taper(config.rest_distance, row)
            } else {
                config.rest_distance
            }
        };

        let mut links = Vec::with_capacity(2 * self.particle_count());
        match self.topology {
            SurfaceTopology::OpenPlane => {
                for v in 0..h {
                    for u in 0..w {
                        links.push(StructuralLink::new(self.index(u, v), self.index(u, v + 1), rest(v)));
                        links.push(StructuralLink::new(self.index(u, v), self.index(u + 1, v), rest(v)));
                    }
                }
                for v in 0..h {
                    links.push(StructuralLink::new(self.index(w, v), self.index(w, v + 1), rest(v)));
                }
                for u in 0..w {
                    links.push(StructuralLink::new(self.index(u, h), self.index(u + 1, h), rest(h)));
                }
            }
            SurfaceTopology::ClosedHoop => {
                let across = |u: usize, v: usize| {
                    let length = if u + 1 == w { config.seam_distance } else { rest(v) };
                    StructuralLink::new(self.index(u, v), self.index((u + 1) % w, v), length)
                };
                for v in 0..h {
                    for u in 0..w {
                        links.push(StructuralLink::new(self.index(u, v), self.index(u, v + 1), rest(v)));
                        links.push(across(u, v));
                    }
                }
                for u in 0..w {
                    links.push(across(u, h));
                }
            }
        }
        links
    }
}
