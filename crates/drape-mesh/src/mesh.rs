//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! The simulation writes into this buffer; it never reads particle
//! state back out of it, except normals for the wind model.

use drape_math::Vec3;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    /// U parametric coordinates.
    pub uv_u: Vec<f32>,
    /// V parametric coordinates.
    pub uv_v: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices: each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,

    /// Set when positions changed since the renderer last looked.
    #[serde(skip)]
    positions_dirty: bool,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Flags the position channels as changed.
    pub fn mark_positions_dirty(&mut self) {
        self.positions_dirty = true;
    }

    /// Returns whether positions changed since the last call, and clears the flag.
    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::take(&mut self.positions_dirty)
    }

    /// Returns whether positions changed since the flag was last cleared.
    pub fn positions_dirty(&self) -> bool {
        self.positions_dirty
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            uv_u: Vec::with_capacity(vertex_capacity),
            uv_v: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            positions_dirty: false,
        }
    }

    /// Writes interleaved `[x0, y0, z0, x1, ...]` positions into `out`.
    ///
    /// `out` is cleared first and reused, so a renderer on another
    /// thread can keep two of these and swap them.
    pub fn write_interleaved(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.vertex_count() * 3);
        for i in 0..self.vertex_count() {
            out.extend_from_slice(&self.position(i));
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> DrapeResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(DrapeError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(DrapeError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }
        if self.uv_u.len() != n || self.uv_v.len() != n {
            return Err(DrapeError::InvalidMesh(
                "UV arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(DrapeError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(DrapeError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout. Normals
    /// start at zero; call [`crate::normals::compute_vertex_normals`].
    pub fn from_interleaved(
        positions: &[f32],
        indices: &[u32],
        uvs: &[f32],
    ) -> DrapeResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for chunk in positions.chunks_exact(3) {
            mesh.pos_x.push(chunk[0]);
            mesh.pos_y.push(chunk[1]);
            mesh.pos_z.push(chunk[2]);
        }

        if uvs.len() == n * 2 {
            for chunk in uvs.chunks_exact(2) {
                mesh.uv_u.push(chunk[0]);
                mesh.uv_v.push(chunk[1]);
            }
        } else {
            mesh.uv_u.resize(n, 0.0);
            mesh.uv_v.resize(n, 0.0);
        }

        mesh.normal_x.resize(n, 0.0);
        mesh.normal_y.resize(n, 0.0);
        mesh.normal_z.resize(n, 0.0);

        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
