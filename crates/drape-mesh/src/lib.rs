//! # drape-mesh
//!
//! Parametric surfaces and the triangle mesh that serves as the
//! render buffer, stored in Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Positions, normals, UVs, and topology in
//!   contiguous SoA buffers. Written from particle positions every frame.
//! - [`Surface`] / [`SurfaceKind`]: `(u, v) -> position` maps that seed
//!   rest positions (flat plane, closed hoop).
//! - [`generators::parametric_grid`]: Tessellates a surface at the same
//!   resolution as the particle grid.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod surface;

pub use mesh::TriangleMesh;
pub use surface::{Surface, SurfaceKind};
