//! Procedural mesh generation from parametric surfaces.
//!
//! Vertex order is row-major in `v` then `u`, which is the same order
//! the particle grid uses, so vertex `i` is always particle `i`.

use drape_types::{DrapeError, DrapeResult};

use crate::mesh::TriangleMesh;
use crate::normals::compute_vertex_normals;
use crate::surface::Surface;

/// Tessellates `surface` into `slices × stacks` cells.
///
/// Produces `(slices + 1) * (stacks + 1)` vertices and two triangles
/// per cell. Vertex `(j, i)` sits at parametric `(j / slices, i / stacks)`.
/// Normals are computed before returning.
///
/// # Example
/// ```
/// use drape_mesh::generators::parametric_grid;
/// use drape_mesh::SurfaceKind;
/// let mesh = parametric_grid(&SurfaceKind::Plane { width: 1.0, height: 1.0 }, 2, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 cells × 2 tris each
/// ```
pub fn parametric_grid<S: Surface + ?Sized>(
    surface: &S,
    slices: usize,
    stacks: usize,
) -> DrapeResult<TriangleMesh> {
    if slices == 0 || stacks == 0 {
        return Err(DrapeError::InvalidMesh(format!(
            "Parametric grid needs at least one cell, got {}x{}",
            slices, stacks
        )));
    }

    let verts_u = slices + 1;
    let verts_v = stacks + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_u * verts_v, slices * stacks * 2);

    for i in 0..verts_v {
        let v = i as f32 / stacks as f32;
        for j in 0..verts_u {
            let u = j as f32 / slices as f32;
            let p = surface.position(u, v);

            mesh.pos_x.push(p.x);
            mesh.pos_y.push(p.y);
            mesh.pos_z.push(p.z);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(0.0);

            mesh.uv_u.push(u);
            mesh.uv_v.push(v);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * verts_u + j) as u32;
            let b = a + 1;
            let d = a + verts_u as u32;
            let c = d + 1;

            mesh.indices.extend_from_slice(&[a, b, d]);
            mesh.indices.extend_from_slice(&[b, c, d]);
        }
    }

    compute_vertex_normals(&mut mesh);
    Ok(mesh)
}
