//! The cloth stepper.
//!
//! A [`Cloth`] owns its particles, the ordered constraint list, and the
//! render mesh. Each [`Cloth::step`]:
//!
//! ```text
//! wind -> gravity -> integrate -> constraints (× iterations) -> mesh sync -> normals
//! ```

use drape_math::Vec3;
use drape_mesh::generators::parametric_grid;
use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::{Surface, TriangleMesh};
use drape_types::{ConstraintId, DrapeError, DrapeResult};

use crate::collider::{FloorPlane, Sphere, SphereCollision};
use crate::config::ClothConfig;
use crate::constraint::{Constraint, PinSet};
use crate::grid::GridSpec;
use crate::particle::Particle;
use crate::pins::PinPreset;
use crate::wind::{apply_aerodynamic_forces, OscillatingWind, WindField};

/// Summary of one [`Cloth::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Frame number, starting at 1 for the first step.
    pub frame: u64,
    /// Wind sampled this frame, whether or not it was applied.
    pub wind: Vec3,
    /// Constraint applications performed (registered × iterations).
    pub constraints_applied: usize,
    /// Particles whose position left the finite range.
    pub non_finite: usize,
}

/// A cloth: particles, constraints, and the mesh they drive.
///
/// Mesh vertex `i` is particle `i` for the lifetime of the cloth.
pub struct Cloth<W = OscillatingWind> {
    particles: Vec<Particle>,
    constraints: Vec<(ConstraintId, Constraint)>,
    next_id: ConstraintId,
    pin_id: Option<ConstraintId>,
    mesh: TriangleMesh,
    config: ClothConfig,
    wind: W,
    columns: usize,
    frame: u64,
}

impl Cloth<OscillatingWind> {
    /// Builds a cloth over `surface` with the default oscillating wind.
    ///
    /// Registers structural links, then the floor (when configured),
    /// then the pins for `pins`.
    pub fn new<S: Surface + ?Sized>(
        surface: &S,
        grid: GridSpec,
        config: ClothConfig,
        pins: &PinPreset,
    ) -> DrapeResult<Self> {
        Self::with_wind(surface, grid, config, pins, OscillatingWind)
    }
}

impl<W: WindField> Cloth<W> {
    /// Builds a cloth over `surface` with a custom wind field.
    pub fn with_wind<S: Surface + ?Sized>(
        surface: &S,
        grid: GridSpec,
        config: ClothConfig,
        pins: &PinPreset,
        wind: W,
    ) -> DrapeResult<Self> {
        config.validate()?;
        grid.validate()?;

        let particles = grid.build_particles(surface, config.mass);
        let (slices, stacks) = grid.mesh_resolution();
        let mesh = parametric_grid(surface, slices, stacks)?;
        let links = grid.structural_links(&config);

        let mut cloth = Self::from_parts(particles, mesh, grid.columns(), config, wind)?;
        for link in links {
            cloth.add_constraint(Constraint::Structural(link))?;
        }
        if let Some(height) = cloth.config.floor_height {
            cloth.add_constraint(Constraint::Floor(FloorPlane::new(height)))?;
        }
        cloth.set_pins(pins)?;

        tracing::debug!(
            topology = ?grid.topology,
            segments = ?grid.segments,
            particles = cloth.particles.len(),
            constraints = cloth.constraints.len(),
            "Built cloth"
        );
        Ok(cloth)
    }

    /// Assembles a cloth from prebuilt particles and mesh, with no constraints.
    ///
    /// `columns` is the row length used to resolve pin presets.
    pub fn from_parts(
        particles: Vec<Particle>,
        mut mesh: TriangleMesh,
        columns: usize,
        config: ClothConfig,
        wind: W,
    ) -> DrapeResult<Self> {
        config.validate()?;
        if mesh.vertex_count() != particles.len() {
            return Err(DrapeError::InvalidMesh(format!(
                "Mesh has {} vertices but the cloth has {} particles",
                mesh.vertex_count(),
                particles.len()
            )));
        }
        if columns == 0 || particles.len() % columns != 0 {
            return Err(DrapeError::InvalidConfig(format!(
                "{} particles do not divide into rows of {}",
                particles.len(),
                columns
            )));
        }
        mesh.validate()?;

        for (i, p) in particles.iter().enumerate() {
            mesh.set_position(i, p.position);
        }
        compute_vertex_normals(&mut mesh);

        Ok(Self {
            particles,
            constraints: Vec::new(),
            next_id: ConstraintId(0),
            pin_id: None,
            mesh,
            config,
            wind,
            columns,
            frame: 0,
        })
    }

    /// Advances the simulation by one sub-step at time `now` (milliseconds).
    pub fn step(&mut self, now: f64) -> StepReport {
        let wind = self.wind.sample(now);
        if self.config.wind_enabled {
            apply_aerodynamic_forces(&mut self.particles, &self.mesh, wind);
        }

        let gravity = Vec3::new(0.0, -self.config.gravity, 0.0);
        let timestep_sq = self.config.timestep_sq();
        let drag = self.config.drag();
        for p in &mut self.particles {
            p.add_force(gravity * p.mass());
            p.integrate(timestep_sq, drag);
        }

        for _ in 0..self.config.iterations {
            for (_, constraint) in &self.constraints {
                constraint.apply(&mut self.particles);
            }
        }

        let mut non_finite = 0;
        for (i, p) in self.particles.iter().enumerate() {
            if !p.is_finite() {
                non_finite += 1;
            }
            self.mesh.set_position(i, p.position);
        }
        self.mesh.mark_positions_dirty();
        compute_vertex_normals(&mut self.mesh);

        self.frame += 1;
        if non_finite > 0 {
            tracing::warn!(frame = self.frame, non_finite, "Cloth positions are no longer finite");
        }
        tracing::trace!(
            frame = self.frame,
            wind_x = wind.x,
            wind_y = wind.y,
            wind_z = wind.z,
            wind_enabled = self.config.wind_enabled,
            "Stepped cloth"
        );

        StepReport {
            frame: self.frame,
            wind,
            constraints_applied: self.constraints.len() * self.config.iterations as usize,
            non_finite,
        }
    }

    /// Appends a constraint after every existing one.
    pub fn add_constraint(&mut self, constraint: Constraint) -> DrapeResult<ConstraintId> {
        constraint.validate(self.particles.len())?;
        let id = self.next_id;
        self.next_id = id.next();
        if !matches!(constraint, Constraint::Structural(_)) {
            tracing::debug!(id = id.raw(), kind = constraint.kind(), "Registered constraint");
        }
        self.constraints.push((id, constraint));
        Ok(id)
    }

    /// Removes a constraint; the rest keep their order.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> DrapeResult<Constraint> {
        let slot = self.slot(id)?;
        let (_, constraint) = self.constraints.remove(slot);
        if self.pin_id == Some(id) {
            self.pin_id = None;
        }
        tracing::debug!(id = id.raw(), kind = constraint.kind(), "Removed constraint");
        Ok(constraint)
    }

    pub fn constraint(&self, id: ConstraintId) -> DrapeResult<&Constraint> {
        let slot = self.slot(id)?;
        Ok(&self.constraints[slot].1)
    }

    /// Edits a constraint in place.
    ///
    /// The edited constraint is re-validated against the particle count;
    /// on failure the edit is rolled back and the error returned.
    pub fn update_constraint<F>(&mut self, id: ConstraintId, edit: F) -> DrapeResult<()>
    where
        F: FnOnce(&mut Constraint),
    {
        let slot = self.slot(id)?;
        let count = self.particles.len();
        let constraint = &mut self.constraints[slot].1;
        let before = constraint.clone();
        edit(&mut *constraint);
        if let Err(e) = constraint.validate(count) {
            *constraint = before;
            return Err(e);
        }
        tracing::debug!(id = id.raw(), kind = constraint.kind(), "Updated constraint");
        Ok(())
    }

    /// Replaces the sphere list of a sphere collider.
    pub fn set_spheres(&mut self, id: ConstraintId, spheres: Vec<Sphere>) -> DrapeResult<()> {
        let slot = self.slot(id)?;
        match &mut self.constraints[slot].1 {
            Constraint::Spheres(collision) => {
                let candidate = SphereCollision::new(spheres);
                candidate.validate()?;
                *collision = candidate;
                Ok(())
            }
            other => Err(DrapeError::InvalidConfig(format!(
                "Constraint {} is a {} constraint, not a sphere collider",
                id.raw(),
                other.kind()
            ))),
        }
    }

    /// Moves the height of a floor constraint.
    pub fn set_floor_height(&mut self, id: ConstraintId, height: f32) -> DrapeResult<()> {
        let slot = self.slot(id)?;
        match &mut self.constraints[slot].1 {
            Constraint::Floor(floor) => {
                let candidate = FloorPlane::new(height);
                candidate.validate()?;
                *floor = candidate;
                Ok(())
            }
            other => Err(DrapeError::InvalidConfig(format!(
                "Constraint {} is a {} constraint, not a floor",
                id.raw(),
                other.kind()
            ))),
        }
    }

    /// Swaps the pinned set, keeping the pin constraint's place in the order.
    ///
    /// The first call registers the pin constraint at the end.
    pub fn set_pins(&mut self, preset: &PinPreset) -> DrapeResult<ConstraintId> {
        let indices = preset.resolve(&self.particles, self.columns)?;
        tracing::debug!(preset = ?preset, pinned = indices.len(), "Setting pins");

        if let Some(id) = self.pin_id {
            let slot = self.slot(id)?;
            if let Constraint::Pin(pins) = &mut self.constraints[slot].1 {
                pins.indices = indices;
                return Ok(id);
            }
        }
        let id = self.add_constraint(Constraint::Pin(PinSet::new(indices)))?;
        self.pin_id = Some(id);
        Ok(id)
    }

    /// Indices currently pinned by [`Cloth::set_pins`].
    pub fn pinned(&self) -> &[usize] {
        self.pin_id
            .and_then(|id| self.constraint(id).ok())
            .and_then(|c| match c {
                Constraint::Pin(pins) => Some(pins.indices.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Returns every particle to rest and the frame counter to zero.
    pub fn reset(&mut self) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.reset();
            self.mesh.set_position(i, p.position);
        }
        self.mesh.mark_positions_dirty();
        compute_vertex_normals(&mut self.mesh);
        self.frame = 0;
    }

    /// Fills `out` with interleaved positions for a renderer.
    pub fn copy_positions_into(&self, out: &mut Vec<f32>) {
        self.mesh.write_interleaved(out);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Mesh access for a renderer that consumes the dirty flag.
    pub fn mesh_mut(&mut self) -> &mut TriangleMesh {
        &mut self.mesh
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Switches wind on or off between steps.
    pub fn set_wind_enabled(&mut self, enabled: bool) {
        self.config.wind_enabled = enabled;
    }

    pub fn wind(&self) -> &W {
        &self.wind
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Constraint ids in application order.
    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        self.constraints.iter().map(|(id, _)| *id)
    }

    // Ids are issued in increasing order and removal keeps order, so the
    // list stays sorted by id.
    fn slot(&self, id: ConstraintId) -> DrapeResult<usize> {
        self.constraints
            .binary_search_by_key(&id, |(k, _)| *k)
            .map_err(|_| DrapeError::UnknownConstraint(id))
    }
}
