//! Benchmark runner: steps a scenario's cloth and collects metrics.

use std::time::Instant;

use drape_solver::Cloth;
use drape_types::DrapeResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Step `k` (zero-based) sees the clock at `k * frame_interval_ms`.
    /// Ball spheres are refreshed before every step.
    pub fn run(scenario: &Scenario) -> DrapeResult<BenchmarkMetrics> {
        let (mut cloth, collider) = scenario.build()?;
        tracing::info!(
            scenario = %scenario.name,
            particles = cloth.particles().len(),
            frames = scenario.frames,
            "Running scenario"
        );

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut non_finite_frames = 0;

        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            let now = frame as f64 * scenario.frame_interval_ms;
            if let Some(id) = collider {
                if !scenario.balls.is_empty() {
                    cloth.set_spheres(id, scenario.spheres_at(now))?;
                }
            }

            let step_start = Instant::now();
            let report = cloth.step(now);
            step_times.push(step_start.elapsed().as_secs_f64());

            if report.non_finite > 0 {
                non_finite_frames += 1;
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scenario: scenario.name.clone(),
            particle_count: cloth.particles().len(),
            triangle_count: cloth.mesh().triangle_count(),
            constraint_count: cloth.constraint_count(),
            frames: scenario.frames,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            max_displacement: max_displacement(&cloth),
            final_mean_speed: mean_speed(&cloth),
            min_y: cloth
                .particles()
                .iter()
                .map(|p| p.position.y)
                .fold(f32::INFINITY, f32::min),
            non_finite_frames,
        };
        tracing::debug!(
            scenario = %metrics.scenario,
            wall_time = metrics.total_wall_time,
            max_displacement = metrics.max_displacement,
            "Scenario finished"
        );
        Ok(metrics)
    }

    /// Run all built-in scenarios and return metrics for each.
    pub fn run_all() -> DrapeResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario)?);
        }
        Ok(results)
    }
}

fn max_displacement(cloth: &Cloth) -> f32 {
    cloth
        .particles()
        .iter()
        .map(|p| p.displacement().length())
        .fold(0.0f32, f32::max)
}

fn mean_speed(cloth: &Cloth) -> f32 {
    let particles = cloth.particles();
    if particles.is_empty() {
        return 0.0;
    }
    let timestep = cloth.config().timestep;
    let total: f32 = particles.iter().map(|p| p.implicit_velocity().length()).sum();
    total / particles.len() as f32 / timestep
}
