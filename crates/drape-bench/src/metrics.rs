//! Benchmark metrics: data collected during a benchmark run.

use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Particle count (equal to the mesh vertex count).
    pub particle_count: usize,
    /// Triangle count.
    pub triangle_count: usize,
    /// Registered constraints.
    pub constraint_count: usize,
    /// Number of steps executed.
    pub frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Largest distance of any particle from its rest position.
    pub max_displacement: f32,
    /// Mean implicit speed over the last step (units/s); approaches zero
    /// as the cloth settles.
    pub final_mean_speed: f32,
    /// Lowest particle Y at the end of the run.
    pub min_y: f32,
    /// Steps that left at least one particle non-finite.
    pub non_finite_frames: u32,
}

impl BenchmarkMetrics {
    /// Format as a CSV row (header + data).
    pub fn to_csv_header() -> String {
        "scenario,particle_count,triangle_count,constraint_count,frames,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,max_displacement,final_mean_speed,min_y,non_finite_frames".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6},{:.6},{:.6},{}",
            self.scenario,
            self.particle_count,
            self.triangle_count,
            self.constraint_count,
            self.frames,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.max_displacement,
            self.final_mean_speed,
            self.min_y,
            self.non_finite_frames,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    /// Pretty-printed JSON array.
    pub fn to_json(metrics: &[BenchmarkMetrics]) -> DrapeResult<String> {
        serde_json::to_string_pretty(metrics).map_err(|e| DrapeError::Serialization(e.to_string()))
    }
}
