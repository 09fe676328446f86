//! CLI command implementations.

use drape_bench::metrics::BenchmarkMetrics;
use drape_bench::runner::BenchmarkRunner;
use drape_bench::scenarios::{Scenario, ScenarioKind};
use drape_bench::scene::{load_scene, validate_scene};

/// Run a scene file.
pub fn simulate(scene_path: &str, frames: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    println!("drape Simulation");
    println!("────────────────");
    println!("Scene: {scene_path}");
    println!();

    let mut scenario = load_scene(scene_path)?;
    if let Some(frames) = frames {
        scenario.frames = frames;
    }

    println!(
        "Running: {} ({} surface, {:?}, {} frames)",
        scenario.name,
        scenario.surface.name(),
        scenario.grid.topology,
        scenario.frames,
    );

    let metrics = BenchmarkRunner::run(&scenario)?;
    print_summary(&metrics);

    if metrics.non_finite_frames > 0 {
        println!(
            "⚠ {} frames produced non-finite positions; try a smaller timestep.",
            metrics.non_finite_frames
        );
    }
    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("drape Benchmark Suite");
    println!("═════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![scenario_name.parse::<ScenarioKind>()?]
    };

    let mut all_metrics = Vec::new();

    for kind in kinds {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} surface, {} frames)",
            kind,
            scenario.surface.name(),
            scenario.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;
        print_summary(&metrics);

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a scene file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("drape Validator");
    println!("───────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file format: {path}. Scenes are .toml files.").into());
    }

    println!("Validating scene: {path}");
    let scenario = load_scene(path)?;
    validate_scene(&scenario)?;
    println!(
        "✅ Scene '{}' is valid ({} particles).",
        scenario.name,
        scenario.grid.particle_count()
    );
    Ok(())
}

fn print_summary(metrics: &BenchmarkMetrics) {
    println!(
        "  Particles:     {} ({} tris, {} constraints)",
        metrics.particle_count, metrics.triangle_count, metrics.constraint_count
    );
    println!("  Wall time:     {:.3}s", metrics.total_wall_time);
    println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
    println!("  Max displace:  {:.4}", metrics.max_displacement);
    println!("  Mean speed:    {:.6}", metrics.final_mean_speed);
    println!("  Min Y:         {:.4}", metrics.min_y);
    println!();
}
