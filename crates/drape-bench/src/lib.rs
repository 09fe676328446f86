//! # drape-bench
//!
//! Benchmark scenarios and scene files for drape.
//!
//! Provides 3 built-in scenarios, TOML scene loading, deterministic ball
//! tracks for the hoop net, metric collection, and CSV/JSON export.

pub mod balls;
pub mod metrics;
pub mod runner;
pub mod scenarios;
pub mod scene;

pub use balls::BallTrack;
pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
pub use scene::{load_scene, parse_scene, validate_scene};
