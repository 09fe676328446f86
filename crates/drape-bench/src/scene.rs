//! TOML scene files.
//!
//! A scene file is a serialized [`Scenario`]. Only `surface` and `grid`
//! are required:
//!
//! ```toml
//! name = "net"
//! frames = 240
//! pins = "top_edge"
//!
//! [surface]
//! kind = "hoop"
//!
//! [grid]
//! topology = "closed_hoop"
//! segments = [10, 10]
//!
//! [cloth]
//! iterations = 2
//!
//! [[balls]]
//! start = [0.0, -2.0, 5.0]
//! velocity = [0.0, 8.0, -9.0]
//! radius = 0.475
//! ```

use std::path::Path;

use drape_types::{DrapeError, DrapeResult};

use crate::scenarios::Scenario;

/// Parses a scene from TOML text.
pub fn parse_scene(text: &str) -> DrapeResult<Scenario> {
    toml::from_str(text).map_err(|e| DrapeError::Serialization(e.to_string()))
}

/// Reads and parses a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> DrapeResult<Scenario> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scenario = parse_scene(&text)?;
    tracing::debug!(path = %path.display(), name = %scenario.name, "Loaded scene");
    Ok(scenario)
}

/// Serializes a scene back to TOML.
pub fn scene_to_toml(scenario: &Scenario) -> DrapeResult<String> {
    toml::to_string_pretty(scenario).map_err(|e| DrapeError::Serialization(e.to_string()))
}

/// Checks that the scene builds: config, grid, pins, and spheres.
pub fn validate_scene(scenario: &Scenario) -> DrapeResult<()> {
    scenario.build().map(|_| ())
}
