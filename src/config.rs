//! JSON run configuration shared by the demo binaries.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::Boundary;
use crate::detector::DetectParams;
use crate::types::Point;

/// Card boundary as written in a config file.
#[derive(Clone, Debug, Deserialize)]
pub struct BoundaryConfig {
    /// Corners in TL, TR, BR, BL order.
    pub corners: [Point; 4],
    /// Midpoints per edge in top, right, bottom, left order, each listed
    /// along the direction of its edge.
    #[serde(default)]
    pub midpoints: [Vec<Point>; 4],
}

impl BoundaryConfig {
    pub fn to_boundary(&self) -> Result<Boundary, String> {
        Boundary::new(self.corners, self.midpoints.clone())
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

/// Output destinations; everything is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub text_out: Option<PathBuf>,
    pub png_out: Option<PathBuf>,
    pub bmp_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
    pub rectified_out: Option<PathBuf>,
    pub mask_out: Option<PathBuf>,
    pub blobs_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input_path: PathBuf,
    pub boundary: BoundaryConfig,
    pub grid: GridConfig,
    #[serde(default)]
    pub params: DetectParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let json = r#"{
            "input": "card.png",
            "boundary": {
                "corners": [
                    {"x": 0.0, "y": 0.0},
                    {"x": 99.0, "y": 0.0},
                    {"x": 99.0, "y": 99.0},
                    {"x": 0.0, "y": 99.0}
                ]
            },
            "grid": {"cols": 10, "rows": 10}
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.params.samples_per_cell, 10);
        assert!(config.output.json_out.is_none());
        assert!(config.boundary.to_boundary().is_ok());
    }

    #[test]
    fn midpoints_round_trip_into_a_boundary() {
        let json = r#"{
            "input": "card.png",
            "boundary": {
                "corners": [
                    {"x": 0.0, "y": 0.0},
                    {"x": 200.0, "y": 5.0},
                    {"x": 198.0, "y": 150.0},
                    {"x": 2.0, "y": 148.0}
                ],
                "midpoints": [
                    [{"x": 100.0, "y": -3.0}],
                    [],
                    [],
                    []
                ]
            },
            "grid": {"cols": 20, "rows": 12},
            "params": {"sensitivity": 42.0}
        }"#;
        let config: RuntimeConfig = serde_json::from_str(json).expect("config should parse");
        assert_eq!(config.params.sensitivity, 42.0);
        let boundary = config.boundary.to_boundary().expect("boundary valid");
        assert_eq!(boundary.midpoints(0).len(), 1);
    }
}
