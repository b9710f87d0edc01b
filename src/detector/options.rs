//! Parameter types configuring the detection stages.
//!
//! Defaults match typical punched-card photographs. For tuning, start with
//! `sensitivity` (contrast between punches and card stock) and
//! `blob_size_percent` (how much of a cell a punch covers).

use serde::Deserialize;

/// Detector-wide parameters controlling the pipeline.
///
/// Out-of-range values are clamped at construction rather than rejected, so
/// a slider or config file can never put the pipeline in an invalid state.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DetectParams {
    /// Grayscale offset below the local mean required to mark a pixel as
    /// foreground, in [0, 100]. Larger values demand darker punches.
    pub sensitivity: f64,
    /// Radius of the local-mean window in grid-cell units, in [1, 20].
    pub neighborhood_radius: f64,
    /// Expected punch area as a percentage of one cell's area, in [5, 100].
    pub blob_size_percent: f64,
    /// Rectified samples per grid cell along each axis (>= 1).
    pub samples_per_cell: usize,
    /// Minimum lattice-line separation as a fraction of the cell size.
    pub min_separation: f64,
    /// Assignment gate as a fraction of the average lattice spacing; blobs
    /// farther than this from their nearest row or column center are dropped.
    pub assign_gate: f64,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            sensitivity: 30.0,
            neighborhood_radius: 5.0,
            blob_size_percent: 50.0,
            samples_per_cell: 10,
            min_separation: 0.7,
            assign_gate: 0.6,
        }
    }
}

impl DetectParams {
    /// Copy of the parameters with every field clamped to its documented
    /// range.
    pub fn clamped(&self) -> Self {
        Self {
            sensitivity: self.sensitivity.clamp(0.0, 100.0),
            neighborhood_radius: self.neighborhood_radius.clamp(1.0, 20.0),
            blob_size_percent: self.blob_size_percent.clamp(5.0, 100.0),
            samples_per_cell: self.samples_per_cell.max(1),
            min_separation: self.min_separation.clamp(0.1, 1.0),
            assign_gate: self.assign_gate.clamp(0.1, 1.0),
        }
    }

    /// Local-mean window radius in rectified pixels.
    pub fn window_radius_px(&self) -> usize {
        let px = self.neighborhood_radius * self.samples_per_cell as f64;
        (px.round() as usize).max(crate::threshold::MIN_WINDOW_RADIUS)
    }

    /// Minimum lattice-line separation in rectified pixels.
    pub fn min_separation_px(&self) -> f64 {
        self.min_separation * self.samples_per_cell as f64
    }
}
