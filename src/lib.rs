#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod boundary;
pub mod detector;
pub mod diagnostics;
pub mod export;
pub mod image;
pub mod types;

// Pipeline stages: public for the demo tools, unstable internals otherwise.
pub mod blobs;
pub mod config;
pub mod lattice;
pub mod rectify;
pub mod surface;
pub mod threshold;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::boundary::Boundary;
pub use crate::detector::{DetectParams, PunchDetector};
pub use crate::types::{CellGrid, Detection, Point};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use punch_detector::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![255u8; w * h];
/// let source = SourceImage::Gray(GrayView { w, h, stride: w, data: &gray });
///
/// let boundary = Boundary::rect(w as f64 - 1.0, h as f64 - 1.0)?;
/// let detector = PunchDetector::new(DetectParams::default());
/// let detection = detector.detect(&source, &boundary, 72, 12);
/// println!("punched={} latency_ms={:.3}", detection.grid.punched_count(), detection.latency_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayView, RgbView, SourceImage};
    pub use crate::{Boundary, CellGrid, DetectParams, Detection, Point, PunchDetector};
}
