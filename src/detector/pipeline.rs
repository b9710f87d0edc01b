//! Detector pipeline orchestrating end-to-end punch detection.
//!
//! The [`PunchDetector`] exposes a simple API: feed a source photograph, a
//! card boundary, and the grid dimensions, and get back the punch matrix
//! together with the fitted lattice axes and the surviving blobs. Internally
//! it runs rectification, adaptive thresholding, connected-component
//! labeling, blob filtering, per-axis lattice fitting, and cell assignment,
//! in that order.
//!
//! Typical usage:
//! ```no_run
//! use punch_detector::{Boundary, DetectParams, PunchDetector};
//! use punch_detector::image::SourceImage;
//!
//! # fn example(photo: SourceImage) -> Result<(), String> {
//! let boundary = Boundary::rect(640.0, 480.0)?;
//! let detector = PunchDetector::new(DetectParams::default());
//! let detection = detector.detect(&photo, &boundary, 80, 12);
//! println!("{} punches", detection.grid.punched_count());
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use log::debug;

use super::assign::assign_to_grid;
use super::options::DetectParams;
use crate::blobs::{expected_punch_area, filter_blobs, label_blobs};
use crate::boundary::Boundary;
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::image::SourceImage;
use crate::lattice::fit_axis;
use crate::rectify::rectify;
use crate::surface::SurfacePatch;
use crate::threshold::adaptive_threshold;
use crate::types::Detection;

/// Punch detector for card photographs.
///
/// Holds only parameters; every `detect` call owns its buffers, so a
/// detector can be reused across images and parameter updates freely.
#[derive(Clone, Debug)]
pub struct PunchDetector {
    params: DetectParams,
}

impl PunchDetector {
    /// Create a detector, clamping parameters to their documented ranges.
    pub fn new(params: DetectParams) -> Self {
        Self {
            params: params.clamped(),
        }
    }

    pub fn params(&self) -> &DetectParams {
        &self.params
    }

    /// Replace all parameters at once (clamped).
    pub fn set_params(&mut self, params: DetectParams) {
        self.params = params.clamped();
    }

    /// Update the foreground sensitivity offset.
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.params.sensitivity = sensitivity.clamp(0.0, 100.0);
    }

    /// Update the local-mean window radius (grid-cell units).
    pub fn set_neighborhood_radius(&mut self, radius: f64) {
        self.params.neighborhood_radius = radius.clamp(1.0, 20.0);
    }

    /// Update the expected punch size (% of cell area).
    pub fn set_blob_size_percent(&mut self, percent: f64) {
        self.params.blob_size_percent = percent.clamp(5.0, 100.0);
    }

    /// Run the full pipeline.
    ///
    /// Always yields a grid: cells whose marks were rejected stay unpunched
    /// and missing lattice positions are interpolated.
    pub fn detect(
        &self,
        source: &SourceImage<'_>,
        boundary: &Boundary,
        cols: usize,
        rows: usize,
    ) -> Detection {
        self.detect_with_report(source, boundary, cols, rows).detection
    }

    /// Run the full pipeline and capture stage timings and counts.
    pub fn detect_with_report(
        &self,
        source: &SourceImage<'_>,
        boundary: &Boundary,
        cols: usize,
        rows: usize,
    ) -> DetectionReport {
        let total_start = Instant::now();
        let params = &self.params;
        let s = params.samples_per_cell;
        let mut timings = TimingBreakdown::default();

        let stage_start = Instant::now();
        let patch = SurfacePatch::new(boundary, cols, rows);
        let rectified = rectify(source, &patch, cols, rows, s);
        timings.push("rectify", elapsed_ms(stage_start));
        debug!(
            "rectified {}x{} source into {}x{} raster",
            source.width(),
            source.height(),
            rectified.w,
            rectified.h
        );

        let stage_start = Instant::now();
        let mask = adaptive_threshold(&rectified, params.window_radius_px(), params.sensitivity);
        let foreground_px = mask.foreground_count();
        timings.push("threshold", elapsed_ms(stage_start));
        debug!("threshold marked {foreground_px} foreground pixels");

        let stage_start = Instant::now();
        let raw_blobs = label_blobs(&mask);
        let blobs_total = raw_blobs.len();
        timings.push("label", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let expected_area = expected_punch_area(s, params.blob_size_percent);
        let blobs = filter_blobs(raw_blobs, expected_area);
        let blobs_kept = blobs.len();
        timings.push("filter", elapsed_ms(stage_start));
        debug!("kept {blobs_kept} of {blobs_total} blobs (expected area {expected_area:.1} px)");

        let stage_start = Instant::now();
        let col_extent = (cols * s) as f64;
        let row_extent = (rows * s) as f64;
        let xs: Vec<f64> = blobs.iter().map(|b| b.center_x).collect();
        let ys: Vec<f64> = blobs.iter().map(|b| b.center_y).collect();
        let separation = params.min_separation_px();
        let col_centers = fit_axis(&xs, col_extent, cols, separation);
        let row_centers = fit_axis(&ys, row_extent, rows, separation);
        timings.push("lattice", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let grid = assign_to_grid(
            &blobs,
            &col_centers,
            &row_centers,
            col_extent,
            row_extent,
            params.assign_gate,
        );
        timings.push("assign", elapsed_ms(stage_start));
        debug!("assigned {} punches", grid.punched_count());

        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;

        DetectionReport {
            detection: Detection {
                grid,
                col_centers,
                row_centers,
                blobs,
                cell_px: s,
                latency_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    width: source.width(),
                    height: source.height(),
                    cols,
                    rows,
                    samples_per_cell: s,
                },
                timings,
                foreground_px,
                blobs_total,
                blobs_kept,
            },
        }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
