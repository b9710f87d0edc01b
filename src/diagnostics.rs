//! Structured diagnostics for detection runs.
//!
//! Every stage of the pipeline reports its elapsed time; the trace adds the
//! counters a caller needs to judge a run (foreground pixels, raw and kept
//! blob counts). All types serialize to camelCase JSON for the demo tools.

use serde::Serialize;

use crate::types::Detection;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for a detection run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}

/// Dimensions the pipeline ran with.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub cols: usize,
    pub rows: usize,
    pub samples_per_cell: usize,
}

/// Internal execution trace of a detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    /// Pixels marked foreground by the adaptive threshold.
    pub foreground_px: usize,
    /// Connected components before filtering.
    pub blobs_total: usize,
    /// Blobs that survived the size and aspect filter.
    pub blobs_kept: usize,
}

/// Result produced by [`PunchDetector::detect_with_report`](crate::PunchDetector::detect_with_report).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub detection: Detection,
    pub trace: PipelineTrace,
}
