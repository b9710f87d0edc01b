//! Connected-component extraction and shape filtering.
//!
//! The labeling pass turns the binary mask into a list of blobs, each
//! carrying its centroid, pixel area, and tight bounding box. The filter
//! then discards blobs whose area or aspect ratio cannot belong to a punch
//! of the expected size.
//!
//! - `label`: two-pass 4-connectivity labeling with a union-find over
//!   provisional labels.
//! - `filter`: area band and aspect cap relative to the expected punch area.

mod filter;
mod label;

pub use filter::{expected_punch_area, filter_blobs};
pub use label::label_blobs;

use serde::Serialize;

/// Connected foreground region in the rectified frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// Centroid in rectified pixels.
    pub center_x: f64,
    pub center_y: f64,
    /// Number of foreground pixels.
    pub area: u32,
    /// Tight bounding box, inclusive pixel coordinates.
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl Blob {
    /// Horizontal bounding-box span.
    #[inline]
    pub fn bbox_w(&self) -> u32 {
        self.max_x - self.min_x
    }

    /// Vertical bounding-box span.
    #[inline]
    pub fn bbox_h(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Elongation of the bounding box; 1.0 for a square, large for slivers.
    pub fn aspect(&self) -> f64 {
        let long = self.bbox_w().max(self.bbox_h()) as f64;
        let short = self.bbox_w().min(self.bbox_h()).max(1) as f64;
        long / short
    }
}
