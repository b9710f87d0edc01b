//! Row/column lattice recovery from blob centroid positions.
//!
//! Each axis is fitted independently: centroid coordinates are smoothed
//! into a histogram with Gaussian deposits, local maxima are collected and
//! thinned by non-maximum suppression, and any positions still missing are
//! filled by gap interpolation against the ideal spacing. Suppression runs
//! before interpolation so that clusters of duplicate detections cannot
//! bias the fitted axis.
//!
//! With no centroids at all the axis falls back to the uniform layout
//! `(i + 0.5) · extent / count`.

mod histogram;
mod interpolate;

use histogram::{suppress_peaks, PositionHistogram};
use interpolate::fill_missing;

/// Gaussian deposit width as a fraction of the minimum separation.
const DEPOSIT_SIGMA_FACTOR: f64 = 0.3;
/// Fraction of the minimum separation enforced between accepted peaks.
const SUPPRESS_DISTANCE_FACTOR: f64 = 0.5;

/// Recover `count` strictly increasing center positions along one axis.
///
/// `positions` are blob centroid coordinates along the axis, `extent` the
/// rectified size of the axis, and `min_separation` the closest two true
/// lattice lines can sit (in rectified pixels).
pub fn fit_axis(positions: &[f64], extent: f64, count: usize, min_separation: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if positions.is_empty() {
        let spacing = extent / count as f64;
        return (0..count).map(|i| (i as f64 + 0.5) * spacing).collect();
    }

    let mut hist = PositionHistogram::new(extent);
    let sigma = DEPOSIT_SIGMA_FACTOR * min_separation;
    for &pos in positions {
        hist.deposit(pos, sigma);
    }

    let peaks = hist.peaks();
    let accepted = suppress_peaks(&peaks, SUPPRESS_DISTANCE_FACTOR * min_separation, count);

    if accepted.len() < count {
        fill_missing(&accepted, extent, count)
    } else {
        accepted
    }
}
