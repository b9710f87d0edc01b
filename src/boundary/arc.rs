//! Arc-length reparameterization table for an edge spline.
//!
//! Uniform spline parameters do not advance uniformly in space when the
//! defining points are unevenly spread, so opposite edges interpolated by raw
//! parameter shear against each other. The table stores cumulative chord
//! lengths at uniformly sampled parameters; lookups binary-search the table
//! and interpolate linearly between entries.

use super::spline::CatmullRom;

/// Number of uniform parameter samples in the table.
const ARC_SAMPLES: usize = 200;

#[derive(Clone, Debug)]
pub struct ArcTable {
    /// Cumulative chord length at parameter `i / ARC_SAMPLES`; monotonic
    /// nondecreasing, first entry 0, last entry the full spline length.
    cumulative: Vec<f64>,
}

impl ArcTable {
    pub fn build(spline: &CatmullRom) -> Self {
        let mut cumulative = Vec::with_capacity(ARC_SAMPLES + 1);
        cumulative.push(0.0);
        let mut prev = spline.eval(0.0);
        let mut total = 0.0;
        for i in 1..=ARC_SAMPLES {
            let p = spline.eval(i as f64 / ARC_SAMPLES as f64);
            total += prev.distance(p);
            cumulative.push(total);
            prev = p;
        }
        Self { cumulative }
    }

    /// Full length of the sampled spline.
    pub fn total_length(&self) -> f64 {
        *self.cumulative.last().unwrap_or(&0.0)
    }

    /// Spline parameter at which arc length reaches `t · total_length`,
    /// for `t ∈ [0, 1]`.
    pub fn param_at(&self, t: f64) -> f64 {
        let total = self.total_length();
        if total <= 0.0 {
            return t.clamp(0.0, 1.0);
        }
        let target = t.clamp(0.0, 1.0) * total;

        // First entry with cumulative >= target; entry 0 is always 0.0.
        let hi = self
            .cumulative
            .partition_point(|&len| len < target)
            .clamp(1, ARC_SAMPLES);
        let lo = hi - 1;
        let span = self.cumulative[hi] - self.cumulative[lo];
        let frac = if span > 0.0 {
            (target - self.cumulative[lo]) / span
        } else {
            0.0
        };
        (lo as f64 + frac) / ARC_SAMPLES as f64
    }
}
