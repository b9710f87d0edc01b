//! 1-D position histogram with Gaussian deposits and peak picking.

/// Histogram over `[0, extent)` with one bin per unit.
///
/// Bin `i` represents the coordinate `i + 0.5`.
pub(crate) struct PositionHistogram {
    bins: Vec<f64>,
}

/// Minimum bin value for a local maximum to count as a peak.
const PEAK_MIN_VALUE: f64 = 0.01;

impl PositionHistogram {
    pub(crate) fn new(extent: f64) -> Self {
        let n = extent.ceil().max(1.0) as usize;
        Self { bins: vec![0.0; n] }
    }

    /// Deposit a Gaussian of width `sigma` centered at `pos`, truncated at
    /// ±3σ.
    pub(crate) fn deposit(&mut self, pos: f64, sigma: f64) {
        let sigma = sigma.max(1e-9);
        let reach = 3.0 * sigma;
        let lo = ((pos - reach - 0.5).floor().max(0.0)) as usize;
        let hi = ((pos + reach - 0.5).ceil().max(0.0) as usize).min(self.bins.len().saturating_sub(1));
        let inv = 1.0 / (2.0 * sigma * sigma);
        for i in lo..=hi {
            let d = (i as f64 + 0.5) - pos;
            self.bins[i] += (-d * d * inv).exp();
        }
    }

    /// Local maxima above the noise floor, as `(position, height)` sorted by
    /// descending height. Bins beyond the ends count as empty.
    pub(crate) fn peaks(&self) -> Vec<(f64, f64)> {
        let n = self.bins.len();
        let mut found = Vec::new();
        for i in 0..n {
            let v = self.bins[i];
            if v <= PEAK_MIN_VALUE {
                continue;
            }
            let left = if i > 0 { self.bins[i - 1] } else { 0.0 };
            let right = if i + 1 < n { self.bins[i + 1] } else { 0.0 };
            if v >= left && v >= right {
                found.push((i as f64 + 0.5, v));
            }
        }
        found.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        found
    }
}

/// Non-maximum suppression over height-ordered peaks.
///
/// Accepts peaks in order of height while each stays at least `min_distance`
/// away from every accepted one, stopping at `max_count`. Returns the
/// accepted positions in ascending order.
pub(crate) fn suppress_peaks(
    peaks: &[(f64, f64)],
    min_distance: f64,
    max_count: usize,
) -> Vec<f64> {
    let mut accepted: Vec<f64> = Vec::with_capacity(max_count);
    for &(pos, _) in peaks {
        if accepted.len() >= max_count {
            break;
        }
        if accepted.iter().all(|&a| (pos - a).abs() >= min_distance) {
            accepted.push(pos);
        }
    }
    accepted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_peaks_at_the_position() {
        let mut hist = PositionHistogram::new(30.0);
        hist.deposit(10.5, 2.0);
        let peaks = hist.peaks();
        assert!(!peaks.is_empty());
        assert!(
            (peaks[0].0 - 10.5).abs() <= 0.5,
            "peak at {} should sit near the deposit",
            peaks[0].0
        );
    }

    #[test]
    fn well_separated_deposits_give_distinct_peaks() {
        let mut hist = PositionHistogram::new(100.0);
        for &pos in &[20.0, 50.0, 80.0] {
            hist.deposit(pos, 2.0);
        }
        let peaks = hist.peaks();
        let accepted = suppress_peaks(&peaks, 3.5, 3);
        assert_eq!(accepted.len(), 3);
        for (got, expect) in accepted.iter().zip(&[20.0, 50.0, 80.0]) {
            assert!(
                (got - expect).abs() <= 1.0,
                "peak {got} should be within a pixel of {expect}"
            );
        }
    }

    #[test]
    fn suppression_drops_near_duplicates() {
        let peaks = vec![(10.0, 5.0), (11.0, 4.0), (30.0, 3.0)];
        let accepted = suppress_peaks(&peaks, 3.5, 10);
        assert_eq!(accepted, vec![10.0, 30.0]);
    }

    #[test]
    fn suppression_respects_max_count() {
        let peaks = vec![(10.0, 5.0), (20.0, 4.0), (30.0, 3.0)];
        let accepted = suppress_peaks(&peaks, 3.5, 2);
        assert_eq!(accepted, vec![10.0, 20.0]);
    }

    #[test]
    fn empty_histogram_has_no_peaks() {
        let hist = PositionHistogram::new(50.0);
        assert!(hist.peaks().is_empty());
    }
}
