//! Shape filter rejecting blobs inconsistent with the expected punch size.

use super::Blob;

/// Fraction of the expected area below which a blob is noise.
const MIN_AREA_FACTOR: f64 = 0.15;
/// Multiple of the expected area above which a blob is a smear or shadow.
const MAX_AREA_FACTOR: f64 = 5.0;
/// Bounding-box elongation beyond which a blob is a crack or scratch.
const MAX_ASPECT: f64 = 5.0;

/// Expected punch area in rectified pixels for the given cell size.
///
/// `blob_size_percent` expresses the punch area as a percentage of one
/// cell's `s × s` pixel footprint.
pub fn expected_punch_area(samples_per_cell: usize, blob_size_percent: f64) -> f64 {
    let s = samples_per_cell as f64;
    s * s * blob_size_percent / 100.0
}

/// Retain only blobs plausible as punches of `expected_area` pixels.
///
/// The area band is generous to absorb lighting variation; the aspect cap
/// rejects cracks and long scratches.
pub fn filter_blobs(blobs: Vec<Blob>, expected_area: f64) -> Vec<Blob> {
    blobs
        .into_iter()
        .filter(|blob| {
            let area = blob.area as f64;
            area >= MIN_AREA_FACTOR * expected_area
                && area <= MAX_AREA_FACTOR * expected_area
                && blob.aspect() <= MAX_ASPECT
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(area: u32, w: u32, h: u32) -> Blob {
        Blob {
            center_x: 0.0,
            center_y: 0.0,
            area,
            min_x: 0,
            max_x: w,
            min_y: 0,
            max_y: h,
        }
    }

    #[test]
    fn keeps_blob_near_expected_area() {
        let expected = expected_punch_area(10, 50.0);
        assert_eq!(expected, 50.0);
        let kept = filter_blobs(vec![blob(50, 7, 7)], expected);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn rejects_tiny_and_huge_blobs() {
        let expected = 50.0;
        assert!(filter_blobs(vec![blob(5, 2, 2)], expected).is_empty());
        assert!(filter_blobs(vec![blob(500, 25, 25)], expected).is_empty());
        // Band edges are inclusive.
        assert_eq!(filter_blobs(vec![blob(8, 3, 3)], expected).len(), 1);
        assert_eq!(filter_blobs(vec![blob(250, 18, 18)], expected).len(), 1);
    }

    #[test]
    fn rejects_elongated_blobs() {
        // A 1 × 30 sliver passes the area band but not the aspect cap.
        let expected = 50.0;
        assert!(filter_blobs(vec![blob(30, 0, 29)], expected).is_empty());
    }

    #[test]
    fn aspect_guards_single_pixel_spans() {
        let b = blob(10, 0, 9);
        assert_eq!(b.aspect(), 9.0);
        let square = blob(10, 3, 3);
        assert_eq!(square.aspect(), 1.0);
    }
}
