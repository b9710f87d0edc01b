//! Resampling of the source photograph onto the regular grid-space lattice.
//!
//! The rectified raster spans `cols · s × rows · s` pixels, `s` samples per
//! cell. Each output pixel maps its grid coordinate through the surface
//! patch, reads the nearest source pixel as grayscale, and falls back to
//! neutral gray for samples that land outside the photograph. Downstream
//! stages (threshold, labeling, lattice fit) then operate on a frame where
//! punch geometry is uniform across the card.

use crate::image::{GrayBuffer, SourceImage};
use crate::surface::SurfacePatch;

/// Grayscale substituted for samples outside the source image.
pub const OUTSIDE_GRAY: u8 = 128;

/// Sample the source image onto a `cols·s × rows·s` rectified raster.
pub fn rectify(
    source: &SourceImage<'_>,
    patch: &SurfacePatch,
    cols: usize,
    rows: usize,
    samples_per_cell: usize,
) -> GrayBuffer {
    let s = samples_per_cell.max(1);
    let w = cols * s;
    let h = rows * s;
    let mut out = GrayBuffer::filled(w, h, OUTSIDE_GRAY);

    let fill_row = |y: usize, row: &mut [u8]| {
        let r = y as f64 / s as f64;
        for (x, px) in row.iter_mut().enumerate() {
            let c = x as f64 / s as f64;
            let p = patch.map(c, r);
            let xi = p.x.floor() as i64;
            let yi = p.y.floor() as i64;
            *px = if source.contains(xi, yi) {
                source.luma(xi as usize, yi as usize)
            } else {
                OUTSIDE_GRAY
            };
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.data
            .par_chunks_mut(w.max(1))
            .enumerate()
            .for_each(|(y, row)| fill_row(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    for (y, row) in out.data.chunks_mut(w.max(1)).enumerate() {
        fill_row(y, row);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Boundary;
    use crate::image::GrayView;
    use crate::types::Point;

    #[test]
    fn rectangular_boundary_copies_pixels() {
        // 4×4 source with a distinctive pixel; unit-scale rectification.
        let mut data = vec![200u8; 16];
        data[2 * 4 + 1] = 9;
        let source = SourceImage::Gray(GrayView {
            w: 4,
            h: 4,
            stride: 4,
            data: &data,
        });
        let boundary = Boundary::rect(4.0, 4.0).unwrap();
        let patch = SurfacePatch::new(&boundary, 4, 4);
        let rect = rectify(&source, &patch, 4, 4, 1);
        assert_eq!(rect.w, 4);
        assert_eq!(rect.h, 4);
        assert_eq!(rect.get(1, 2), 9);
        assert_eq!(rect.get(0, 0), 200);
    }

    #[test]
    fn samples_outside_the_image_become_neutral_gray() {
        let data = vec![0u8; 4];
        let source = SourceImage::Gray(GrayView {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        });
        // Boundary reaches beyond the 2×2 source.
        let boundary = Boundary::quad([
            Point::new(-5.0, -5.0),
            Point::new(10.0, -5.0),
            Point::new(10.0, 10.0),
            Point::new(-5.0, 10.0),
        ])
        .unwrap();
        let patch = SurfacePatch::new(&boundary, 3, 3);
        let rect = rectify(&source, &patch, 3, 3, 2);
        assert_eq!(rect.get(0, 0), OUTSIDE_GRAY);
        assert!(
            rect.data.iter().any(|&v| v == 0),
            "interior samples should still read the dark source"
        );
    }
}
