//! Surface map between grid space and the image plane.
//!
//! The four boundary curves bound a Coons patch: opposite curves are blended
//! linearly and the bilinear interpolation of the corners is subtracted as
//! the correction term. Because every edge is evaluated by arc length, the
//! patch degrades gracefully to the exact bilinear map for straight edges
//! and stays shear-free for bowed ones.
//!
//! The inverse map solves `S(u, v) = p` with a damped Newton iteration using
//! a central-difference Jacobian. A query outside the patch, or one that
//! meets a degenerate Jacobian, reports a miss rather than an error.

use nalgebra::{Matrix2, Vector2};

use crate::boundary::{Boundary, EdgeCurve, EDGE_BOTTOM, EDGE_LEFT, EDGE_RIGHT, EDGE_TOP};
use crate::types::Point;

const NEWTON_MAX_ITERS: usize = 15;
const NEWTON_STEP: f64 = 1e-3;
const NEWTON_DAMPING: f64 = 0.5;
const JACOBIAN_DET_MIN: f64 = 1e-4;
const DOMAIN_EPS: f64 = 1e-3;

/// Coons patch over a card boundary, mapping grid coordinates
/// `(c, r) ∈ [0, cols] × [0, rows]` to image-plane points.
#[derive(Debug)]
pub struct SurfacePatch {
    top: EdgeCurve,
    right: EdgeCurve,
    bottom: EdgeCurve,
    left: EdgeCurve,
    corners: [Point; 4],
    cols: f64,
    rows: f64,
}

impl SurfacePatch {
    pub fn new(boundary: &Boundary, cols: usize, rows: usize) -> Self {
        Self {
            top: EdgeCurve::new(boundary.edge_points(EDGE_TOP)),
            right: EdgeCurve::new(boundary.edge_points(EDGE_RIGHT)),
            bottom: EdgeCurve::new(boundary.edge_points(EDGE_BOTTOM)),
            left: EdgeCurve::new(boundary.edge_points(EDGE_LEFT)),
            corners: *boundary.corners(),
            cols: cols.max(1) as f64,
            rows: rows.max(1) as f64,
        }
    }

    /// Image point for grid coordinate `(c, r)`.
    #[inline]
    pub fn map(&self, c: f64, r: f64) -> Point {
        self.map_uv(c / self.cols, r / self.rows)
    }

    /// Coons evaluation at normalized coordinates `(u, v) ∈ [0, 1]²`.
    fn map_uv(&self, u: f64, v: f64) -> Point {
        let [tl, tr, br, bl] = self.corners;
        let edge_blend = self.top.at(u) * (1.0 - v)
            + self.bottom.at(u) * v
            + self.left.at(v) * (1.0 - u)
            + self.right.at(v) * u;
        let corner_blend = tl * ((1.0 - u) * (1.0 - v))
            + tr * (u * (1.0 - v))
            + br * (u * v)
            + bl * ((1.0 - u) * v);
        edge_blend - corner_blend
    }

    /// Grid coordinate whose forward map lands on `p`, or `None` when the
    /// point falls outside the patch or the iteration hits a degenerate
    /// Jacobian.
    pub fn invert(&self, p: Point) -> Option<(f64, f64)> {
        let mut u = 0.5;
        let mut v = 0.5;

        // Damped steps halve the residual per iteration; the full budget
        // is needed for sub-pixel accuracy.
        for _ in 0..NEWTON_MAX_ITERS {
            let residual = self.map_uv(u, v) - p;
            let h = NEWTON_STEP;
            let du = (self.map_uv(u + h, v) - self.map_uv(u - h, v)) * (0.5 / h);
            let dv = (self.map_uv(u, v + h) - self.map_uv(u, v - h)) * (0.5 / h);
            let jacobian = Matrix2::new(du.x, dv.x, du.y, dv.y);
            if jacobian.determinant().abs() < JACOBIAN_DET_MIN {
                return None;
            }
            let step = jacobian.try_inverse()? * Vector2::new(residual.x, residual.y);
            u -= NEWTON_DAMPING * step[0];
            v -= NEWTON_DAMPING * step[1];
        }

        let inside = (-DOMAIN_EPS..=1.0 + DOMAIN_EPS).contains(&u)
            && (-DOMAIN_EPS..=1.0 + DOMAIN_EPS).contains(&v);
        inside.then_some((u * self.cols, v * self.rows))
    }
}
