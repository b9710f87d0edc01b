//! Card boundary model: four corners plus optional per-edge midpoints.
//!
//! The boundary encloses the card with four smooth curves. Each edge is a
//! Catmull–Rom spline through its defining points (the two corners plus up to
//! five midpoints); an edge without midpoints is a straight segment. Edges
//! are evaluated by arc length so that opposite curves of different lengths
//! stay aligned when blended across the enclosed surface.
//!
//! Conventions
//! - Corners are ordered top-left, top-right, bottom-right, bottom-left.
//! - Midpoints are listed in traversal order along their edge: top and
//!   bottom run left→right, left and right run top→bottom.
//! - All four curves are oriented so that parameter 0 sits at the top/left
//!   end: `top(0) = TL`, `bottom(0) = BL`, `left(0) = TL`, `right(0) = TR`.

mod arc;
mod spline;

pub use arc::ArcTable;
pub use spline::CatmullRom;

use crate::types::Point;

/// Maximum number of midpoints per edge.
pub const MAX_EDGE_MIDPOINTS: usize = 5;

/// Edge index within a [`Boundary`]: top, right, bottom, left.
pub const EDGE_TOP: usize = 0;
pub const EDGE_RIGHT: usize = 1;
pub const EDGE_BOTTOM: usize = 2;
pub const EDGE_LEFT: usize = 3;

/// Validated card boundary.
#[derive(Clone, Debug)]
pub struct Boundary {
    corners: [Point; 4],
    midpoints: [Vec<Point>; 4],
}

impl Boundary {
    /// Build a boundary from corners (TL, TR, BR, BL) and per-edge midpoint
    /// lists (top, right, bottom, left).
    ///
    /// Fails when corners coincide or an edge carries more than
    /// [`MAX_EDGE_MIDPOINTS`] midpoints.
    pub fn new(corners: [Point; 4], midpoints: [Vec<Point>; 4]) -> Result<Self, String> {
        for i in 0..4 {
            for j in (i + 1)..4 {
                if corners[i].distance(corners[j]) < 1e-9 {
                    return Err(format!(
                        "boundary corners {i} and {j} coincide at ({}, {})",
                        corners[i].x, corners[i].y
                    ));
                }
            }
        }
        for (edge, mids) in midpoints.iter().enumerate() {
            if mids.len() > MAX_EDGE_MIDPOINTS {
                return Err(format!(
                    "edge {edge} has {} midpoints, at most {MAX_EDGE_MIDPOINTS} allowed",
                    mids.len()
                ));
            }
        }
        Ok(Self { corners, midpoints })
    }

    /// Straight-edged quadrilateral from its four corners.
    pub fn quad(corners: [Point; 4]) -> Result<Self, String> {
        Self::new(corners, Default::default())
    }

    /// Axis-aligned rectangle spanning `(0, 0)` to `(w, h)`.
    pub fn rect(w: f64, h: f64) -> Result<Self, String> {
        Self::quad([
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ])
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    pub fn midpoints(&self, edge: usize) -> &[Point] {
        &self.midpoints[edge]
    }

    /// Defining points of an edge in traversal order, corners included.
    ///
    /// Top and bottom run left→right, left and right run top→bottom, so the
    /// four returned sequences share their endpoints at the corners.
    pub fn edge_points(&self, edge: usize) -> Vec<Point> {
        let [tl, tr, br, bl] = self.corners;
        let (start, end) = match edge {
            EDGE_TOP => (tl, tr),
            EDGE_RIGHT => (tr, br),
            EDGE_BOTTOM => (bl, br),
            EDGE_LEFT => (tl, bl),
            _ => panic!("edge index {edge} out of range"),
        };
        let mids = &self.midpoints[edge];
        let mut points = Vec::with_capacity(mids.len() + 2);
        points.push(start);
        points.extend_from_slice(mids);
        points.push(end);
        points
    }
}

/// One boundary edge, evaluated by normalized arc length.
#[derive(Clone, Debug)]
pub struct EdgeCurve {
    spline: CatmullRom,
    arc: ArcTable,
}

impl EdgeCurve {
    pub fn new(points: Vec<Point>) -> Self {
        let spline = CatmullRom::new(points);
        let arc = ArcTable::build(&spline);
        Self { spline, arc }
    }

    /// Point at arc-length fraction `t ∈ [0, 1]` along the edge.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.spline.eval(self.arc.param_at(t))
    }

    pub fn length(&self) -> f64 {
        self.arc.total_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_coincident_corners() {
        let result = Boundary::quad([
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_too_many_midpoints() {
        let mids = vec![Point::new(1.0, 0.1); 6];
        let result = Boundary::new(
            [
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            [mids, Vec::new(), Vec::new(), Vec::new()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn edge_points_share_corners() {
        let boundary = Boundary::rect(20.0, 10.0).unwrap();
        let top = boundary.edge_points(EDGE_TOP);
        let left = boundary.edge_points(EDGE_LEFT);
        let bottom = boundary.edge_points(EDGE_BOTTOM);
        let right = boundary.edge_points(EDGE_RIGHT);
        assert_eq!(top[0], left[0], "top and left start at TL");
        assert_eq!(bottom[0], *left.last().unwrap(), "bottom starts at BL");
        assert_eq!(*top.last().unwrap(), right[0], "top ends at TR");
        assert_eq!(
            *bottom.last().unwrap(),
            *right.last().unwrap(),
            "bottom and right end at BR"
        );
    }

    #[test]
    fn straight_edge_curve_is_linear_in_arc_length() {
        let curve = EdgeCurve::new(vec![Point::new(0.0, 0.0), Point::new(8.0, 0.0)]);
        let p = curve.at(0.25);
        assert!((p.x - 2.0).abs() < 1e-9);
        assert!((curve.length() - 8.0).abs() < 1e-9);
    }
}
