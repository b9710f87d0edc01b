//! Catmull–Rom spline through an ordered list of defining points.
//!
//! Interior segments use the uniform-parameterization Catmull–Rom basis. The
//! missing phantom control point at each end is reflected across the endpoint
//! (`p₋₁ = 2·p₀ − p₁` and symmetric at the far end), which keeps the curve C¹
//! at the endpoints. With only two defining points the spline degenerates to
//! a straight segment.

use crate::types::Point;

#[derive(Clone, Debug)]
pub struct CatmullRom {
    points: Vec<Point>,
}

impl CatmullRom {
    /// Build a spline through `points`. At least two points are required.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(points.len() >= 2, "spline requires at least two points");
        Self { points }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Evaluate at `t ∈ [0, 1]`, parameterized uniformly across segments.
    pub fn eval(&self, t: f64) -> Point {
        let n = self.points.len();
        if n == 2 {
            let t = t.clamp(0.0, 1.0);
            return self.points[0] * (1.0 - t) + self.points[1] * t;
        }

        let segments = (n - 1) as f64;
        let u = t.clamp(0.0, 1.0) * segments;
        let seg = (u.floor() as usize).min(n - 2);
        let local = u - seg as f64;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg == 0 {
            p1 * 2.0 - p2
        } else {
            self.points[seg - 1]
        };
        let p3 = if seg + 2 >= n {
            p2 * 2.0 - p1
        } else {
            self.points[seg + 2]
        };

        catmull_rom(p0, p1, p2, p3, local)
    }
}

/// Uniform Catmull–Rom basis on one segment, `t ∈ [0, 1]` between `p1` and `p2`.
#[inline]
fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let a = p1 * 2.0;
    let b = (p2 - p0) * t;
    let c = (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2;
    let d = ((p1 - p2) * 3.0 + p3 - p0) * t3;
    (a + b + c + d) * 0.5
}
