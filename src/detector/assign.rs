//! Assignment of filtered blobs to grid cells.
//!
//! Each blob is matched to the nearest column center by centroid X and the
//! nearest row center by centroid Y. The pair is accepted only when both
//! distances stay strictly inside the gate, a fraction of the average
//! lattice spacing; accepted blobs OR their cell into the grid, so several
//! blobs landing in one cell read as a single punch.

use crate::blobs::Blob;
use crate::types::CellGrid;

/// Average gap between consecutive axis positions.
///
/// A single-entry axis has no gaps; the full extent stands in so that any
/// blob on that axis passes the gate.
fn average_spacing(axis: &[f64], extent: f64) -> f64 {
    if axis.len() < 2 {
        return extent;
    }
    (axis[axis.len() - 1] - axis[0]) / (axis.len() - 1) as f64
}

/// Index of the axis position closest to `value`.
fn nearest_index(axis: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &pos) in axis.iter().enumerate() {
        let d = (value - pos).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Build the punch grid from blobs and fitted axes.
///
/// `gate` is the acceptance fraction of the average spacing along each axis.
pub fn assign_to_grid(
    blobs: &[Blob],
    col_centers: &[f64],
    row_centers: &[f64],
    col_extent: f64,
    row_extent: f64,
    gate: f64,
) -> CellGrid {
    let mut grid = CellGrid::new(col_centers.len(), row_centers.len());
    if col_centers.is_empty() || row_centers.is_empty() {
        return grid;
    }

    let col_gate = gate * average_spacing(col_centers, col_extent);
    let row_gate = gate * average_spacing(row_centers, row_extent);

    for blob in blobs {
        let col = nearest_index(col_centers, blob.center_x);
        let row = nearest_index(row_centers, blob.center_y);
        let col_dist = (blob.center_x - col_centers[col]).abs();
        let row_dist = (blob.center_y - row_centers[row]).abs();
        if col_dist < col_gate && row_dist < row_gate {
            grid.mark(row, col);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_at(x: f64, y: f64) -> Blob {
        Blob {
            center_x: x,
            center_y: y,
            area: 10,
            min_x: 0,
            max_x: 3,
            min_y: 0,
            max_y: 3,
        }
    }

    #[test]
    fn blob_near_a_center_marks_its_cell() {
        let cols = vec![5.0, 15.0, 25.0];
        let rows = vec![5.0, 15.0];
        let grid = assign_to_grid(&[blob_at(15.4, 5.2)], &cols, &rows, 30.0, 20.0, 0.6);
        assert!(grid.get(0, 1));
        assert_eq!(grid.punched_count(), 1);
    }

    #[test]
    fn blob_between_centers_is_rejected() {
        let cols = vec![5.0, 15.0];
        let rows = vec![5.0, 15.0];
        // Gate is 0.6 * 10 = 6; X distance 5 passes, Y distance 7 fails.
        let grid = assign_to_grid(&[blob_at(10.0, 22.0)], &cols, &rows, 20.0, 20.0, 0.6);
        assert_eq!(grid.punched_count(), 0);
    }

    #[test]
    fn two_blobs_in_one_cell_collapse() {
        let cols = vec![5.0, 15.0];
        let rows = vec![5.0, 15.0];
        let blobs = [blob_at(4.0, 5.0), blob_at(6.0, 5.5)];
        let grid = assign_to_grid(&blobs, &cols, &rows, 20.0, 20.0, 0.6);
        assert!(grid.get(0, 0));
        assert_eq!(grid.punched_count(), 1);
    }

    #[test]
    fn single_entry_axis_accepts_by_extent() {
        let cols = vec![10.0];
        let rows = vec![10.0];
        let grid = assign_to_grid(&[blob_at(3.0, 16.0)], &cols, &rows, 20.0, 20.0, 0.6);
        assert!(grid.get(0, 0));
    }
}
