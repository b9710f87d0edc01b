//! Two-pass connected-component labeling with union-find.
//!
//! Pass 1 scans row-major and assigns provisional labels from the left and
//! up neighbors (4-connectivity), recording label equivalences in a
//! union-find. Pass 2 resolves every pixel to its root label and
//! accumulates per-root centroid sums, area, and bounding box.

use super::Blob;
use crate::image::BinaryMask;

/// Union-find over provisional labels; label 0 is background.
struct Labels {
    parent: Vec<u32>,
}

impl Labels {
    fn new() -> Self {
        // Slot 0 is the background sentinel.
        Self { parent: vec![0] }
    }

    fn make(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    /// Root of `label`, compressing the path by halving.
    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grandparent = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grandparent;
            label = grandparent;
        }
        label
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

#[derive(Clone)]
struct BlobAccumulator {
    sum_x: u64,
    sum_y: u64,
    area: u32,
    min_x: u32,
    max_x: u32,
    min_y: u32,
    max_y: u32,
}

impl BlobAccumulator {
    fn new(x: u32, y: u32) -> Self {
        Self {
            sum_x: 0,
            sum_y: 0,
            area: 0,
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    #[inline]
    fn push(&mut self, x: u32, y: u32) {
        self.sum_x += x as u64;
        self.sum_y += y as u64;
        self.area += 1;
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    fn into_blob(self) -> Blob {
        Blob {
            center_x: self.sum_x as f64 / self.area as f64,
            center_y: self.sum_y as f64 / self.area as f64,
            area: self.area,
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
        }
    }
}

/// Extract all connected foreground regions of `mask`.
///
/// Blobs are returned in scan order of their first pixel.
pub fn label_blobs(mask: &BinaryMask) -> Vec<Blob> {
    let w = mask.w;
    let h = mask.h;
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut labels = Labels::new();
    let mut label_map = vec![0u32; w * h];

    for y in 0..h {
        for x in 0..w {
            if mask.get(x, y) == 0 {
                continue;
            }
            let left = if x > 0 { label_map[y * w + x - 1] } else { 0 };
            let up = if y > 0 { label_map[(y - 1) * w + x] } else { 0 };
            let label = match (left, up) {
                (0, 0) => labels.make(),
                (l, 0) => l,
                (0, u) => u,
                (l, u) => {
                    if l != u {
                        labels.union(l, u);
                    }
                    l
                }
            };
            label_map[y * w + x] = label;
        }
    }

    let mut accumulators: Vec<Option<BlobAccumulator>> = vec![None; labels.parent.len()];
    let mut order = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let label = label_map[y * w + x];
            if label == 0 {
                continue;
            }
            let root = labels.find(label) as usize;
            let acc = accumulators[root]
                .get_or_insert_with(|| {
                    order.push(root);
                    BlobAccumulator::new(x as u32, y as u32)
                });
            acc.push(x as u32, y as u32);
        }
    }

    order
        .into_iter()
        .filter_map(|root| accumulators[root].take())
        .map(BlobAccumulator::into_blob)
        .collect()
}
