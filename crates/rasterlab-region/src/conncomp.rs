//! Connected component labeling
//!
//! Two-pass equivalence-class labeling over binary BGRA buffers.
//! The first pass assigns provisional labels in raster order, looking
//! at the four already-visited 8-neighbors (upper-left, upper,
//! upper-right, left) and recording label equivalences in a
//! disjoint-set structure. The second pass resolves each provisional
//! label to its canonical class, compacts classes to a dense 1..N
//! index in first-appearance order, and accumulates per-component
//! statistics.
//!
//! With all four upward/leftward neighbors unioned on every
//! foreground pixel, the disjoint set already forms the complete
//! 8-connected closure, so no extra re-scan pass is needed.

use rasterlab_core::{PixelBuffer, Point, Rgb, Size};

use crate::error::RegionResult;

/// One connected component of a labeled buffer.
///
/// Index 0 of the labeling result is a background sentinel with zero
/// area; real components start at index 1.
#[derive(Debug, Clone)]
pub struct Label {
    /// Top-left corner of the bounding box
    pub pos: Point,
    /// Bottom-right corner of the bounding box (inclusive)
    pub pos_dr: Point,
    /// Bounding box extent, `pos_dr - pos + 1` per axis
    pub size: Size,
    /// Foreground pixel count
    pub area: u32,
    /// Integer-truncated mean pixel coordinate
    pub centroid: Point,
    /// Full-size buffer holding only this component's pixels in white
    pub mask: PixelBuffer,
}

/// Disjoint set with path compression and union by rank.
///
/// Element 0 is the background and never merged.
struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new() -> Self {
        Self {
            parent: vec![0],
            rank: vec![0],
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        while self.parent[x as usize] != root {
            let next = self.parent[x as usize];
            self.parent[x as usize] = root;
            x = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            std::cmp::Ordering::Less => self.parent[ra as usize] = rb,
            std::cmp::Ordering::Greater => self.parent[rb as usize] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb as usize] = ra;
                self.rank[ra as usize] += 1;
            }
        }
    }
}

/// Per-component accumulator for the materialization scan.
struct Stats {
    area: u32,
    sum_x: i64,
    sum_y: i64,
    min: Point,
    max: Point,
    mask: PixelBuffer,
}

impl Stats {
    fn new(width: u32, height: u32) -> Self {
        Self {
            area: 0,
            sum_x: 0,
            sum_y: 0,
            min: Point::new(width as i32, height as i32),
            max: Point::ORIGIN,
            mask: PixelBuffer::new_filled(width, height, Rgb::BLACK),
        }
    }

    fn into_label(self) -> Label {
        if self.area == 0 {
            return Label {
                pos: Point::ORIGIN,
                pos_dr: Point::ORIGIN,
                size: Size::new(0, 0),
                area: 0,
                centroid: Point::ORIGIN,
                mask: self.mask,
            };
        }
        Label {
            pos: self.min,
            pos_dr: self.max,
            size: Size::new(self.max.x - self.min.x + 1, self.max.y - self.min.y + 1),
            area: self.area,
            // Truncating division of the coordinate sums
            centroid: Point::new(
                (self.sum_x / self.area as i64) as i32,
                (self.sum_y / self.area as i64) as i32,
            ),
            mask: self.mask,
        }
    }
}

/// Label the 8-connected white components of a binary buffer.
///
/// Returns one [`Label`] per component, preceded by the background
/// sentinel at index 0. Components appear in the order their first
/// pixel is met in raster order.
pub fn label_components(buf: &PixelBuffer) -> RegionResult<Vec<Label>> {
    let w = buf.width();
    let h = buf.height();

    let mut provisional = vec![0u32; (w as usize) * (h as usize)];
    let mut classes = DisjointSet::new();

    // Already-visited 8-neighbors, relative to the current pixel
    const NEIGHBORS: [(i32, i32); 4] = [(-1, -1), (0, -1), (1, -1), (-1, 0)];

    for y in 0..h {
        for x in 0..w {
            if !buf.is_white(x, y) {
                continue;
            }

            let mut label = 0u32;
            for (dx, dy) in NEIGHBORS {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 {
                    continue;
                }
                let n = provisional[(ny as usize) * (w as usize) + nx as usize];
                if n == 0 {
                    continue;
                }
                if label == 0 {
                    label = n;
                } else {
                    classes.union(label, n);
                    if n < label {
                        label = n;
                    }
                }
            }

            if label == 0 {
                label = classes.make_set();
            }
            provisional[(y as usize) * (w as usize) + x as usize] = label;
        }
    }

    // Compaction and materialization in one re-scan. Classes get their
    // dense index at first appearance; slot 0 stays the sentinel.
    let mut compact = vec![0usize; classes.len()];
    let mut stats = vec![Stats::new(w, h)];

    for y in 0..h {
        for x in 0..w {
            let p = provisional[(y as usize) * (w as usize) + x as usize];
            if p == 0 {
                continue;
            }
            let root = classes.find(p) as usize;
            let mut slot = compact[root];
            if slot == 0 {
                stats.push(Stats::new(w, h));
                slot = stats.len() - 1;
                compact[root] = slot;
            }

            let s = &mut stats[slot];
            s.area += 1;
            s.sum_x += x as i64;
            s.sum_y += y as i64;
            s.min.x = s.min.x.min(x as i32);
            s.min.y = s.min.y.min(y as i32);
            s.max.x = s.max.x.max(x as i32);
            s.max.y = s.max.y.max(y as i32);
            s.mask.set(x, y, Rgb::WHITE)?;
        }
    }

    Ok(stats.into_iter().map(Stats::into_label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_white(width: u32, height: u32, pixels: &[(u32, u32)]) -> PixelBuffer {
        let mut buf = PixelBuffer::new_filled(width, height, Rgb::BLACK);
        for &(x, y) in pixels {
            buf.set(x, y, Rgb::WHITE).unwrap();
        }
        buf
    }

    #[test]
    fn empty_buffer_yields_only_sentinel() {
        let buf = PixelBuffer::new_filled(8, 8, Rgb::BLACK);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].area, 0);
        assert_eq!(labels[0].centroid, Point::ORIGIN);
    }

    #[test]
    fn single_pixel_component() {
        let buf = with_white(10, 10, &[(3, 4)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 2);

        let label = &labels[1];
        assert_eq!(label.area, 1);
        assert_eq!(label.pos, Point::new(3, 4));
        assert_eq!(label.pos_dr, Point::new(3, 4));
        assert_eq!(label.size, Size::new(1, 1));
        assert_eq!(label.centroid, Point::new(3, 4));
        assert!(label.mask.is_white(3, 4));
    }

    #[test]
    fn diagonal_pixels_are_one_component() {
        let buf = with_white(10, 10, &[(2, 2), (3, 3)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].area, 2);
    }

    #[test]
    fn anti_diagonal_pixels_are_one_component() {
        let buf = with_white(10, 10, &[(3, 2), (2, 3)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn disjoint_components_keep_raster_order() {
        let buf = with_white(10, 10, &[(7, 1), (1, 5), (2, 5)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 3);
        // First-appearance order: the pixel at row 1 comes first.
        assert_eq!(labels[1].pos, Point::new(7, 1));
        assert_eq!(labels[2].pos, Point::new(1, 5));
        assert_eq!(labels[2].area, 2);
    }

    #[test]
    fn u_shape_merges_into_one_component() {
        // Two descending arms joined at the bottom. The arms get
        // distinct provisional labels that must union at the base.
        let mut pixels = Vec::new();
        for y in 0..5 {
            pixels.push((1, y));
            pixels.push((5, y));
        }
        for x in 1..=5 {
            pixels.push((x, 5));
        }
        let buf = with_white(8, 8, &pixels);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].area, 15);
        assert_eq!(labels[1].pos, Point::new(1, 0));
        assert_eq!(labels[1].pos_dr, Point::new(5, 5));
        assert_eq!(labels[1].size, Size::new(5, 6));
    }

    #[test]
    fn w_shape_chains_three_provisional_labels() {
        // Three arms meeting through diagonal links at the bottom row,
        // forcing a chain of unions.
        let buf = with_white(
            9,
            3,
            &[(1, 0), (4, 0), (7, 0), (1, 1), (4, 1), (7, 1), (2, 2), (3, 2), (5, 2), (6, 2)],
        );
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].area, 10);
    }

    #[test]
    fn centroid_is_truncated() {
        // Sums 0+1+3 = 4 over area 3 -> 1, not rounded to 1.33
        let buf = with_white(10, 1, &[(0, 0), (1, 0), (3, 0)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels[1].centroid, Point::new(1, 0));
    }

    #[test]
    fn masks_partition_the_foreground() {
        let buf = with_white(6, 6, &[(0, 0), (1, 0), (4, 4), (5, 5)]);
        let labels = label_components(&buf).unwrap();
        assert_eq!(labels.len(), 3);

        for (x, y) in [(0, 0), (1, 0)] {
            assert!(labels[1].mask.is_white(x, y));
            assert!(!labels[2].mask.is_white(x, y));
        }
        for (x, y) in [(4, 4), (5, 5)] {
            assert!(!labels[1].mask.is_white(x, y));
            assert!(labels[2].mask.is_white(x, y));
        }
    }
}
