//! Planar helpers shared by the interpolators.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::Coordinate;

/// Bound on the initial grid of [`polylabel`] along the longer side of the
/// bounding box.
const MAX_CELLS_PER_SIDE: f64 = 1024.0;

/// Euclidean distance between two points.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Linear interpolation from `a` toward `b` by fraction `r`.
pub fn lerp(a: Coordinate, b: Coordinate, r: f64) -> Coordinate {
    Coordinate::new(a.x + (b.x - a.x) * r, a.y + (b.y - a.y) * r)
}

/// A square cell of the pole-of-inaccessibility search.
#[derive(Debug, Clone, Copy)]
struct Cell {
    center: Coordinate,
    half: f64,
    /// Signed distance from the center to the ring, positive inside.
    d: f64,
    /// Upper bound of `d` anywhere within the cell.
    max: f64,
}

impl Cell {
    fn new(center: Coordinate, half: f64, ring: &[Coordinate]) -> Self {
        let d = signed_distance(center, ring);
        Cell {
            center,
            half,
            d,
            max: d + half * std::f64::consts::SQRT_2,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.max.total_cmp(&other.max) == Ordering::Equal
    }
}

impl Eq for Cell {}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max.total_cmp(&other.max)
    }
}

/// Signed distance from `p` to the closed ring: positive inside, negative
/// outside.
fn signed_distance(p: Coordinate, ring: &[Coordinate]) -> f64 {
    let mut inside = false;
    let mut min_sq = f64::INFINITY;

    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + n - 1) % n];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        min_sq = min_sq.min(segment_distance_sq(p, a, b));
    }

    let d = min_sq.sqrt();
    if inside {
        d
    } else {
        -d
    }
}

fn segment_distance_sq(p: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let (mut x, mut y) = (a.x, a.y);
    let (dx, dy) = (b.x - x, b.y - y);

    if dx != 0.0 || dy != 0.0 {
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let (dx, dy) = (p.x - x, p.y - y);
    dx * dx + dy * dy
}

/// Area-weighted centroid cell, falling back to the first vertex for a
/// degenerate ring.
fn centroid_cell(ring: &[Coordinate]) -> Cell {
    let mut area = 0.0;
    let (mut x, mut y) = (0.0, 0.0);
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + n - 1) % n];
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
    }
    if area == 0.0 {
        return Cell::new(ring[0], 0.0, ring);
    }
    Cell::new(Coordinate::new(x / area, y / area), 0.0, ring)
}

/// Pole of inaccessibility of a closed ring: the interior point farthest from
/// every edge, found to within `precision`.
///
/// Quadtree search over cells ordered by their best possible distance. Used as
/// the visual center of concave polygons, where the centroid may fall
/// outside. The ring is implicitly closed; an empty ring yields the origin.
pub fn polylabel(ring: &[Coordinate], precision: f64) -> Coordinate {
    let Some(&first) = ring.first() else {
        return Coordinate::default();
    };

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &ring[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let (width, height) = (max_x - min_x, max_y - min_y);
    if width.min(height) == 0.0 {
        return Coordinate::new(min_x, min_y);
    }
    // Never start finer than the requested precision, and keep slivers from
    // seeding millions of cells.
    let cell_size = width
        .min(height)
        .max(precision)
        .max(width.max(height) / MAX_CELLS_PER_SIDE);
    let half = cell_size / 2.0;

    let mut queue = BinaryHeap::new();
    let mut x = min_x;
    while x < max_x {
        let mut y = min_y;
        while y < max_y {
            queue.push(Cell::new(Coordinate::new(x + half, y + half), half, ring));
            y += cell_size;
        }
        x += cell_size;
    }

    let mut best = centroid_cell(ring);
    let bbox_cell = Cell::new(
        Coordinate::new(min_x + width / 2.0, min_y + height / 2.0),
        0.0,
        ring,
    );
    if bbox_cell.d > best.d {
        best = bbox_cell;
    }

    while let Some(cell) = queue.pop() {
        if cell.d > best.d {
            best = cell;
        }
        if cell.max - best.d <= precision {
            continue;
        }
        let h = cell.half / 2.0;
        let c = cell.center;
        for (dx, dy) in [(-h, -h), (h, -h), (-h, h), (h, h)] {
            queue.push(Cell::new(Coordinate::new(c.x + dx, c.y + dy), h, ring));
        }
    }

    best.center
}
