//! Interpolation between vertex chains of possibly different lengths.
//!
//! The shorter chain is aligned to the longer one (translation, and for
//! polygons rotation and orientation), vertices are paired with an
//! order-preserving correspondence, and the shorter chain gains synthetic
//! vertices until both chains pair up one to one.

use crate::correspondence::find_vertex_mapping;
use crate::geometry::{distance, lerp, polylabel};
use crate::interpolate::fraction;
use crate::types::{Coordinate, InterpolatedPoint, SourcePoint};

/// Interpolate `step` open chains between `p1` and `p2`.
///
/// First and last vertices are pinned to each other (after trying both
/// directions of `p2`). Each returned chain has `max(p1.len(), p2.len())`
/// points. Both chains need at least two vertices.
#[tracing::instrument(level = "debug", skip_all, fields(len1 = p1.len(), len2 = p2.len(), step = step))]
pub fn interpolate_polyline(
    p1: &[Coordinate],
    p2: &[Coordinate],
    step: usize,
) -> Vec<Vec<InterpolatedPoint>> {
    assert!(
        p1.len() >= 2 && p2.len() >= 2,
        "polylines need at least two vertices"
    );
    let (q1, q2, swapped) = ordered(p1, p2);

    let offset = endpoint_translation(&q1, &q2);
    let mut target = translated(&q2, offset);

    let (a, b) = (q1[0].coordinates, q1[q1.len() - 1].coordinates);
    let (c, d) = (target[0].coordinates, target[target.len() - 1].coordinates);
    let direct = distance(a, c) + distance(b, d);
    let crossed = distance(a, d) + distance(b, c);
    if crossed < direct {
        target.reverse();
    }

    let frames = interpolate_transformed_polyline(&q1, &target, step, offset);
    in_argument_order(frames, swapped)
}

/// Interpolate `step` closed chains between polygons `p1` and `p2`.
///
/// The polygons are aligned on their poles of inaccessibility (found to within
/// `precision`), then the start vertex and winding of the longer polygon are
/// chosen to minimize the correspondence cost. Each returned chain has
/// `max(p1.len(), p2.len())` points. Both polygons need at least one vertex.
#[tracing::instrument(level = "debug", skip_all, fields(len1 = p1.len(), len2 = p2.len(), step = step))]
pub fn interpolate_polygon(
    p1: &[Coordinate],
    p2: &[Coordinate],
    step: usize,
    precision: f64,
) -> Vec<Vec<InterpolatedPoint>> {
    assert!(
        !p1.is_empty() && !p2.is_empty(),
        "polygons need at least one vertex"
    );
    let (q1, q2, swapped) = ordered(p1, p2);

    let c1 = polylabel(&coordinates(&q1), precision);
    let c2 = polylabel(&coordinates(&q2), precision);
    let offset = Coordinate::new(c1.x - c2.x, c1.y - c2.y);

    let forward = translated(&q2, offset);
    let backward: Vec<SourcePoint> = forward.iter().rev().copied().collect();
    let (j1, d1) = best_initial_vertex(&q1, &forward);
    let (j2, d2) = best_initial_vertex(&q1, &backward);
    let (ring, j) = if d1 <= d2 {
        (forward, j1)
    } else {
        (backward, j2)
    };
    tracing::debug!(
        start = j,
        reversed = d1 > d2,
        cost = d1.min(d2),
        "aligned polygons"
    );

    // Open both rings at their matched start vertices.
    let mut l1 = q1.clone();
    l1.push(q1[0]);
    let mut l2: Vec<SourcePoint> = ring[j..].iter().chain(&ring[..j]).copied().collect();
    l2.push(ring[j]);

    let frames = interpolate_transformed_polyline(&l1, &l2, step, offset);
    in_argument_order(frames, swapped)
        .into_iter()
        .map(|mut frame| {
            frame.pop();
            frame
        })
        .collect()
}

/// Interpolate between two open chains whose first and last vertices are
/// already paired.
///
/// `p2` has been translated by `offset` for alignment; the produced chains
/// travel toward the untranslated `p2`. `p1` must have at least two vertices
/// and no more than `p2`.
pub fn interpolate_transformed_polyline(
    p1: &[SourcePoint],
    p2: &[SourcePoint],
    step: usize,
    offset: Coordinate,
) -> Vec<Vec<InterpolatedPoint>> {
    let (m, n) = (p1.len(), p2.len());
    debug_assert!(m >= 2 && n >= 2 && m <= n);

    // Pair the interior vertices, then put the endpoints back.
    let (inner, _) = find_vertex_mapping(&coordinates(&p1[1..m - 1]), &coordinates(&p2[1..n - 1]));
    let mut mapping = Vec::with_capacity(m);
    mapping.push(0);
    mapping.extend(inner.into_iter().map(|j| j + 1));
    mapping.push(n - 1);

    // Give p1 a vertex for every unmatched vertex of p2, spaced by the
    // distance travelled along p2.
    let mut aligned: Vec<SourcePoint> = Vec::with_capacity(n);
    for i in 0..m {
        aligned.push(p1[i]);
        if i + 1 == m {
            break;
        }
        let (j1, j2) = (mapping[i], mapping[i + 1]);
        if j2 - j1 <= 1 {
            continue;
        }
        let total: f64 = (j1 + 1..=j2)
            .map(|j| distance(p2[j].coordinates, p2[j - 1].coordinates))
            .sum();
        let mut travelled = 0.0;
        for j in j1 + 1..j2 {
            travelled += distance(p2[j].coordinates, p2[j - 1].coordinates);
            let r = if total > 0.0 {
                travelled / total
            } else {
                (j - j1) as f64 / (j2 - j1) as f64
            };
            aligned.push(SourcePoint {
                coordinates: lerp(p1[i].coordinates, p1[i + 1].coordinates, r),
                id: None,
            });
        }
    }
    debug_assert_eq!(aligned.len(), n);

    (0..step)
        .map(|k| {
            let r = fraction(k, step);
            aligned
                .iter()
                .zip(p2)
                .map(|(a, b)| {
                    let to = Coordinate::new(b.coordinates.x - offset.x, b.coordinates.y - offset.y);
                    InterpolatedPoint {
                        coordinates: lerp(a.coordinates, to, r),
                        src1: a.id,
                        src2: b.id,
                        r,
                    }
                })
                .collect()
        })
        .collect()
}

/// Index both chains and put the shorter one first.
fn ordered(p1: &[Coordinate], p2: &[Coordinate]) -> (Vec<SourcePoint>, Vec<SourcePoint>, bool) {
    let s1 = SourcePoint::indexed(p1.iter().copied());
    let s2 = SourcePoint::indexed(p2.iter().copied());
    if p1.len() <= p2.len() {
        (s1, s2, false)
    } else {
        (s2, s1, true)
    }
}

/// Re-express frames computed from the swapped pair in the caller's order.
fn in_argument_order(
    mut frames: Vec<Vec<InterpolatedPoint>>,
    swapped: bool,
) -> Vec<Vec<InterpolatedPoint>> {
    if !swapped {
        return frames;
    }
    frames.reverse();
    let step = frames.len();
    for (k, frame) in frames.iter_mut().enumerate() {
        let r = fraction(k, step);
        for p in frame.iter_mut() {
            std::mem::swap(&mut p.src1, &mut p.src2);
            p.r = r;
        }
    }
    frames
}

fn coordinates(points: &[SourcePoint]) -> Vec<Coordinate> {
    points.iter().map(|p| p.coordinates).collect()
}

fn translated(points: &[SourcePoint], offset: Coordinate) -> Vec<SourcePoint> {
    points
        .iter()
        .map(|p| SourcePoint {
            coordinates: Coordinate::new(p.coordinates.x + offset.x, p.coordinates.y + offset.y),
            id: p.id,
        })
        .collect()
}

/// Translation of `p2` minimizing the squared distances between the paired
/// endpoints: the mean of the two endpoint offsets.
fn endpoint_translation(p1: &[SourcePoint], p2: &[SourcePoint]) -> Coordinate {
    let (a, b) = (p1[0].coordinates, p1[p1.len() - 1].coordinates);
    let (c, d) = (p2[0].coordinates, p2[p2.len() - 1].coordinates);
    Coordinate::new((a.x - c.x + b.x - d.x) / 2.0, (a.y - c.y + b.y - d.y) / 2.0)
}

/// Start vertex of ring `p2` that best matches `p1[0]`, with its cost.
///
/// The first vertices are pinned to each other and excluded from the cost.
/// Ties keep the earliest start.
fn best_initial_vertex(p1: &[SourcePoint], p2: &[SourcePoint]) -> (usize, f64) {
    let n = p2.len();
    let rest = coordinates(&p1[1..]);
    let mut best = (0, f64::INFINITY);
    for j in 0..n {
        let rotated: Vec<Coordinate> = (1..n).map(|t| p2[(j + t) % n].coordinates).collect();
        let (_, cost) = find_vertex_mapping(&rest, &rotated);
        if cost < best.1 {
            best = (j, cost);
        }
    }
    best
}
