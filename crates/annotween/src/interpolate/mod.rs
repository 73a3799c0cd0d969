//! Keyframe interpolation of annotation shapes.
//!
//! Every interpolator takes two shapes and a step count and returns exactly
//! `step` intermediate shapes, the `k`-th at fraction `(k + 1) / (step + 1)`
//! from the first shape toward the second.

pub mod mask;
pub mod polychain;
pub mod rectangle;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::lerp;
use crate::params::Params;
use crate::types::{Bezier, Coordinate, InterpolatedPoint, Shape, Vertex};

pub use mask::interpolate_mask;
pub use polychain::{interpolate_polygon, interpolate_polyline, interpolate_transformed_polyline};
pub use rectangle::interpolate_rectangle;

/// Fraction of the way from the first keyframe to the second for frame `k`.
pub(crate) fn fraction(k: usize, step: usize) -> f64 {
    (k + 1) as f64 / (step + 1) as f64
}

/// Interpolate `step` shapes between `a` and `b`.
///
/// Both shapes must be of the same kind. Polylines need at least two vertices
/// and polygons at least one. Interpolated chain vertices carry bezier
/// controls only when both of their source vertices are bezier vertices.
pub fn interpolate(a: &Shape, b: &Shape, step: usize, params: &Params) -> Result<Vec<Shape>> {
    match (a, b) {
        (Shape::Polyline { vertices: v1 }, Shape::Polyline { vertices: v2 }) => {
            check_vertices("polyline", v1, 2)?;
            check_vertices("polyline", v2, 2)?;
            let frames = interpolate_polyline(&coordinates(v1), &coordinates(v2), step);
            Ok(frames
                .iter()
                .map(|frame| Shape::Polyline {
                    vertices: rebuild_vertices(frame, v1, v2),
                })
                .collect())
        }
        (Shape::Polygon { vertices: v1 }, Shape::Polygon { vertices: v2 }) => {
            check_vertices("polygon", v1, 1)?;
            check_vertices("polygon", v2, 1)?;
            let frames = interpolate_polygon(
                &coordinates(v1),
                &coordinates(v2),
                step,
                params.polylabel_precision,
            );
            Ok(frames
                .iter()
                .map(|frame| Shape::Polygon {
                    vertices: rebuild_vertices(frame, v1, v2),
                })
                .collect())
        }
        (Shape::Rectangle(r1), Shape::Rectangle(r2)) => Ok(interpolate_rectangle(r1, r2, step)
            .into_iter()
            .map(Shape::Rectangle)
            .collect()),
        (Shape::Mask(m1), Shape::Mask(m2)) => Ok(interpolate_mask(m1, m2, step, params)?
            .into_iter()
            .map(Shape::Mask)
            .collect()),
        _ => Err(Error::ShapeMismatch {
            first: a.kind(),
            second: b.kind(),
        }),
    }
}

/// Interpolate many independent keyframe pairs in parallel.
///
/// Results come back in the order of `pairs`.
pub fn interpolate_batch(
    pairs: &[(Shape, Shape)],
    step: usize,
    params: &Params,
) -> Vec<Result<Vec<Shape>>> {
    pairs
        .par_iter()
        .map(|(a, b)| interpolate(a, b, step, params))
        .collect()
}

fn check_vertices(kind: &'static str, vertices: &[Vertex], required: usize) -> Result<()> {
    if vertices.len() < required {
        return Err(Error::TooFewVertices {
            kind,
            required,
            actual: vertices.len(),
        });
    }
    Ok(())
}

fn coordinates(vertices: &[Vertex]) -> Vec<Coordinate> {
    vertices.iter().map(|v| v.coordinates).collect()
}

fn rebuild_vertices(frame: &[InterpolatedPoint], v1: &[Vertex], v2: &[Vertex]) -> Vec<Vertex> {
    frame
        .iter()
        .map(|p| {
            let sources = p
                .src1
                .zip(p.src2)
                .and_then(|(i, j)| v1.get(i)?.bezier.zip(v2.get(j)?.bezier));
            Vertex {
                coordinates: p.coordinates,
                bezier: sources.map(|(b1, b2)| Bezier {
                    control1: lerp(b1.control1, b2.control1, p.r),
                    control2: lerp(b1.control2, b2.control2, p.r),
                }),
            }
        })
        .collect()
}
