//! Geometry kernel for video annotation keyframes.
//!
//! COCO-compatible run-length encoding of binary masks, an order-preserving
//! vertex correspondence, and interpolators that produce the shapes between
//! two keyframes for polylines, polygons, rectangles and masks.

pub mod correspondence;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod mask;
pub mod params;
pub mod types;

pub use error::{Error, Result};
pub use interpolate::{interpolate, interpolate_batch};
pub use params::{Params, Rounding};
pub use types::{
    Bezier, Chain, CompressedRle, Coordinate, MaskComponent, Rectangle, Rle, Shape, Size, Vertex,
};
