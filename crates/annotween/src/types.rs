use serde::{Deserialize, Serialize};

/// A point in the image pixel frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Number of pixels covered, `width * height`.
    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Run-length encoding for masks.
///
/// Pixels are scanned in column-major order: pixel (x, y) sits at linear
/// index `x * height + y`. Counts alternate background and foreground runs,
/// always starting with a (possibly empty) background run, so every
/// odd-indexed entry counts foreground pixels. The counts must sum to
/// `width * height`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Rle {
    /// Run counts: alternating runs of 0s and 1s, starting with 0s.
    pub counts: Vec<u32>,
    pub size: Size,
}

/// An [`Rle`] whose counts went through the COCO string codec.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompressedRle {
    pub counts: String,
    pub size: Size,
}

/// A mask placed in image space: the RLE's local (0, 0) sits at `offset`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MaskComponent {
    pub rle: Rle,
    pub offset: Coordinate,
}

/// Bezier controls of the curve arriving at a vertex from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bezier {
    pub control1: Coordinate,
    pub control2: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vertex {
    pub coordinates: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bezier: Option<Bezier>,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Vertex {
            coordinates: Coordinate::new(x, y),
            bezier: None,
        }
    }
}

impl From<Coordinate> for Vertex {
    fn from(coordinates: Coordinate) -> Self {
        Vertex {
            coordinates,
            bezier: None,
        }
    }
}

/// An ordered vertex sequence, open (polyline) or closed (polygon).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Chain {
    pub vertices: Vec<Vertex>,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub top_left: Coordinate,
    pub bottom_right: Coordinate,
}

/// Every annotation geometry the interpolation engine understands.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Polyline { vertices: Vec<Vertex> },
    Polygon { vertices: Vec<Vertex> },
    Rectangle(Rectangle),
    Mask(MaskComponent),
}

impl Shape {
    /// Short name of the shape kind, as used in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polyline { .. } => "polyline",
            Shape::Polygon { .. } => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Mask(_) => "mask",
        }
    }
}

impl From<Chain> for Shape {
    fn from(chain: Chain) -> Self {
        let Chain { vertices, closed } = chain;
        if closed {
            Shape::Polygon { vertices }
        } else {
            Shape::Polyline { vertices }
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<MaskComponent> for Shape {
    fn from(mask: MaskComponent) -> Self {
        Shape::Mask(mask)
    }
}

/// A chain point fed to the polychain interpolators.
///
/// `id` is the index of the vertex in its source chain; points synthesized
/// during alignment carry `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePoint {
    pub coordinates: Coordinate,
    pub id: Option<usize>,
}

impl SourcePoint {
    /// Tag every coordinate of a chain with its index.
    pub fn indexed<I>(coordinates: I) -> Vec<SourcePoint>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        coordinates
            .into_iter()
            .enumerate()
            .map(|(i, coordinates)| SourcePoint {
                coordinates,
                id: Some(i),
            })
            .collect()
    }
}

/// A point of an intermediate chain.
///
/// `src1` and `src2` index the vertices of the first and second input chain
/// that produced this point, and `r` is the fraction travelled from the
/// first toward the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedPoint {
    pub coordinates: Coordinate,
    pub src1: Option<usize>,
    pub src2: Option<usize>,
    pub r: f64,
}
