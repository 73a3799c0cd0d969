use serde::{Deserialize, Serialize};

/// How blended mask offsets and dimensions are snapped to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Rounding {
    /// `floor(x + 0.5)`: ties go toward positive infinity, matching
    /// JavaScript's `Math.round`.
    #[default]
    HalfUp,
    /// Ties go away from zero, matching `f64::round`.
    HalfAwayFromZero,
    /// Ties go to the even neighbour (banker's rounding).
    HalfEven,
}

impl Rounding {
    /// Round `x` to a whole number under this rule.
    pub fn round(self, x: f64) -> f64 {
        match self {
            Rounding::HalfUp => (x + 0.5).floor(),
            Rounding::HalfAwayFromZero => x.round(),
            Rounding::HalfEven => x.round_ties_even(),
        }
    }
}

/// Parameters controlling shape interpolation.
///
/// Defaults reproduce the labeling tool's behaviour: a one-pixel precision
/// for the polygon visual-center search, an alpha cut-off of 128 when
/// re-thresholding blended masks, and half-up rounding of mask geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Precision of the pole-of-inaccessibility search used to align
    /// polygons, in pixels.
    pub polylabel_precision: f64,
    /// Blended alpha at or above this value becomes foreground.
    pub alpha_threshold: u8,
    /// Rounding rule for interpolated mask offsets and dimensions.
    pub rounding: Rounding,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            polylabel_precision: 1.0,
            alpha_threshold: 128,
            rounding: Rounding::default(),
        }
    }
}
