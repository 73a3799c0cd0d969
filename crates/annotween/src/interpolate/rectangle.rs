use crate::geometry::lerp;
use crate::interpolate::fraction;
use crate::types::Rectangle;

/// Interpolate `step` rectangles between `r1` and `r2` corner by corner.
pub fn interpolate_rectangle(r1: &Rectangle, r2: &Rectangle, step: usize) -> Vec<Rectangle> {
    (0..step)
        .map(|k| {
            let r = fraction(k, step);
            Rectangle {
                top_left: lerp(r1.top_left, r2.top_left, r),
                bottom_right: lerp(r1.bottom_right, r2.bottom_right, r),
            }
        })
        .collect()
}
