//! Mask interpolation by cross-fading two rasterized masks.
//!
//! Each mask is drawn into an 8-bit coverage bitmap, both bitmaps are scaled
//! to the blended box size with nearest-neighbour sampling and composited
//! source-over at opacities `1 - r` and `r`, and the resulting alpha is
//! thresholded back into a binary mask.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};

use crate::error::{Error, Result};
use crate::geometry::lerp;
use crate::interpolate::fraction;
use crate::mask::{decode_with, encode};
use crate::params::Params;
use crate::types::{Coordinate, MaskComponent, Rle, Size};

const OPAQUE: u8 = u8::MAX;

/// Interpolate `step` masks between `m1` and `m2`.
///
/// Box sizes and offsets are interpolated linearly and rounded with
/// `params.rounding`; a blended pixel is foreground when its alpha reaches
/// `params.alpha_threshold`.
#[tracing::instrument(level = "debug", skip_all, fields(step = step))]
pub fn interpolate_mask(
    m1: &MaskComponent,
    m2: &MaskComponent,
    step: usize,
    params: &Params,
) -> Result<Vec<MaskComponent>> {
    let bitmap1 = rasterize(&m1.rle)?;
    let bitmap2 = rasterize(&m2.rle)?;
    let (w1, h1) = (m1.rle.size.width as f64, m1.rle.size.height as f64);
    let (w2, h2) = (m2.rle.size.width as f64, m2.rle.size.height as f64);

    let mut components = Vec::with_capacity(step);
    for k in 0..step {
        let r = fraction(k, step);
        let w = params.rounding.round(w1 + (w2 - w1) * r).max(0.0) as u32;
        let h = params.rounding.round(h1 + (h2 - h1) * r).max(0.0) as u32;
        tracing::trace!(frame = k, width = w, height = h, "blending mask");

        let canvas = blend(&bitmap1, &bitmap2, Size::new(w, h), r)?;
        let mask = column_major(&canvas, params.alpha_threshold);

        let offset = lerp(m1.offset, m2.offset, r);
        components.push(MaskComponent {
            rle: Rle {
                counts: encode(&mask),
                size: Size::new(w, h),
            },
            offset: Coordinate::new(
                params.rounding.round(offset.x),
                params.rounding.round(offset.y),
            ),
        });
    }

    Ok(components)
}

fn new_canvas(size: Size) -> Result<GrayImage> {
    let len = (size.width as usize)
        .checked_mul(size.height as usize)
        .ok_or_else(|| Error::canvas(format!("{}x{} canvas is too large", size.width, size.height)))?;
    GrayImage::from_raw(size.width, size.height, vec![0u8; len])
        .ok_or_else(|| Error::canvas(format!("cannot allocate a {}x{} canvas", size.width, size.height)))
}

/// Draw the foreground of an RLE as opaque coverage.
fn rasterize(rle: &Rle) -> Result<GrayImage> {
    let mut canvas = new_canvas(rle.size)?;
    let (width, height) = (canvas.width(), canvas.height());
    decode_with(rle, |x, y| {
        let (x, y) = (x as u32, y as u32);
        if x < width && y < height {
            canvas.put_pixel(x, y, Luma([OPAQUE]));
        }
    });
    Ok(canvas)
}

/// Scale `bitmap` to `size`, or `None` when there is nothing to draw.
fn scaled(bitmap: &GrayImage, size: Size) -> Option<GrayImage> {
    if bitmap.width() == 0 || bitmap.height() == 0 || size.area() == 0 {
        return None;
    }
    if bitmap.dimensions() == (size.width, size.height) {
        return Some(bitmap.clone());
    }
    Some(imageops::resize(bitmap, size.width, size.height, FilterType::Nearest))
}

fn opacity(a: f64) -> u8 {
    (a.clamp(0.0, 1.0) * OPAQUE as f64).round() as u8
}

/// Composite `b1` at opacity `1 - r`, then `b2` at opacity `r`, onto a clear
/// canvas of `size`, keeping only the alpha channel.
fn blend(b1: &GrayImage, b2: &GrayImage, size: Size, r: f64) -> Result<GrayImage> {
    let mut canvas = new_canvas(size)?;
    if let Some(src) = scaled(b1, size) {
        draw(&mut canvas, &src, opacity(1.0 - r));
    }
    if let Some(src) = scaled(b2, size) {
        draw(&mut canvas, &src, opacity(r));
    }
    Ok(canvas)
}

/// Source-over alpha compositing with a global opacity, quantized to 8 bits.
fn draw(canvas: &mut GrayImage, src: &GrayImage, global_alpha: u8) {
    let ga = global_alpha as f64 / OPAQUE as f64;
    for (dst, s) in canvas.pixels_mut().zip(src.pixels()) {
        let sa = s[0] as f64 / OPAQUE as f64 * ga;
        let da = dst[0] as f64 / OPAQUE as f64;
        let a = sa + da * (1.0 - sa);
        dst[0] = (a * OPAQUE as f64).round() as u8;
    }
}

/// Threshold the alpha canvas into a column-major binary mask.
fn column_major(canvas: &GrayImage, threshold: u8) -> Vec<u8> {
    let (w, h) = (canvas.width() as usize, canvas.height() as usize);
    let mut mask = vec![0u8; w * h];
    for (x, y, p) in canvas.enumerate_pixels() {
        if p[0] >= threshold {
            mask[x as usize * h + y as usize] = 1;
        }
    }
    mask
}
