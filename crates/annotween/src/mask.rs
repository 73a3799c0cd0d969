//! Run-length encoding of binary masks.
//!
//! Masks are scanned in column-major order (pixel (x, y) at `x * height + y`)
//! and stored as alternating background/foreground run lengths, starting with
//! background. The string form of the counts is the LEB128-like scheme of
//! COCO's `maskApi.c` and matches `rleToString`/`rleFrString` byte for byte.

use crate::error::{Error, Result};
use crate::types::{CompressedRle, Coordinate, MaskComponent, Rle, Size};

impl Rle {
    /// An all-background mask of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the mask has more than `u32::MAX` pixels, which a single
    /// background run cannot count.
    pub fn empty(size: Size) -> Self {
        let area = u32::try_from(size.area()).unwrap_or_else(|_| {
            panic!(
                "{}x{} mask is too large for 32-bit run counts",
                size.width, size.height
            )
        });
        Rle {
            counts: compress_counts(&[area]),
            size,
        }
    }

    /// Whether the mask has no foreground pixel.
    pub fn is_empty(&self) -> bool {
        area(self) == 0
    }

    /// Serialize the counts with the COCO string codec.
    pub fn compress(&self) -> CompressedRle {
        CompressedRle {
            counts: counts_to_string(&self.counts),
            size: self.size,
        }
    }
}

impl CompressedRle {
    /// Parse the counts string back into an [`Rle`] of the same size.
    pub fn decompress(&self) -> Result<Rle> {
        Ok(Rle {
            counts: counts_from_string(&self.counts)?,
            size: self.size,
        })
    }
}

/// Encode a column-major binary mask into run counts.
///
/// Any nonzero byte is foreground. A mask starting with foreground gets a
/// leading zero-length background run so that even positions always count
/// background.
pub fn encode(mask: &[u8]) -> Vec<u32> {
    if mask.is_empty() {
        return Vec::new();
    }

    let mut counts = Vec::new();
    let mut p: u8 = 0;
    let mut c: u32 = 0;

    for &v in mask {
        let v = if v != 0 { 1 } else { 0 };
        if v != p {
            counts.push(c);
            c = 0;
            p = v;
        }
        c += 1;
    }
    counts.push(c);

    counts
}

/// Encode a column-major binary mask of the given size into an RLE.
///
/// `mask` is stored in column-major order (Fortran order): pixel (x, y) is at
/// index `y + height * x`. Length must be `width * height`.
pub fn encode_rle(mask: &[u8], size: Size) -> Rle {
    assert_eq!(mask.len(), size.area(), "mask length must equal width*height");
    Rle {
        counts: encode(mask),
        size,
    }
}

/// Lazy traversal of the foreground pixels of an RLE, yielding `(x, y)`.
///
/// A clone resumes from the same position; call [`foreground`] again to walk
/// the mask from the beginning.
#[derive(Debug, Clone)]
pub struct ForegroundPixels<'a> {
    counts: &'a [u32],
    height: usize,
    /// Index of the next foreground run to enter.
    k: usize,
    idx: usize,
    remaining: usize,
}

impl Iterator for ForegroundPixels<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            if self.k >= self.counts.len() || self.height == 0 {
                return None;
            }
            // skip background
            self.idx += self.counts[self.k - 1] as usize;
            self.remaining = self.counts[self.k] as usize;
            self.k += 2;
        }
        let pixel = (self.idx / self.height, self.idx % self.height);
        self.idx += 1;
        self.remaining -= 1;
        Some(pixel)
    }
}

/// Iterate over the foreground pixels of `rle` as `(x, y)` pairs.
pub fn foreground(rle: &Rle) -> ForegroundPixels<'_> {
    ForegroundPixels {
        counts: &rle.counts,
        height: rle.size.height as usize,
        k: 1,
        idx: 0,
        remaining: 0,
    }
}

/// Invoke `on_foreground(x, y)` for every foreground pixel, in scan order.
pub fn decode_with<F>(rle: &Rle, mut on_foreground: F)
where
    F: FnMut(usize, usize),
{
    for (x, y) in foreground(rle) {
        on_foreground(x, y);
    }
}

/// Decode an RLE to a column-major binary mask of size `width * height`.
pub fn decode(rle: &Rle) -> Vec<u8> {
    let n = rle.size.area();
    let mut mask = vec![0u8; n];
    let mut idx = 0usize;
    let mut v = 0u8;
    for &c in &rle.counts {
        let c = c as usize;
        let end = (idx + c).min(n);
        if idx < end {
            mask[idx..end].fill(v);
        }
        idx += c;
        v = 1 - v;
    }
    mask
}

/// Whether the pixel at linear `index` falls in a foreground run.
///
/// An index beyond the last run reports background.
pub fn is_foreground(counts: &[u32], index: usize) -> bool {
    let mut m = 0usize;
    for (k, &c) in counts.iter().enumerate() {
        let c = c as usize;
        if index >= m + c {
            m += c;
            continue;
        }
        return k % 2 == 1;
    }
    false
}

/// Number of foreground pixels.
///
/// Only sums the odd-indexed runs (which represent 1s).
pub fn area(rle: &Rle) -> u64 {
    rle.counts.iter().skip(1).step_by(2).map(|&c| c as u64).sum()
}

/// Serialize run counts into the COCO string format.
///
/// From the third run on, each count is delta-coded against the run two
/// positions back (same parity), then written as 5-bit groups, least
/// significant first. Bit 0x20 of a group flags continuation, and every group
/// is offset by 48 into printable ASCII.
pub fn counts_to_string(counts: &[u32]) -> String {
    let mut s = String::with_capacity(counts.len() * 2);
    for (i, &cnt) in counts.iter().enumerate() {
        let mut x = cnt as i64;
        if i > 2 {
            x -= counts[i - 2] as i64;
        }
        loop {
            let mut c = (x & 0x1f) as u8;
            x >>= 5;
            // The remaining bits are pure sign extension once they are all
            // zeros (or all ones for a negative group).
            let more = if c & 0x10 != 0 { x != -1 } else { x != 0 };
            if more {
                c |= 0x20;
            }
            s.push((c + 48) as char);
            if !more {
                break;
            }
        }
    }
    s
}

// Enough groups for any delta between two u32 counts, without overflowing
// the i64 accumulator.
const MAX_GROUPS: u32 = 12;

/// Parse run counts from the COCO string format.
pub fn counts_from_string(s: &str) -> Result<Vec<u32>> {
    let bytes = s.as_bytes();
    let mut counts: Vec<u32> = Vec::with_capacity(bytes.len());
    let mut p = 0;

    while p < bytes.len() {
        let mut x: i64 = 0;
        let mut k: u32 = 0;
        let mut more = true;
        while more {
            let Some(&b) = bytes.get(p) else {
                return Err(Error::MalformedCounts {
                    position: p,
                    reason: "string ends inside a count",
                });
            };
            if !(b'0'..=b'o').contains(&b) {
                return Err(Error::MalformedCounts {
                    position: p,
                    reason: "character outside the codec alphabet",
                });
            }
            if k == MAX_GROUPS {
                return Err(Error::MalformedCounts {
                    position: p,
                    reason: "count does not fit in 32 bits",
                });
            }
            let c = (b - b'0') as i64;
            x |= (c & 0x1f) << (5 * k);
            more = c & 0x20 != 0;
            p += 1;
            k += 1;
            if !more && c & 0x10 != 0 {
                x |= -1i64 << (5 * k);
            }
        }
        let n = counts.len();
        if n > 2 {
            x += counts[n - 2] as i64;
        }
        let count = u32::try_from(x).map_err(|_| Error::MalformedCounts {
            position: p,
            reason: "count is negative or does not fit in 32 bits",
        })?;
        counts.push(count);
    }

    Ok(counts)
}

/// Crop an RLE to the bounding box of its foreground.
///
/// Returns `None` when the mask has no foreground pixel. Otherwise the
/// returned component holds the cropped RLE and, as `offset`, the position of
/// the box in the original frame.
pub fn shrink(rle: &Rle) -> Option<MaskComponent> {
    let mut bbox: Option<(usize, usize, usize, usize)> = None;
    for (x, y) in foreground(rle) {
        bbox = Some(match bbox {
            None => (x, x, y, y),
            Some((x_min, x_max, y_min, y_max)) => {
                (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
            }
        });
    }
    let (x_min, x_max, y_min, y_max) = bbox?;

    let width = rle.size.width as i64;
    let height = rle.size.height as i64;
    let (x_min, x_max, y_min, y_max) = (x_min as i64, x_max as i64, y_min as i64, y_max as i64);
    let (w, h) = (x_max - x_min + 1, y_max - y_min + 1);

    let counts = normalize_counts(&rle.counts);
    let last = counts.len() - 1;
    let mut new_counts: Vec<i64> = counts.iter().map(|&c| c as i64).collect();
    let mut prev = 0i64;
    // Only background runs change size.
    for i in (0..counts.len()).step_by(2) {
        if i == 0 {
            new_counts[i] -= x_min * height + y_min;
        } else if i == last {
            new_counts[i] -= (width - 1 - x_max) * height + (height - 1 - y_max);
        } else {
            prev += counts[i - 1] as i64;
            let i0 = (prev - 1).div_euclid(height);
            let i1 = (prev + counts[i] as i64).div_euclid(height);
            new_counts[i] -= (i1 - i0) * (height - h);
        }
        prev += counts[i] as i64;
    }

    let new_counts: Vec<u32> = new_counts.into_iter().map(|c| c as u32).collect();
    Some(MaskComponent {
        rle: Rle {
            counts: compress_counts(&new_counts),
            size: Size::new(w as u32, h as u32),
        },
        offset: Coordinate::new(x_min as f64, y_min as f64),
    })
}

/// Place an RLE inside a larger canvas of `size`, its top-left at `offset`.
///
/// This is the inverse of [`shrink`]: `expand(&s.rle, size, s.offset)`
/// restores the original mask.
pub fn expand(rle: &Rle, size: Size, offset: Coordinate) -> Rle {
    if rle.is_empty() || rle.size.area() == 0 {
        return Rle::empty(size);
    }

    let mw = rle.size.width as i64;
    let mh = rle.size.height as i64;
    let (x, y) = (offset.x as i64, offset.y as i64);
    let (x_min, x_max, y_min, y_max) = (x, x + mw - 1, y, y + mh - 1);
    let width = size.width as i64;
    let height = size.height as i64;

    // Split foreground runs at the column boundaries of the smaller mask, so a
    // filled 3x3 mask [0, 9] becomes [0, 3, 0, 3, 0, 3] before re-basing it
    // to a taller column.
    let counts = normalize_counts(&rle.counts);
    let mut total = 0i64;
    let mut old_counts: Vec<i64> = Vec::with_capacity(counts.len() * 2);
    for (i, &c) in counts.iter().enumerate() {
        let mut c = c as i64;
        if i % 2 == 0 {
            old_counts.push(c);
            total += c;
            continue;
        }
        while c > 0 {
            let r = c.min(mh - total % mh);
            if c > r {
                old_counts.extend([r, 0]);
            } else {
                old_counts.push(r);
            }
            c -= r;
            total += r;
        }
    }

    let last = old_counts.len() - 1;
    let tail = (width - 1 - x_max) * height + (height - 1 - y_max);
    let mut new_counts = old_counts.clone();
    let mut prev = 0i64;
    for i in (0..old_counts.len()).step_by(2) {
        if i == 0 {
            // The leading run may span columns when the mask is not cropped
            // tightly to its foreground.
            new_counts[i] += x_min * height + y_min + old_counts[i] / mh * (height - mh);
        } else if i == last {
            prev += old_counts[i - 1];
            let i0 = (prev - 1).div_euclid(mh);
            new_counts[i] += tail + (mw - 1 - i0) * (height - mh);
        } else {
            prev += old_counts[i - 1];
            let i0 = (prev - 1).div_euclid(mh);
            let i1 = (prev + old_counts[i]).div_euclid(mh);
            new_counts[i] += (i1 - i0) * (height - mh);
        }
        prev += old_counts[i];
    }

    // The mask ended on foreground: the tail is a new background run.
    if tail > 0 && old_counts.len() % 2 == 0 {
        new_counts.push(tail);
    }

    let new_counts: Vec<u32> = new_counts.into_iter().map(|c| c as u32).collect();
    Rle {
        counts: compress_counts(&new_counts),
        size,
    }
}

/// Drop zero-length runs, merging the neighbours they separated.
fn normalize_counts(counts: &[u32]) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(counts.len());
    for (i, &c) in counts.iter().enumerate() {
        if c == 0 {
            continue;
        }
        if out.len() % 2 == i % 2 {
            out.push(c);
        } else if out.is_empty() {
            out.extend([0, c]);
        } else if let Some(last) = out.last_mut() {
            *last += c;
        }
    }
    out
}

/// Normalize run counts.
///
/// Foreground runs separated by a zero-length background run are merged
/// (three entries collapse into one) and trailing zero-length runs are
/// dropped.
pub fn compress_counts(counts: &[u32]) -> Vec<u32> {
    let mut compressed = Vec::with_capacity(counts.len());
    let mut i = 0;
    while i < counts.len() {
        if compressed.len() % 2 == 0 {
            compressed.push(counts[i]);
            i += 1;
            continue;
        }
        let mut n = counts[i];
        while i + 2 < counts.len() && counts[i + 1] == 0 {
            n += counts[i + 2];
            i += 2;
        }
        compressed.push(n);
        i += 1;
    }
    while compressed.last() == Some(&0) {
        compressed.pop();
    }
    compressed
}

/// Rasterize a mask component into a column-major 0/1 buffer of `size`.
///
/// Pixels falling outside the canvas are dropped. Used by callers that need a
/// full-frame view of a component; the offset is rounded down to whole
/// pixels.
pub fn to_frame(component: &MaskComponent, size: Size) -> Vec<u8> {
    let mut mask = vec![0u8; size.area()];
    let (ox, oy) = (component.offset.x.floor() as i64, component.offset.y.floor() as i64);
    let (width, height) = (size.width as i64, size.height as i64);
    decode_with(&component.rle, |x, y| {
        let (fx, fy) = (x as i64 + ox, y as i64 + oy);
        if (0..width).contains(&fx) && (0..height).contains(&fy) {
            mask[(fx * height + fy) as usize] = 1;
        }
    });
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rle(counts: &[u32], width: u32, height: u32) -> Rle {
        Rle {
            counts: counts.to_vec(),
            size: Size::new(width, height),
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let mask = vec![0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0];
        let rle = encode_rle(&mask, Size::new(4, 3));
        assert_eq!(decode(&rle), mask);
    }

    #[test]
    fn test_encode_runs() {
        assert_eq!(encode(&[0, 0, 1, 1, 1, 0]), vec![2, 3, 1]);
        assert_eq!(encode(&[1, 1, 0]), vec![0, 2, 1]);
        assert_eq!(encode(&[0, 255, 7]), vec![1, 2]);
        assert_eq!(encode(&[]), Vec::<u32>::new());
    }

    #[test]
    fn test_encode_all_zeros() {
        assert_eq!(encode(&[0u8; 12]), vec![12]);
    }

    #[test]
    fn test_encode_all_ones() {
        assert_eq!(encode(&[1u8; 12]), vec![0, 12]);
    }

    #[test]
    fn test_decode_visits_foreground_indices() {
        let rle = rle(&[2, 3, 1], 1, 6);
        let mut seen = Vec::new();
        decode_with(&rle, |x, y| seen.push(x * 6 + y));
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn test_foreground_iterator_columns() {
        // 3 rows x 4 cols
        let rle = rle(&[3, 3, 2, 2, 2], 4, 3);
        let pixels: Vec<_> = foreground(&rle).collect();
        assert_eq!(pixels, vec![(1, 0), (1, 1), (1, 2), (2, 2), (3, 0)]);

        // a fresh traversal starts over
        assert_eq!(foreground(&rle).count(), 5);
        let mut it = foreground(&rle);
        it.next();
        assert_eq!(it.clone().count(), 4);
    }

    #[test]
    fn test_foreground_zero_height() {
        let rle = rle(&[], 4, 0);
        assert_eq!(foreground(&rle).next(), None);
    }

    #[test]
    fn test_is_foreground() {
        let counts = [2, 3, 1];
        let flags: Vec<bool> = (0..6).map(|i| is_foreground(&counts, i)).collect();
        assert_eq!(flags, vec![false, false, true, true, true, false]);
        assert!(!is_foreground(&counts, 100));
        assert!(is_foreground(&[0, 4], 0));
    }

    #[test]
    fn test_area() {
        let rle = encode_rle(&[0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0], Size::new(4, 3));
        assert_eq!(area(&rle), 5);
        assert!(!rle.is_empty());
        assert!(Rle::empty(Size::new(8, 8)).is_empty());
    }

    #[test]
    fn test_counts_string_known_vectors() {
        let cases: &[(&[u32], &str)] = &[
            (&[0, 6, 1, 3], "061M"),
            (&[0, 6, 1], "061"),
            (&[0, 6, 1, 1], "061K"),
            (&[0, 6, 1, 5], "061O"),
            (&[0, 6, 1, 6], "0610"),
            (&[0, 1, 1, 2, 1, 3, 1, 4, 1], "011101010"),
            (&[0, 1024], "0PP1"),
        ];
        for &(counts, s) in cases {
            assert_eq!(counts_to_string(counts), s, "encoding {:?}", counts);
            assert_eq!(counts_from_string(s).unwrap(), counts, "decoding {}", s);
        }
    }

    #[test]
    fn test_counts_string_large_counts() {
        let counts = vec![100, 200, 9700, 3, 1 << 20, 7, 4_000_000];
        let s = counts_to_string(&counts);
        assert!(s.bytes().all(|b| (b'0'..=b'o').contains(&b)));
        assert_eq!(counts_from_string(&s).unwrap(), counts);
    }

    #[test]
    fn test_counts_string_malformed() {
        assert!(matches!(
            counts_from_string("0 1"),
            Err(Error::MalformedCounts { position: 1, .. })
        ));
        // 'P' carries the continuation flag, so the string stops mid-count
        assert!(matches!(
            counts_from_string("0P"),
            Err(Error::MalformedCounts { position: 2, .. })
        ));
        assert_eq!(counts_from_string("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_counts_string_out_of_range() {
        // 1 << 35
        assert!(matches!(
            counts_from_string("PPPPPPP1"),
            Err(Error::MalformedCounts { position: 8, .. })
        ));
        // 0, 6, 1, then a delta of -7 against the 6
        assert!(matches!(
            counts_from_string("061I"),
            Err(Error::MalformedCounts { position: 4, .. })
        ));
        let max = counts_to_string(&[0, u32::MAX]);
        assert_eq!(counts_from_string(&max).unwrap(), vec![0, u32::MAX]);
    }

    #[test]
    #[should_panic(expected = "too large for 32-bit run counts")]
    fn test_empty_rle_beyond_u32_pixels() {
        Rle::empty(Size::new(65_536, 65_536));
    }

    #[test]
    fn test_compressed_rle() {
        let original = rle(&[0, 6, 1, 3], 2, 5);
        let compressed = original.compress();
        assert_eq!(compressed.counts, "061M");
        assert_eq!(compressed.decompress().unwrap(), original);
    }

    #[test]
    fn test_shrink_expand_table() {
        let cases: Vec<(Vec<u32>, Size, Vec<u32>, Size, (f64, f64))> = vec![
            (vec![0, 3, 5, 3, 5, 3, 45], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (0.0, 0.0)),
            (vec![2, 3, 5, 3, 5, 3, 43], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (0.0, 2.0)),
            (vec![5, 3, 5, 3, 5, 3, 40], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (0.0, 5.0)),
            (vec![16, 3, 5, 3, 5, 3, 29], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (2.0, 0.0)),
            (vec![18, 3, 5, 3, 5, 3, 27], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (2.0, 2.0)),
            (vec![21, 3, 5, 3, 5, 3, 24], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (2.0, 5.0)),
            (vec![40, 3, 5, 3, 5, 3, 5], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (5.0, 0.0)),
            (vec![42, 3, 5, 3, 5, 3, 3], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (5.0, 2.0)),
            (vec![45, 3, 5, 3, 5, 3], Size::new(8, 8), vec![0, 9], Size::new(3, 3), (5.0, 5.0)),
            (
                vec![18, 1, 1, 1, 6, 1, 6, 1, 1, 1, 27],
                Size::new(8, 8),
                vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                Size::new(3, 3),
                (2.0, 2.0),
            ),
            (
                vec![19, 1, 6, 1, 1, 1, 6, 1, 28],
                Size::new(8, 8),
                vec![1, 1, 1, 1, 1, 1, 1, 1, 1],
                Size::new(3, 3),
                (2.0, 2.0),
            ),
            (
                vec![0, 1, 1, 1, 6, 1, 6, 1, 1, 1, 45],
                Size::new(8, 8),
                vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
                Size::new(3, 3),
                (0.0, 0.0),
            ),
            (
                vec![1, 1, 6, 1, 1, 1, 6, 1, 46],
                Size::new(8, 8),
                vec![1, 1, 1, 1, 1, 1, 1, 1, 1],
                Size::new(3, 3),
                (0.0, 0.0),
            ),
            (vec![28, 1, 35], Size::new(8, 8), vec![0, 1], Size::new(1, 1), (3.0, 4.0)),
            (vec![0, 1, 62, 1], Size::new(8, 8), vec![0, 1, 62, 1], Size::new(8, 8), (0.0, 0.0)),
            (vec![0, 64], Size::new(8, 8), vec![0, 64], Size::new(8, 8), (0.0, 0.0)),
            (
                vec![16, 1, 6, 1, 3, 1, 12],
                Size::new(8, 5),
                vec![0, 1, 4, 1, 1, 1, 1],
                Size::new(3, 3),
                (3.0, 1.0),
            ),
        ];

        for (counts, size, expected_counts, expected_size, (ox, oy)) in cases {
            let original = Rle { counts, size };
            let shrunk = shrink(&original).expect("mask has foreground");
            assert_eq!(shrunk.rle.counts, expected_counts, "shrinking {:?}", original);
            assert_eq!(shrunk.rle.size, expected_size, "shrinking {:?}", original);
            assert_eq!(shrunk.offset, Coordinate::new(ox, oy), "shrinking {:?}", original);

            let expanded = expand(&shrunk.rle, size, shrunk.offset);
            assert_eq!(expanded, original);
        }
    }

    #[test]
    fn test_shrink_empty_mask() {
        assert_eq!(shrink(&rle(&[64], 8, 8)), None);
        assert_eq!(shrink(&rle(&[], 0, 0)), None);
    }

    #[test]
    fn test_shrink_preserves_invariants() {
        let mask: Vec<u8> = (0..60).map(|i| ((i * 7 + i / 5) % 3 == 0) as u8).collect();
        let original = encode_rle(&mask, Size::new(6, 10));
        let shrunk = shrink(&original).unwrap();
        let sum: u32 = shrunk.rle.counts.iter().sum();
        assert_eq!(sum as usize, shrunk.rle.size.area());
        assert_eq!(area(&shrunk.rle), area(&original));
        assert_eq!(expand(&shrunk.rle, original.size, shrunk.offset), original);
    }

    #[test]
    fn test_expand_empty_mask() {
        let expanded = expand(&rle(&[9], 3, 3), Size::new(8, 8), Coordinate::new(2.0, 2.0));
        assert_eq!(expanded, rle(&[64], 8, 8));
    }

    #[test]
    fn test_expand_skips_zero_length_runs() {
        let expanded = expand(&rle(&[4, 0, 0, 5], 3, 3), Size::new(4, 4), Coordinate::new(1.0, 1.0));
        assert_eq!(expanded, rle(&[10, 2, 1, 3], 4, 4));
    }

    #[test]
    fn test_expand_loose_mask() {
        // foreground only in the middle column of a 3x3 mask
        let loose = rle(&[3, 3, 3], 3, 3);
        let expanded = expand(&loose, Size::new(5, 5), Coordinate::new(1.0, 1.0));
        assert_eq!(expanded, rle(&[11, 3, 11], 5, 5));
    }

    #[test]
    fn test_normalize_counts() {
        assert_eq!(normalize_counts(&[4, 0, 0, 5]), vec![4, 5]);
        assert_eq!(normalize_counts(&[0, 0, 2, 3]), vec![2, 3]);
        assert_eq!(normalize_counts(&[0, 2, 0, 3]), vec![0, 5]);
    }

    #[test]
    fn test_compress_counts() {
        assert_eq!(compress_counts(&[0, 3, 0, 3, 0, 3, 0]), vec![0, 9]);
        assert_eq!(compress_counts(&[2, 1, 0, 1, 4]), vec![2, 2, 4]);
        assert_eq!(compress_counts(&[5, 0, 0]), vec![5]);
        assert_eq!(compress_counts(&[0]), Vec::<u32>::new());
    }

    #[test]
    fn test_to_frame_places_component() {
        let component = MaskComponent {
            rle: rle(&[0, 1, 2, 1], 2, 2),
            offset: Coordinate::new(1.0, 0.0),
        };
        let frame = to_frame(&component, Size::new(3, 2));
        assert_eq!(frame, vec![0, 0, 1, 0, 0, 1]);
    }
}
