//! Fit a series of any length onto exactly `width` sample slots.
//!
//! * longer than `width`   - block means over contiguous index ranges
//! * shorter than `width`  - linear interpolation between neighbours
//! * equal                 - copied through untouched
//!
//! Call pattern:
//! ```rust
//! use braille_curves::render::resample;
//!
//! assert_eq!(resample(&[0.0, 10.0], 3), vec![0.0, 5.0, 10.0]);
//! assert_eq!(resample(&[1.0, 3.0, 5.0, 7.0], 2), vec![2.0, 6.0]);
//! ```

use std::ops::Range;

/// Resample `values` to `width` points. Empty input or `width == 0` gives an
/// empty vector.
#[must_use]
pub fn resample(values: &[f64], width: usize) -> Vec<f64> {
    let len = values.len();
    if len == 0 || width == 0 {
        return Vec::new();
    }
    if len == width {
        return values.to_vec();
    }
    if len > width {
        log::trace!("downsampling {len} -> {width}");
        return downsample(values, width);
    }
    log::trace!("upsampling {len} -> {width}");
    upsample(values, width)
}

/// Index ranges averaged into each of the `width` output samples when
/// `len > width`.
///
/// `start = floor(i*len/width)`, `end = floor((i+1)*len/width)`. A block that
/// would come out empty is stretched to one element, and no block runs past
/// `len`.
pub fn block_bounds(len: usize, width: usize) -> impl Iterator<Item = Range<usize>> {
    (0..width).map(move |i| {
        let start = i * len / width;
        let mut end = (i + 1) * len / width;
        if end <= start {
            end = start + 1;
        }
        start.min(len)..end.min(len)
    })
}

fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    block_bounds(values.len(), width)
        .map(|block| {
            let slice = &values[block];
            if slice.is_empty() {
                return values[values.len() - 1];
            }
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

fn upsample(values: &[f64], width: usize) -> Vec<f64> {
    if width == 1 {
        return vec![values[0]];
    }
    if values.len() == 1 {
        return vec![values[0]; width];
    }

    let last = values.len() - 1;
    let denom = (width - 1) as f64;
    (0..width)
        .map(|i| {
            let pos = (i * last) as f64 / denom;
            // pos >= 0, so truncation is floor
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = pos.floor() as usize;
            if idx >= last {
                return values[last];
            }
            let frac = pos - idx as f64;
            values[idx] * (1.0 - frac) + values[idx + 1] * frac
        })
        .collect()
}
