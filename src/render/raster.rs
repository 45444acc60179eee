//! One series to a braille dot grid.
//!
//! ### Workflow
//! 1. Every sample `x` maps to dot column `2x` and to a dot row scaled into
//!    `0..height*4` (row 0 is the top, i.e. the series maximum).
//! 2. Neighbouring samples are joined with Bresenham's line, so a steep step
//!    still reads as one connected stroke.
//! 3. Each visited dot passes through the series' [`LineStyle`] before it is
//!    OR-ed into its cell's 8-bit mask.
//!
//! Cell masks use the Unicode braille bit order, so a mask `m` is rendered as
//! U+2800 + m without further translation:
//!
//! ```text
//!   col 0  col 1
//!   0x01   0x08    row 0
//!   0x02   0x10    row 1
//!   0x04   0x20    row 2
//!   0x40   0x80    row 3
//! ```

use crate::{
    core::{
        bounds::SeriesRange,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
    },
    render::style::LineStyle,
};

/// First code point of the braille block (the empty pattern).
const BRAILLE_BASE: u32 = 0x2800;

/// `DOT_BITS[col][row]` for a dot inside one 2x4 cell.
const DOT_BITS: [[u8; VR]; HR] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Bit for the dot at `(sub_x, sub_y)` inside a cell, 0 when out of range.
#[inline]
#[must_use]
pub const fn dot_bit(sub_x: usize, sub_y: usize) -> u8 {
    if sub_x < HR && sub_y < VR {
        DOT_BITS[sub_x][sub_y]
    } else {
        0
    }
}

/// Glyph for a cell mask.
#[inline]
#[must_use]
pub const fn braille_char(mask: u8) -> char {
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

/// `height x width` cells of dot masks, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl DotGrid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Mask of cell `(x, y)`; 0 outside the grid.
    #[inline]
    #[must_use]
    pub fn mask(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            0
        }
    }

    /// Light dot `(dot_x, dot_y)`. Dots outside the grid are ignored.
    #[inline]
    pub fn set_dot(&mut self, dot_x: usize, dot_y: usize) {
        let (cx, cy) = (dot_x / HR, dot_y / VR);
        if cx < self.width && cy < self.height {
            self.cells[cy * self.width + cx] |= dot_bit(dot_x % HR, dot_y % VR);
        }
    }

    #[inline]
    #[must_use]
    pub fn is_lit(&self, dot_x: usize, dot_y: usize) -> bool {
        self.mask(dot_x / HR, dot_y / VR) & dot_bit(dot_x % HR, dot_y % VR) != 0
    }

    /// Any dot set anywhere?
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&m| m == 0)
    }
}

/// Dot row for `v` on a canvas `rows` dots tall, clamped to `0..rows`.
// r is finite, positive and clamped below before the cast
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn value_to_row(v: f64, range: SeriesRange, rows: usize) -> usize {
    if rows <= 1 {
        return 0;
    }
    let bottom = (rows - 1) as f64;
    let r = ((1.0 - range.normalize(v)) * bottom).round();
    if r.is_nan() || r <= 0.0 {
        return 0;
    }
    r.min(bottom) as usize
}

/// Bresenham between two dot coordinates; `plot` sees every dot on the way,
/// both endpoints included.
pub fn draw_line(from: (usize, usize), to: (usize, usize), mut plot: impl FnMut(usize, usize)) {
    let to_i = |v: usize| isize::try_from(v).unwrap_or(isize::MAX);
    let (mut x, mut y) = (to_i(from.0), to_i(from.1));
    let (x1, y1) = (to_i(to.0), to_i(to.1));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        // x, y stay between the two non-negative endpoints
        plot(x.unsigned_abs(), y.unsigned_abs());
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Rasterize already-resampled `values` onto a grid `values.len()` cells
/// wide and `height` cells tall.
#[must_use]
pub fn rasterize(values: &[f64], range: SeriesRange, height: usize, style: &LineStyle) -> DotGrid {
    let mut grid = DotGrid::new(values.len(), height);
    let rows = height * VR;

    let mut prev: Option<(usize, usize)> = None;
    for (i, &v) in values.iter().enumerate() {
        let cur = (i * HR, value_to_row(v, range, rows));
        match prev {
            Some(p) => draw_line(p, cur, |x, y| {
                if style.plots(x) {
                    grid.set_dot(x, y);
                }
            }),
            None if style.plots(cur.0) => grid.set_dot(cur.0, cur.1),
            None => {}
        }
        prev = Some(cur);
    }
    grid
}
