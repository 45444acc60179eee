//! Geometry helpers: per-series value ranges + plot width plumbing.

use crate::core::constants::{
    AXIS_LABEL_TOP, AXIS_SEPARATOR, MIN_PLOT_WIDTH, RANGE_EPSILON,
};

/// Inclusive value range of one series, used to scale it independently of
/// every other series on the same canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesRange {
    pub min: f64,
    pub max: f64,
}

impl SeriesRange {
    /// Exact extrema of `values`.
    ///
    /// * An empty slice yields `0..0` before widening.
    /// * If the spread is below [`RANGE_EPSILON`] the range is widened to
    ///   `min-1 ..= max+1` so scaling never divides by zero.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for &v in values {
            low = low.min(v);
            high = high.max(v);
        }
        if low == f64::INFINITY {
            low = 0.0;
        }
        if high == f64::NEG_INFINITY {
            high = 0.0;
        }
        Self::new(low, high)
    }

    /// Wraps explicit bounds, applying the same degenerate widening.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if (max - min).abs() < RANGE_EPSILON {
            return Self {
                min: min - 1.0,
                max: max + 1.0,
            };
        }
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` inside the range, 0 at `min` and 1 at `max`.
    #[inline]
    #[must_use]
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Columns taken by the axis label plus separator in front of every data row.
#[inline]
#[must_use]
pub fn gutter_width() -> usize {
    AXIS_LABEL_TOP.chars().count() + AXIS_SEPARATOR.chars().count()
}

/// Plot width (in cells) that fits inside `total_width` columns once the
/// gutter is taken off; never below [`MIN_PLOT_WIDTH`].
#[inline]
#[must_use]
pub fn plot_width_for(total_width: usize) -> usize {
    if total_width == 0 {
        return MIN_PLOT_WIDTH;
    }
    total_width
        .saturating_sub(gutter_width())
        .max(MIN_PLOT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_exact_for_spread_values() {
        let r = SeriesRange::of(&[3.0, -1.5, 7.25]);
        assert_eq!(r, SeriesRange { min: -1.5, max: 7.25 });
        assert!((r.normalize(7.25) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flat_series_is_widened() {
        let r = SeriesRange::of(&[5.0, 5.0, 5.0]);
        assert_eq!(format!("{:.2} {:.2}", r.min, r.max), "4.00 6.00");
    }

    #[test]
    fn empty_series_widens_around_zero() {
        assert_eq!(SeriesRange::of(&[]), SeriesRange { min: -1.0, max: 1.0 });
    }

    #[test]
    fn width_for_total_subtracts_gutter() {
        assert_eq!(gutter_width(), 7);
        assert_eq!(plot_width_for(80), 73);
        assert_eq!(plot_width_for(0), MIN_PLOT_WIDTH);
        assert_eq!(plot_width_for(12), MIN_PLOT_WIDTH);
    }
}
