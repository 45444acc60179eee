//! Dash patterns that keep overlapping series apart without colour.

/// Periodic on/off pattern along the horizontal dot axis.
///
/// Dot column `x` is drawn iff `x % period < on`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
    pub name: &'static str,
    pub period: usize,
    pub on: usize,
}

impl LineStyle {
    #[must_use]
    pub const fn new(name: &'static str, period: usize, on: usize) -> Self {
        Self { name, period, on }
    }

    /// Is dot column `x` inside an "on" stretch of the pattern?
    #[inline]
    #[must_use]
    pub const fn plots(&self, x: usize) -> bool {
        self.period <= 1 || x % self.period < self.on
    }

    /// `0 < on <= period`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.on > 0 && self.on <= self.period
    }
}

pub const SOLID: LineStyle = LineStyle::new("solid", 1, 1);
pub const DASHED: LineStyle = LineStyle::new("dashed", 6, 3);
pub const DOTTED: LineStyle = LineStyle::new("dotted", 4, 1);
pub const DASH_DOT: LineStyle = LineStyle::new("dashdot", 8, 3);

/// Styles handed out by series index when the caller supplies none.
pub const DEFAULT_STYLES: [LineStyle; 4] = [SOLID, DASHED, DOTTED, DASH_DOT];

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(style: LineStyle, n: usize) -> String {
        (0..n)
            .map(|x| if style.plots(x) { '#' } else { '.' })
            .collect()
    }

    #[test]
    fn patterns() {
        assert_eq!(lit(SOLID, 8), "########");
        assert_eq!(lit(DASHED, 12), "###...###...");
        assert_eq!(lit(DOTTED, 8), "#...#...");
        assert_eq!(lit(DASH_DOT, 8), "###.....");
    }

    #[test]
    fn validity() {
        assert!(DEFAULT_STYLES.iter().all(LineStyle::is_valid));
        assert!(!LineStyle::new("never", 4, 0).is_valid());
        assert!(!LineStyle::new("overlong", 2, 3).is_valid());
    }
}
