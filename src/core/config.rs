//! Per-call plot parameters + fluent builder.

use crate::core::{
    bounds::plot_width_for,
    color::ColorMode,
    constants::{DEFAULT_PLOT_HEIGHT, FALLBACK_TERMINAL_WIDTH, MIN_PLOT_WIDTH},
    error::ConfigError,
    term::TermCaps,
};

/// How the number of plot cells per row is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlotWidth {
    /// Ask the sink for its width, fall back to 80 columns.
    #[default]
    Auto,
    /// Total columns available; the axis gutter is taken off.
    Total(usize),
    /// Exact number of plot cells (gutter not included).
    Exact(usize),
}

impl PlotWidth {
    /// Plot width in cells, always at least [`MIN_PLOT_WIDTH`].
    #[must_use]
    pub fn resolve<C: TermCaps + ?Sized>(self, caps: &C) -> usize {
        match self {
            Self::Auto => plot_width_for(caps.columns().unwrap_or(FALLBACK_TERMINAL_WIDTH)),
            Self::Total(total) => plot_width_for(total),
            Self::Exact(cells) => cells.max(MIN_PLOT_WIDTH),
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    pub title: Option<String>,
    pub width: PlotWidth,
    pub height: usize,
    pub color: ColorMode,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: PlotWidth::Auto,
            height: DEFAULT_PLOT_HEIGHT,
            color: ColorMode::Auto,
        }
    }
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::default()
    }

    /// Same geometry and colour, different title.
    #[must_use]
    pub fn titled(&self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self.clone()
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct PlotConfigBuilder {
    title: Option<String>,
    width: PlotWidth,
    height: Option<usize>,
    color: ColorMode,
}

impl PlotConfigBuilder {
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn total_width(mut self, cols: usize) -> Self {
        self.width = PlotWidth::Total(cols);
        self
    }
    #[inline]
    #[must_use]
    pub fn plot_width(mut self, cells: usize) -> Self {
        self.width = PlotWidth::Exact(cells);
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: PlotWidth) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = Some(rows);
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    /// # Errors
    /// [`ConfigError::ZeroHeight`] when a height of 0 was requested.
    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let height = match self.height {
            Some(0) => return Err(ConfigError::ZeroHeight),
            Some(h) => h,
            None => DEFAULT_PLOT_HEIGHT,
        };
        Ok(PlotConfig {
            title: self.title.filter(|t| !t.is_empty()),
            width: self.width,
            height,
            color: self.color,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<PlotConfigBuilder> for Result<PlotConfig, ConfigError> {
    fn from(b: PlotConfigBuilder) -> Self {
        b.build()
    }
}
