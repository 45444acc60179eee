//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;
pub mod stats;

pub use crate::core::{
    bounds::{SeriesRange, plot_width_for},
    color::{AnsiCode, ColorError, ColorMode, colorize},
    config::{PlotConfig, PlotConfigBuilder, PlotWidth},
    constants::{DEFAULT_PLOT_HEIGHT, MIN_PLOT_WIDTH},
    data::Series,
    error::{ConfigError, GraphError},
    term::{Detached, Stdout, TermCaps},
};

pub use render::{LineStyle, Plotter, resample};

/// Plots `series` to stdout with the default styles and palette.
///
/// `width` is the total width available (gutter included); `None` uses the
/// terminal width. Writes nothing when every series is empty.
///
/// # Errors
/// A zero `height`, or a failed write to stdout.
pub fn plot_series(
    title: &str,
    series: &[Series],
    width: Option<usize>,
    height: Option<usize>,
    color: ColorMode,
) -> Result<(), GraphError> {
    let mut b = PlotConfig::builder().title(title).color(color);
    if let Some(w) = width {
        b = b.total_width(w);
    }
    if let Some(h) = height {
        b = b.height(h);
    }
    let cfg = b.build()?;
    Plotter::default().render(&mut std::io::stdout().lock(), &Stdout, &cfg, series)
}
