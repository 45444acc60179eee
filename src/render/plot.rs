//! Text renderer for one or more independently scaled series:
//! - title, scale note and per-series min/max lines
//! - data rows behind a `100% / 50% / 0%` axis gutter
//! - optional ANSI colour per cell, reset after every coloured cell
//! - legend naming each series' dash style

use std::{fmt::Write as _, io::Write};

use log::debug;

use crate::{
    core::{
        bounds::SeriesRange,
        color::{AnsiCode, DEFAULT_PALETTE},
        config::PlotConfig,
        constants::{
            AXIS_LABEL_BOTTOM, AXIS_LABEL_MID, AXIS_LABEL_TOP, AXIS_SEPARATOR, DECIMAL_PRECISION,
            LEGEND_GAP, LEGEND_PREFIX, SCALE_NOTE,
        },
        data::Series,
        error::{ConfigError, GraphError},
        term::{Detached, TermCaps},
    },
    render::{
        compose::{Composite, compose},
        raster::{DotGrid, braille_char, dot_bit, rasterize},
        resample::resample,
        style::{DEFAULT_STYLES, LineStyle},
    },
};

/// Everything computed before any text is produced.
#[derive(Clone, Debug)]
pub struct Canvas<'a> {
    /// Surviving (non-empty) series in their original order.
    pub series: Vec<&'a Series>,
    pub ranges: Vec<SeriesRange>,
    pub cells: Composite,
}

/// Axis label per data row: top, middle (only above two rows) and bottom.
#[must_use]
pub fn axis_labels(height: usize) -> Vec<&'static str> {
    let mut labels = vec![""; height];
    if height == 0 {
        return labels;
    }
    labels[0] = AXIS_LABEL_TOP;
    if height > 2 {
        labels[height / 2] = AXIS_LABEL_MID;
    }
    if height > 1 {
        labels[height - 1] = AXIS_LABEL_BOTTOM;
    }
    labels
}

/// Stateless renderer; styles and palette are fixed at construction.
#[derive(Clone, Debug)]
pub struct Plotter {
    styles: Vec<LineStyle>,
    palette: Vec<AnsiCode>,
}

impl Default for Plotter {
    fn default() -> Self {
        Self {
            styles: DEFAULT_STYLES.to_vec(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Plotter {
    /// # Errors
    /// Empty style list or palette, or a style with `on` outside `1..=period`.
    pub fn new(styles: Vec<LineStyle>, palette: Vec<AnsiCode>) -> Result<Self, ConfigError> {
        if styles.is_empty() {
            return Err(ConfigError::NoStyles);
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(bad) = styles.iter().find(|s| !s.is_valid()) {
            return Err(ConfigError::InvalidStyle {
                name: bad.name,
                period: bad.period,
                on: bad.on,
            });
        }
        Ok(Self { styles, palette })
    }

    /// Same styles, different colours.
    ///
    /// # Errors
    /// Empty palette.
    pub fn with_palette(self, palette: Vec<AnsiCode>) -> Result<Self, ConfigError> {
        Self::new(self.styles, palette)
    }

    #[inline]
    #[must_use]
    pub fn style_for(&self, index: usize) -> &LineStyle {
        &self.styles[index % self.styles.len()]
    }

    #[inline]
    #[must_use]
    pub fn color_for(&self, index: usize) -> &AnsiCode {
        &self.palette[index % self.palette.len()]
    }

    /// Resample, scale, rasterize and merge. `None` when every series is
    /// empty.
    #[must_use]
    pub fn prepare<'a>(
        &self,
        series: &'a [Series],
        width: usize,
        height: usize,
    ) -> Option<Canvas<'a>> {
        let series: Vec<&Series> = series.iter().filter(|s| !s.is_empty()).collect();
        if series.is_empty() {
            return None;
        }

        let (ranges, grids): (Vec<SeriesRange>, Vec<DotGrid>) = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let values = resample(&s.values, width);
                let range = SeriesRange::of(&values);
                (range, rasterize(&values, range, height, self.style_for(i)))
            })
            .unzip();
        let blank = grids.iter().filter(|g| g.is_blank()).count();
        if blank > 0 {
            debug!("{blank} series left no dots on the canvas");
        }
        let cells = compose(&grids);
        Some(Canvas {
            series,
            ranges,
            cells,
        })
    }

    /// The complete plot as text, or an empty string when there is nothing
    /// to draw.
    #[must_use]
    pub fn frame<C: TermCaps + ?Sized>(
        &self,
        config: &PlotConfig,
        series: &[Series],
        caps: &C,
    ) -> String {
        let width = config.width.resolve(caps);
        let height = config.height.max(1);
        let Some(canvas) = self.prepare(series, width, height) else {
            debug!("nothing to plot: all {} series empty", series.len());
            return String::new();
        };
        let use_color = config.color.resolve(caps);
        debug!(
            "plotting {} series on {width}x{height} cells, colour {}",
            canvas.series.len(),
            if use_color { "on" } else { "off" }
        );

        let mut out = String::new();
        if let Some(title) = &config.title {
            out.push_str(title);
            out.push('\n');
        }
        out.push_str(SCALE_NOTE);
        out.push('\n');
        for (s, r) in canvas.series.iter().zip(&canvas.ranges) {
            let _ = writeln!(
                out,
                "{}: min={:.p$} max={:.p$}",
                s.name,
                r.min,
                r.max,
                p = DECIMAL_PRECISION
            );
        }
        self.push_rows(&mut out, &canvas.cells, use_color);
        self.push_legend(&mut out, &canvas.series, use_color);
        out.push('\n');
        out
    }

    fn push_rows(&self, out: &mut String, cells: &Composite, use_color: bool) {
        let label_width = AXIS_LABEL_TOP.len();
        let reset = AnsiCode::reset();
        for (y, label) in axis_labels(cells.height()).into_iter().enumerate() {
            let _ = write!(out, "{label:>label_width$}{AXIS_SEPARATOR}");
            for cell in cells.row(y) {
                let ch = braille_char(cell.mask);
                match cell.owner {
                    Some(owner) if use_color => {
                        let _ = write!(out, "{}{ch}{reset}", self.color_for(owner));
                    }
                    _ => out.push(ch),
                }
            }
            out.push('\n');
        }
    }

    fn push_legend(&self, out: &mut String, series: &[&Series], use_color: bool) {
        let marker = braille_char(dot_bit(0, 0));
        out.push_str(LEGEND_PREFIX);
        for (i, s) in series.iter().enumerate() {
            if i > 0 {
                out.push_str(LEGEND_GAP);
            }
            let label = format!("{marker} {} ({})", s.name, self.style_for(i).name);
            if use_color {
                let _ = write!(out, "{}{label}{}", self.color_for(i), AnsiCode::reset());
            } else {
                out.push_str(&label);
            }
        }
        out.push('\n');
    }

    /// Main render entry: write the plot for `series` to `sink`.
    ///
    /// Nothing is written when every series is empty.
    ///
    /// # Errors
    /// Only failures of the sink itself.
    pub fn render<W, C>(
        &self,
        sink: &mut W,
        caps: &C,
        config: &PlotConfig,
        series: &[Series],
    ) -> Result<(), GraphError>
    where
        W: Write + ?Sized,
        C: TermCaps + ?Sized,
    {
        let frame = self.frame(config, series, caps);
        if frame.is_empty() {
            return Ok(());
        }
        sink.write_all(frame.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// [`Plotter::frame`] for a sink that is not a terminal.
    #[must_use]
    pub fn render_to_string(&self, config: &PlotConfig, series: &[Series]) -> String {
        self.frame(config, series, &Detached)
    }
}
