//! Aggregates the plumbing shared by the renderer, stats and CLI layers.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;
pub mod term;

// re-export frequently-used items for convenience
pub use bounds::{SeriesRange, gutter_width, plot_width_for};
pub use color::{AnsiCode, ColorError, ColorMode, colorize};
pub use config::{PlotConfig, PlotConfigBuilder, PlotWidth};
pub use constants::{
    BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, DECIMAL_PRECISION,
    DEFAULT_PLOT_HEIGHT, MIN_PLOT_WIDTH,
};
pub use data::Series;
pub use error::{ConfigError, GraphError};
pub use term::{Detached, Stdout, TermCaps};
