use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::color::ColorMode;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "braille-curves",
    version,
    about = "Multi-series terminal line charts using braille"
)]
pub struct Cli {
    /// Log at debug level (`RUST_LOG` still overrides)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot every column of a CSV file as its own series
    Plot(PlotArgs),
    /// Summary and learning curves from a typing-session CSV
    Curves(CurvesArgs),
    /// Plot a few random walks
    Demo(DemoArgs),
    /// Show line styles and palette colours
    Styles,
    /// Print example invocations
    Examples,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Geometry and colour flags shared by every plotting command.
#[derive(Args, Debug, Clone, Default)]
pub struct CanvasArgs {
    /// Total columns available, axis gutter included (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Exact number of plot cells per row; wins over --width
    #[arg(long)]
    pub plot_width: Option<usize>,

    /// Plot height in rows
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// When to emit ANSI colour (`NO_COLOR` always disables it)
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Comma-separated series colours (names or `#RRGGBB`)
    #[arg(long, value_delimiter = ',')]
    pub palette: Vec<String>,
}

/// `braille-curves plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Plot title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Moving-average window applied to every series
    #[arg(long, default_value_t = 1)]
    pub window: usize,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// `braille-curves curves …`
#[derive(Parser, Debug)]
pub struct CurvesArgs {
    /// Session CSV with `correct`, `incorrect` and `duration_ms` columns
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Only the last N sessions (0 = all)
    #[arg(long, default_value_t = 0)]
    pub last: usize,

    /// Moving-average window
    #[arg(long, default_value_t = 20)]
    pub window: usize,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// `braille-curves demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 3)]
    pub series: usize,
    #[arg(long, default_value_t = 500)]
    pub steps: usize,
    #[arg(long, default_value_t = 0.0)]
    pub mu: f64,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    /// RNG seed (time based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}
