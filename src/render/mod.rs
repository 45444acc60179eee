pub mod compose;
pub mod plot;
pub mod raster;
pub mod resample;
pub mod style;

pub use compose::{CombinedCell, Composite, compose};
pub use plot::{Canvas, Plotter, axis_labels};
pub use raster::{DotGrid, braille_char, dot_bit, draw_line, rasterize};
pub use resample::{block_bounds, resample};
pub use style::{DEFAULT_STYLES, LineStyle};
