//! A collection of constants.

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Rows of character cells when the caller does not ask for a height.
pub const DEFAULT_PLOT_HEIGHT: usize = 10;
/// Plot must be at least 10 characters wide
pub const MIN_PLOT_WIDTH: usize = 10;
/// Columns assumed when the sink is not a terminal (or the query fails).
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

pub const AXIS_LABEL_TOP: &str = "100%";
pub const AXIS_LABEL_MID: &str = "50%";
pub const AXIS_LABEL_BOTTOM: &str = "0%";
/// Sits between the axis label and the first braille cell.
pub const AXIS_SEPARATOR: &str = " │ ";

pub const SCALE_NOTE: &str = "Scaled per series; see min/max below.";
pub const LEGEND_PREFIX: &str = "Legend: ";
/// Between two legend entries.
pub const LEGEND_GAP: &str = "  ";

/// Ranges narrower than this are widened by one unit on each side.
pub const RANGE_EPSILON: f64 = 1e-9;

/// Min/max labels are printed with two decimals.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;
