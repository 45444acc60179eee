//! Typing statistics built on top of the plot engine.

pub mod metrics;
pub mod report;
pub mod table;

pub use metrics::{SessionMetrics, moving_average, session_metrics, sparkline};
pub use report::{
    CharAggregate, PerSessionChars, SessionAggregate, char_curves, last_sessions,
    learning_curves, render_char_curves, render_char_table, render_curves, render_summary,
    top_chars_by_frequency, weak_chars,
};
pub use table::format_table;
