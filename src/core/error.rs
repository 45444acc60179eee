//! Centralised error types used across the crate.

use std::io;

use crate::core::{color::ColorError, data::ParseCsvError};

/// Precise configuration faults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("plot height must be at least one row")]
    ZeroHeight,
    #[error("at least one line style is required")]
    NoStyles,
    #[error("colour palette must not be empty")]
    EmptyPalette,
    #[error("line style `{name}` needs 0 < on ({on}) <= period ({period})")]
    InvalidStyle {
        name: &'static str,
        period: usize,
        on: usize,
    },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Csv(#[from] ParseCsvError),
    #[error("{0}")]
    Color(#[from] ColorError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),
    #[error("column `{column}` has {got} values, expected {expected} (blank cell?)")]
    RaggedColumn {
        column: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("data set is empty")]
    EmptyData,
}
