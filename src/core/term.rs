//! What the renderer needs to know about its output sink.
//!
//! Detection through the concrete handle type stays in here so that the
//! renderer (and its tests) only ever see the [`TermCaps`] trait.

use std::io::{IsTerminal, stdout};

use terminal_size::{Width, terminal_size_of};

/// Capabilities of the sink a plot is written to.
pub trait TermCaps {
    /// Is a human looking at a terminal on the other end?
    fn is_interactive(&self) -> bool;

    /// Width in columns, `None` when unknown.
    fn columns(&self) -> Option<usize>;

    /// `NO_COLOR` set to any non-empty value.
    fn no_color(&self) -> bool {
        no_color_env()
    }
}

/// Reads `NO_COLOR` from the process environment.
#[must_use]
pub fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// The process' standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl TermCaps for Stdout {
    fn is_interactive(&self) -> bool {
        stdout().is_terminal()
    }

    fn columns(&self) -> Option<usize> {
        terminal_size_of(stdout())
            .map(|(Width(w), _)| usize::from(w))
            .filter(|&w| w > 0)
    }
}

/// A sink that is never a terminal: buffers, files, pipes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl TermCaps for Detached {
    fn is_interactive(&self) -> bool {
        false
    }

    fn columns(&self) -> Option<usize> {
        None
    }
}
