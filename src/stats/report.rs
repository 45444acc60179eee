//! Text reports over typing-session aggregates: summary, learning curves,
//! per-character table and curves.
//!
//! The aggregates come from whatever store the caller keeps; nothing in here
//! reads or writes persistent state.

use std::{
    collections::{BTreeSet, HashMap},
    io::Write,
};

use crate::{
    core::{config::PlotConfig, data::Series, error::GraphError, term::TermCaps},
    render::Plotter,
    stats::{
        metrics::{moving_average, session_metrics},
        table::format_table,
    },
};

/// Totals of one finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionAggregate {
    pub session_id: i64,
    pub correct: u64,
    pub incorrect: u64,
    pub duration_ms: i64,
}

/// Keystroke totals for one character, over one or more sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharAggregate {
    pub ch: String,
    pub correct: u64,
    pub incorrect: u64,
    pub latency_sum_ms: u64,
    pub latency_count: u64,
}

impl CharAggregate {
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.correct + self.incorrect
    }

    /// 0 when the character was never typed.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            t => self.correct as f64 / t as f64,
        }
    }

    #[must_use]
    pub fn mean_latency_ms(&self) -> f64 {
        match self.latency_count {
            0 => 0.0,
            n => self.latency_sum_ms as f64 / n as f64,
        }
    }
}

/// Per-session, per-character aggregates keyed by session id.
pub type PerSessionChars = HashMap<i64, HashMap<String, CharAggregate>>;

/// The trailing `n` sessions; all of them when `n` is 0.
#[must_use]
pub fn last_sessions(sessions: &[SessionAggregate], n: usize) -> &[SessionAggregate] {
    if n == 0 || sessions.len() <= n {
        sessions
    } else {
        &sessions[sessions.len() - n..]
    }
}

/// # Errors
/// Sink write failures.
pub fn render_summary<W: Write + ?Sized>(
    out: &mut W,
    sessions: &[SessionAggregate],
) -> Result<(), GraphError> {
    if sessions.is_empty() {
        writeln!(out, "No sessions found.")?;
        return Ok(());
    }
    let (mut wpm, mut cpm, mut acc, mut best) = (0.0, 0.0, 0.0, 0.0_f64);
    for s in sessions {
        let m = session_metrics(s.correct, s.incorrect, s.duration_ms);
        wpm += m.wpm;
        cpm += m.cpm;
        acc += m.accuracy;
        best = best.max(m.wpm);
    }
    let n = sessions.len() as f64;
    writeln!(out, "Summary")?;
    writeln!(out, "Sessions: {}", sessions.len())?;
    writeln!(out, "Avg WPM: {:.2}", wpm / n)?;
    writeln!(out, "Best WPM: {best:.2}")?;
    writeln!(out, "Avg CPM: {:.2}", cpm / n)?;
    writeln!(out, "Avg Accuracy: {:.2}%", acc / n * 100.0)?;
    writeln!(out)?;
    Ok(())
}

/// Moving-averaged WPM and accuracy (percent), one sample per session.
#[must_use]
pub fn learning_curves(sessions: &[SessionAggregate], window: usize) -> Vec<Series> {
    let (wpm, acc): (Vec<f64>, Vec<f64>) = sessions
        .iter()
        .map(|s| {
            let m = session_metrics(s.correct, s.incorrect, s.duration_ms);
            (m.wpm, m.accuracy * 100.0)
        })
        .unzip();
    vec![
        Series::new("WPM", moving_average(&wpm, window)),
        Series::new("Accuracy", moving_average(&acc, window)),
    ]
}

/// "Learning Curves" plot. Writes nothing without sessions.
///
/// # Errors
/// Sink write failures.
pub fn render_curves<W, C>(
    out: &mut W,
    caps: &C,
    plotter: &Plotter,
    config: &PlotConfig,
    sessions: &[SessionAggregate],
    window: usize,
) -> Result<(), GraphError>
where
    W: Write + ?Sized,
    C: TermCaps + ?Sized,
{
    if sessions.is_empty() {
        return Ok(());
    }
    plotter.render(
        out,
        caps,
        &config.titled("Learning Curves"),
        &learning_curves(sessions, window),
    )
}

/// Accuracy (percent) and mean latency of `ch` per session, moving-averaged.
/// Sessions where `ch` was not typed count as 0.
#[must_use]
pub fn char_curves(
    sessions: &[SessionAggregate],
    per_session: &PerSessionChars,
    ch: &str,
    window: usize,
) -> Vec<Series> {
    let (acc, lat): (Vec<f64>, Vec<f64>) = sessions
        .iter()
        .map(|s| {
            per_session
                .get(&s.session_id)
                .and_then(|chars| chars.get(ch))
                .map_or((0.0, 0.0), |agg| {
                    (agg.accuracy() * 100.0, agg.mean_latency_ms())
                })
        })
        .unzip();
    vec![
        Series::new("Accuracy", moving_average(&acc, window)),
        Series::new("Latency", moving_average(&lat, window)),
    ]
}

/// "Per-Character Curves" header followed by one "Char <c>" plot per entry
/// of `chars`.
///
/// # Errors
/// Sink write failures.
#[allow(clippy::too_many_arguments)]
pub fn render_char_curves<W, C>(
    out: &mut W,
    caps: &C,
    plotter: &Plotter,
    config: &PlotConfig,
    sessions: &[SessionAggregate],
    per_session: &PerSessionChars,
    chars: &[String],
    window: usize,
) -> Result<(), GraphError>
where
    W: Write + ?Sized,
    C: TermCaps + ?Sized,
{
    if chars.is_empty() || sessions.is_empty() {
        return Ok(());
    }
    writeln!(out, "Per-Character Curves")?;
    for ch in chars {
        plotter.render(
            out,
            caps,
            &config.titled(format!("Char {ch}")),
            &char_curves(sessions, per_session, ch, window),
        )?;
    }
    Ok(())
}

/// How a character is shown in tables; a bare space would be invisible.
fn display_label(ch: &str) -> &str {
    if ch == " " { "<space>" } else { ch }
}

/// Table of `aggs`, weakest accuracy first.
///
/// # Errors
/// Sink write failures.
pub fn render_char_table<W: Write + ?Sized>(
    out: &mut W,
    aggs: &[CharAggregate],
) -> Result<(), GraphError> {
    if aggs.is_empty() {
        writeln!(out, "No character stats found.")?;
        return Ok(());
    }
    let mut sorted: Vec<&CharAggregate> = aggs.iter().collect();
    sorted.sort_by(|a, b| {
        a.accuracy()
            .total_cmp(&b.accuracy())
            .then_with(|| display_label(&a.ch).cmp(display_label(&b.ch)))
    });

    let rows: Vec<Vec<String>> = sorted
        .iter()
        .map(|agg| {
            vec![
                display_label(&agg.ch).to_owned(),
                format!("{:.2}%", agg.accuracy() * 100.0),
                format!("{:.1}", agg.mean_latency_ms()),
                agg.correct.to_string(),
                agg.incorrect.to_string(),
            ]
        })
        .collect();

    writeln!(out, "Per-Character (Windowed)")?;
    let headers = ["Char", "Accuracy", "Avg Latency (ms)", "Correct", "Incorrect"];
    for line in format_table(&headers, &rows, &[1, 2, 3, 4]) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// The `n` most typed characters, ties broken alphabetically.
#[must_use]
pub fn top_chars_by_frequency(aggs: &[CharAggregate], n: usize) -> Vec<String> {
    let mut items: Vec<&CharAggregate> = aggs.iter().collect();
    items.sort_by(|a, b| b.total().cmp(&a.total()).then_with(|| a.ch.cmp(&b.ch)));
    items.into_iter().take(n).map(|a| a.ch.clone()).collect()
}

/// First characters of the `n` lowest-accuracy aggregates, ties broken
/// alphabetically; `n == 0` or `n` past the end selects all of them.
/// Characters never typed count as fully accurate.
#[must_use]
pub fn weak_chars(aggs: &[CharAggregate], n: usize) -> BTreeSet<char> {
    let accuracy = |a: &CharAggregate| if a.total() == 0 { 1.0 } else { a.accuracy() };
    let mut items: Vec<&CharAggregate> = aggs.iter().collect();
    items.sort_by(|a, b| {
        accuracy(a)
            .total_cmp(&accuracy(b))
            .then_with(|| a.ch.cmp(&b.ch))
    });
    let n = if n == 0 { items.len() } else { n };
    items
        .into_iter()
        .take(n)
        .filter_map(|a| a.ch.chars().next())
        .collect()
}
