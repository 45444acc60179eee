use std::{
    io::{Write, stdout},
    time::Instant,
};

use log::{debug, warn};

use crate::{
    core::{
        color::{AnsiCode, ColorMode, DEFAULT_PALETTE, DEFAULT_PALETTE_NAMES, colorize},
        config::{PlotConfig, PlotConfigBuilder},
        data::{Series, read_series_from_path},
        error::GraphError,
        rng::Lcg,
        term::{Stdout, TermCaps},
    },
    render::{DEFAULT_STYLES, Plotter, braille_char, dot_bit, resample},
    stats::{
        SessionAggregate, last_sessions, learning_curves, moving_average, render_curves,
        render_summary, sparkline,
    },
};

use super::parse::{CanvasArgs, CurvesArgs, DemoArgs, PlotArgs};

/// Builder pre-filled from the shared geometry/colour flags.
fn canvas_config(c: &CanvasArgs) -> PlotConfigBuilder {
    let mut b = PlotConfig::builder().color(c.color.into());
    if let Some(w) = c.width {
        b = b.total_width(w);
    }
    if let Some(w) = c.plot_width {
        b = b.plot_width(w);
    }
    if let Some(h) = c.height {
        b = b.height(h);
    }
    b
}

fn plotter(c: &CanvasArgs) -> Result<Plotter, GraphError> {
    if c.palette.is_empty() {
        return Ok(Plotter::default());
    }
    let palette = c
        .palette
        .iter()
        .map(|name| AnsiCode::from_name(name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Plotter::default().with_palette(palette)?)
}

/// Empty series are skipped by the renderer; from the command line that
/// usually means a typo, so say so.
fn require_data(series: &[Series]) -> Result<(), GraphError> {
    let empty = series.iter().filter(|s| s.is_empty()).count();
    if empty == series.len() {
        return Err(GraphError::EmptyData);
    }
    if empty > 0 {
        warn!("skipping {empty} empty series");
    }
    Ok(())
}

pub fn plot(a: PlotArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let mut series = read_series_from_path(&a.file)?;
    debug!(
        "CSV ingest: {} µs   ({} series)",
        t_ingest.elapsed().as_micros(),
        series.len()
    );
    require_data(&series)?;

    if a.window > 1 {
        for s in &mut series {
            s.values = moving_average(&s.values, a.window);
        }
    }

    let cfg = canvas_config(&a.canvas)
        .title_opt(a.title.as_deref())
        .build()?;
    let t_render = Instant::now();
    plotter(&a.canvas)?.render(&mut stdout().lock(), &Stdout, &cfg, &series)?;
    debug!("render: {} µs", t_render.elapsed().as_micros());
    Ok(())
}

/// Pull a column by header name, or by position for headerless files.
fn column<'a>(
    series: &'a [Series],
    name: &'static str,
    position: usize,
) -> Result<&'a [f64], GraphError> {
    series
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .or_else(|| {
            series
                .get(position)
                .filter(|s| s.name == format!("s{}", position + 1))
        })
        .map(|s| s.values.as_slice())
        .ok_or(GraphError::MissingColumn(name))
}

// counts and durations in the file are whole numbers
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(v: f64) -> u64 {
    v.max(0.0).round() as u64
}

#[allow(clippy::cast_possible_truncation)]
fn to_millis(v: f64) -> i64 {
    v.round() as i64
}

/// Rows of a session CSV, oldest first.
///
/// Blank cells are dropped per column by the loader, so every column must
/// come out the same length or the rows no longer line up.
pub fn sessions_from(series: &[Series]) -> Result<Vec<SessionAggregate>, GraphError> {
    let correct = column(series, "correct", 0)?;
    let incorrect = column(series, "incorrect", 1)?;
    let duration = column(series, "duration_ms", 2)?;
    for (name, values) in [("incorrect", incorrect), ("duration_ms", duration)] {
        if values.len() != correct.len() {
            return Err(GraphError::RaggedColumn {
                column: name,
                expected: correct.len(),
                got: values.len(),
            });
        }
    }
    Ok(correct
        .iter()
        .zip(incorrect)
        .zip(duration)
        .enumerate()
        .map(|(i, ((&c, &x), &d))| SessionAggregate {
            session_id: i64::try_from(i).unwrap_or(i64::MAX),
            correct: to_count(c),
            incorrect: to_count(x),
            duration_ms: to_millis(d),
        })
        .collect())
}

pub fn curves(a: CurvesArgs) -> Result<(), GraphError> {
    let series = read_series_from_path(&a.file)?;
    let all = sessions_from(&series)?;
    let sessions = last_sessions(&all, a.last);
    debug!("{} of {} sessions selected", sessions.len(), all.len());

    let cfg = canvas_config(&a.canvas).build()?;
    let mut out = stdout().lock();
    render_summary(&mut out, sessions)?;
    if let Some(wpm) = learning_curves(sessions, a.window)
        .first()
        .filter(|s| !s.is_empty())
    {
        // at most one sparkline char per plot cell
        let cells = cfg.width.resolve(&Stdout);
        let trend = resample(&wpm.values, cells.min(wpm.len()));
        writeln!(out, "WPM trend: [{}]", sparkline(&trend))?;
        writeln!(out)?;
    }
    render_curves(&mut out, &Stdout, &plotter(&a.canvas)?, &cfg, sessions, a.window)
}

pub fn demo(a: &DemoArgs) -> Result<(), GraphError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let series: Vec<Series> = (0..a.series.max(1))
        .map(|i| {
            let values = rng.walk(0.0, a.steps.max(1), a.mu, a.sigma);
            Series::new(format!("walk {}", i + 1), values)
        })
        .collect();

    let cfg = canvas_config(&a.canvas)
        .title(format!(
            "Random walks (μ = {}, σ = {}, {} steps)",
            a.mu, a.sigma, a.steps
        ))
        .build()?;
    plotter(&a.canvas)?.render(&mut stdout().lock(), &Stdout, &cfg, &series)
}

/// Pretty-print line styles and palette colours.
pub fn styles() {
    let color = ColorMode::Auto.resolve(&Stdout);
    let marker = braille_char(dot_bit(0, 0));

    println!("\nLine styles (assigned by series index):");
    for (i, s) in DEFAULT_STYLES.iter().enumerate() {
        let pattern: String = (0..24)
            .map(|x| if s.plots(x) { '━' } else { ' ' })
            .collect();
        println!("  {i}  {:<8} {pattern}", s.name);
    }

    println!("\nPalette (cycled by series index):");
    for (name, code) in DEFAULT_PALETTE_NAMES.iter().zip(&DEFAULT_PALETTE) {
        let label = format!("{marker} {name}");
        if color {
            println!("  {}", colorize(code, &label));
        } else {
            println!("  {label}");
        }
    }
    println!(
        "\nAny colour name above or a #RRGGBB code works with --palette.{}\n",
        if Stdout.no_color() { "  (NO_COLOR is set)" } else { "" }
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "braille-curves";
    println!(
        "
Example invocations
-------------------
• Plot CSV columns   : {bin} plot data.csv --title \"Throughput\"
• From stdin         : seq 1 50 | {bin} plot -
• Smoothed           : {bin} plot data.csv --window 5
• Fixed size         : {bin} plot data.csv --width 100 -H 12
• Custom palette     : {bin} plot data.csv --palette red,#6048c1
• No colour          : NO_COLOR=1 {bin} plot data.csv
• Typing curves      : {bin} curves sessions.csv --last 50 --window 10
• Random walks       : {bin} demo --series 4 --steps 2000 --seed 7
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::read_series_csv;

    #[test]
    fn sessions_by_header_name() {
        let series = vec![
            Series::new("duration_ms", vec![60_000.0, 30_000.0]),
            Series::new("Correct", vec![250.0, 100.0]),
            Series::new("incorrect", vec![5.0, 0.0]),
        ];
        let sessions = sessions_from(&series).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(
            sessions[1],
            SessionAggregate {
                session_id: 1,
                correct: 100,
                incorrect: 0,
                duration_ms: 30_000,
            }
        );
    }

    #[test]
    fn sessions_by_position_without_header() {
        let series = vec![
            Series::new("s1", vec![10.0]),
            Series::new("s2", vec![2.0]),
            Series::new("s3", vec![1_000.0]),
        ];
        let sessions = sessions_from(&series).unwrap();
        assert_eq!(sessions[0].correct, 10);
        assert_eq!(sessions[0].duration_ms, 1_000);
    }

    #[test]
    fn blank_cell_is_rejected_not_shifted() {
        let csv = "correct,incorrect,duration_ms\n100,,60000\n200,10,60000\n";
        let series = read_series_csv(csv.as_bytes()).unwrap();
        let err = sessions_from(&series).unwrap_err();
        assert!(matches!(
            err,
            GraphError::RaggedColumn {
                column: "incorrect",
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn missing_column_is_named() {
        let series = vec![Series::new("correct", vec![1.0])];
        let err = sessions_from(&series).unwrap_err();
        assert!(matches!(err, GraphError::MissingColumn("incorrect")));
    }

    #[test]
    fn all_empty_is_an_error_here() {
        assert!(matches!(
            require_data(&[Series::new("x", vec![])]),
            Err(GraphError::EmptyData)
        ));
        assert!(require_data(&[Series::new("x", vec![]), Series::new("y", vec![1.0])]).is_ok());
    }

    #[test]
    fn bad_palette_entry_fails() {
        let c = CanvasArgs {
            palette: vec!["red".into(), "nope".into()],
            ..CanvasArgs::default()
        };
        assert!(matches!(plotter(&c), Err(GraphError::Color(_))));
    }
}
