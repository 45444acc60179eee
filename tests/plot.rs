use braille_curves::{
    ColorMode, ConfigError, Detached, GraphError, PlotConfig, Plotter, Series, SeriesRange,
    TermCaps, plot_series,
    render::{DEFAULT_STYLES, rasterize, resample},
};

/// Interactive terminal with a fixed width and a settable `NO_COLOR`.
struct FakeTty {
    columns: Option<usize>,
    no_color: bool,
}

impl TermCaps for FakeTty {
    fn is_interactive(&self) -> bool {
        true
    }
    fn columns(&self) -> Option<usize> {
        self.columns
    }
    fn no_color(&self) -> bool {
        self.no_color
    }
}

const TTY: FakeTty = FakeTty {
    columns: Some(60),
    no_color: false,
};

fn ab() -> Vec<Series> {
    vec![
        Series::new("A", vec![1.0, 2.0, 3.0, 2.0, 1.0]),
        Series::new("B", vec![1.0, 1.0, 2.0, 3.0, 4.0]),
    ]
}

fn test_plot_config(color: ColorMode) -> PlotConfig {
    PlotConfig::builder()
        .title("Test Plot")
        .total_width(5)
        .height(4)
        .color(color)
        .build()
        .unwrap()
}

#[test_log::test]
fn end_to_end_layout() {
    let text = Plotter::default().render_to_string(&test_plot_config(ColorMode::Never), &ab());
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines[0], "Test Plot");
    assert_eq!(lines[1], "Scaled per series; see min/max below.");
    assert_eq!(lines[2], "A: min=1.00 max=2.78");
    assert_eq!(lines[3], "B: min=1.00 max=4.00");
    assert!(lines[4].starts_with("100% │ "));
    assert!(lines[5].starts_with("     │ "));
    assert!(lines[6].starts_with(" 50% │ "));
    assert!(lines[7].starts_with("  0% │ "));
    assert_eq!(lines[8], "Legend: ⠁ A (solid)  ⠁ B (dashed)");
    // legend line, one blank line, then the final newline
    assert_eq!(&lines[9..], &["", ""]);
}

#[test]
fn end_to_end_cells() {
    let text = Plotter::default().render_to_string(&test_plot_config(ColorMode::Never), &ab());
    let rows: Vec<&str> = text.lines().skip(4).take(4).collect();
    assert_eq!(
        rows,
        vec![
            "100% │ ⠀⠀⠀⢠⠋⠱⡀⠀⠀⠁",
            "     │ ⠀⠀⢠⠃⠀⠀⡱⡁⠀⠀",
            " 50% │ ⠀⡰⠁⠀⡀⠀⠀⠱⡀⠀",
            "  0% │ ⣰⡁⠀⠊⠀⠀⠀⠀⠘⡄",
        ]
    );
}

#[test]
fn rendering_is_repeatable() {
    let p = Plotter::default();
    let cfg = test_plot_config(ColorMode::Always);
    assert_eq!(p.frame(&cfg, &ab(), &TTY), p.frame(&cfg, &ab(), &TTY));
}

#[test]
fn flat_series_reports_widened_range() {
    assert_eq!(resample(&[5.0, 5.0, 5.0], 3), vec![5.0, 5.0, 5.0]);
    let cfg = PlotConfig::builder()
        .plot_width(3)
        .height(2)
        .color(ColorMode::Never)
        .build()
        .unwrap();
    let text = Plotter::default().render_to_string(&cfg, &[Series::new("flat", vec![5.0; 3])]);
    assert!(text.contains("flat: min=4.00 max=6.00"));
}

#[test]
fn no_escape_bytes_without_color() {
    let p = Plotter::default();
    let forced_off = p.frame(&test_plot_config(ColorMode::Never), &ab(), &TTY);
    let no_color = p.frame(
        &test_plot_config(ColorMode::Always),
        &ab(),
        &FakeTty {
            columns: Some(60),
            no_color: true,
        },
    );
    let piped = p.frame(&test_plot_config(ColorMode::Auto), &ab(), &Detached);
    for text in [forced_off, no_color, piped] {
        assert!(!text.is_empty());
        assert!(!text.as_bytes().contains(&0x1b));
    }
}

#[test]
fn terminal_gets_color_in_auto_mode() {
    let text = Plotter::default().frame(&test_plot_config(ColorMode::Auto), &ab(), &TTY);
    assert!(text.as_bytes().contains(&0x1b));
    // every colour sequence in a data row is closed before the next cell
    for row in text.lines().skip(4).take(4) {
        let body = row.split_once(" │ ").unwrap().1;
        assert_eq!(body.matches("\x1b[0m").count(), body.matches("\x1b[3").count());
    }
}

#[test]
fn all_empty_writes_nothing() {
    let mut sink = Vec::new();
    let series = [Series::new("a", vec![]), Series::new("b", vec![])];
    Plotter::default()
        .render(&mut sink, &TTY, &test_plot_config(ColorMode::Always), &series)
        .unwrap();
    assert!(sink.is_empty());
}

#[test]
fn row_width_follows_the_terminal() {
    let cfg = PlotConfig::builder().height(3).color(ColorMode::Never).build().unwrap();
    let long: Vec<f64> = (0..500).map(|i| f64::from(i).sin()).collect();
    let text = Plotter::default().frame(&cfg, &[Series::new("sin", long)], &TTY);
    for row in text.lines().skip(2).take(3) {
        assert_eq!(row.chars().count(), 60);
    }
    let fallback = Plotter::default().render_to_string(&cfg, &[Series::new("x", vec![1.0, 2.0])]);
    let row = fallback.lines().nth(2).unwrap();
    assert_eq!(row.chars().count(), 80);
}

#[test]
fn steep_solid_segment_has_no_gaps() {
    for values in [[0.0, 100.0, 0.0], [100.0, 0.0, 100.0]] {
        let range = SeriesRange::of(&values);
        let grid = rasterize(&values, range, 5, &DEFAULT_STYLES[0]);
        // 20 dot rows; each one is crossed between dot columns 0 and 4
        for y in 0..20 {
            assert!((0..=2).any(|x| grid.is_lit(x, y)), "rise gap at row {y}");
            assert!((2..=4).any(|x| grid.is_lit(x, y)), "fall gap at row {y}");
        }
    }
}

#[test]
fn overlapping_series_stay_distinguishable_without_color() {
    // identical data, different dash styles: the legend tells them apart
    let same = vec![1.0, 2.0, 3.0, 4.0];
    let series = [Series::new("x", same.clone()), Series::new("y", same)];
    let cfg = PlotConfig::builder().plot_width(10).height(2).color(ColorMode::Never).build().unwrap();
    let text = Plotter::default().render_to_string(&cfg, &series);
    assert!(text.contains("⠁ x (solid)  ⠁ y (dashed)"));
}

#[test]
fn one_shot_helper_checks_height_first() {
    let err = plot_series("t", &ab(), None, Some(0), ColorMode::Never).unwrap_err();
    assert!(matches!(err, GraphError::Config(ConfigError::ZeroHeight)));
    // nothing to draw, so nothing reaches stdout
    plot_series("t", &[Series::new("e", vec![])], Some(40), None, ColorMode::Never).unwrap();
}
