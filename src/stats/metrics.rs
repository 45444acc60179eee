//! Per-session speed/accuracy numbers and small series transforms.

/// Ramp from "low" to "high" used by [`sparkline`].
const SPARK_CHARS: &[u8] = b" .:-=+*#%@";

/// Speed and accuracy of one typing session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionMetrics {
    /// Words per minute, a word being five correct keystrokes.
    pub wpm: f64,
    /// Correct characters per minute.
    pub cpm: f64,
    /// `correct / (correct + incorrect)`, in `0..=1`.
    pub accuracy: f64,
}

/// All zero when `duration_ms` is not positive.
#[must_use]
pub fn session_metrics(correct: u64, incorrect: u64, duration_ms: i64) -> SessionMetrics {
    if duration_ms <= 0 {
        return SessionMetrics::default();
    }
    let minutes = duration_ms as f64 / 60_000.0;
    let correct_f = correct as f64;
    let keys = correct + incorrect;
    SessionMetrics {
        wpm: (correct_f / 5.0) / minutes,
        cpm: correct_f / minutes,
        accuracy: if keys > 0 { correct_f / keys as f64 } else { 0.0 },
    }
}

/// Trailing mean over `window` samples. Until the window fills, the mean
/// covers the prefix seen so far. `window <= 1` copies the input.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.to_vec();
    }
    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            sum += v;
            if i >= window {
                sum -= values[i - window];
            }
            sum / (i + 1).min(window) as f64
        })
        .collect()
}

/// One ASCII character per value, scaled between the series' min and max.
/// A flat series is drawn with the middle of the ramp.
#[must_use]
pub fn sparkline(values: &[f64]) -> String {
    let Some(&first) = values.first() else {
        return String::new();
    };
    let (lo, hi) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let top = SPARK_CHARS.len() - 1;
    if (hi - lo).abs() < 1e-9 {
        return char::from(SPARK_CHARS[SPARK_CHARS.len() / 2])
            .to_string()
            .repeat(values.len());
    }
    values
        .iter()
        .map(|&v| {
            let pos = ((v - lo) / (hi - lo) * top as f64).round();
            // pos is in 0..=top once clamped
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = pos.clamp(0.0, top as f64) as usize;
            char::from(SPARK_CHARS[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_for_one_minute() {
        let m = session_metrics(250, 50, 60_000);
        assert!((m.wpm - 50.0).abs() < 1e-9);
        assert!((m.cpm - 250.0).abs() < 1e-9);
        assert!((m.accuracy - 250.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_is_all_zero() {
        assert_eq!(session_metrics(10, 1, 0), SessionMetrics::default());
        assert_eq!(session_metrics(10, 1, -5), SessionMetrics::default());
    }

    #[test]
    fn no_keys_means_zero_accuracy() {
        assert_eq!(session_metrics(0, 0, 1_000).accuracy, 0.0);
    }

    #[test]
    fn moving_average_warms_up() {
        let got = moving_average(&[2.0, 4.0, 6.0, 8.0], 2);
        assert_eq!(got, vec![2.0, 3.0, 5.0, 7.0]);
        assert_eq!(moving_average(&[1.0, 9.0], 1), vec![1.0, 9.0]);
        assert!(moving_average(&[], 3).is_empty());
    }

    #[test]
    fn sparkline_spans_the_ramp() {
        assert_eq!(sparkline(&[0.0, 9.0]), " @");
        assert_eq!(sparkline(&[1.0, 1.0, 1.0]), "+++");
        assert_eq!(sparkline(&[]), "");
    }
}
