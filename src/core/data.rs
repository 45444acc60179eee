//! Named numeric series + a memory-efficient CSV loader with zero-allocation
//! float parsing.
//!
//! Every CSV column becomes one [`Series`]. An optional header row names the
//! columns; otherwise they are called `s1`, `s2`, ...

use std::io::{BufRead, BufReader, Read};

// --- Public Row Structs ---

/// One named sequence of samples, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// --- Error Handling ---
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
    #[error("expected at most {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid value '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
    #[error("no numeric rows found")]
    NoData,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 MINUS SIGN as ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

fn is_header(buf: &[u8]) -> bool {
    buf.split(|&b| b == b',')
        .map(trim)
        .any(|f| !f.is_empty() && lexical_core::parse::<f64>(f).is_err())
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read column-oriented series from `src`.
///
/// * `#` starts a comment line; blank lines are ignored.
/// * A first row containing any non-numeric field is the header.
/// * Blank fields are skipped, so columns may end up with different lengths.
///
/// # Errors
/// I/O failures, non-finite or malformed numbers, rows wider than the first
/// row, or a file without a single numeric row.
pub fn read_series_csv<R: Read>(src: R) -> Result<Vec<Series>, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = Vec::<Series>::new();
    let mut saw_first = false;
    let mut saw_data = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        if !saw_first {
            saw_first = true;
            let header = is_header(&buf);
            series = buf
                .split(|&b| b == b',')
                .enumerate()
                .map(|(i, field)| {
                    let name = if header {
                        String::from_utf8_lossy(trim(field)).into_owned()
                    } else {
                        String::new()
                    };
                    if name.is_empty() {
                        Series::new(format!("s{}", i + 1), Vec::new())
                    } else {
                        Series::new(name, Vec::new())
                    }
                })
                .collect();
            if header {
                continue;
            }
        }

        let expected = series.len();
        for (column, field) in buf.split(|&b| b == b',').enumerate() {
            let field = trim(field);
            let Some(s) = series.get_mut(column) else {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount {
                        expected,
                        got: buf.split(|&b| b == b',').count(),
                    },
                });
            };
            if field.is_empty() {
                continue;
            }
            s.values.push(parse_f64(field, line_no, column + 1)?);
            saw_data = true;
        }
    }
    if !saw_data {
        return Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoData,
        });
    }
    Ok(series)
}

/// Like [`read_series_csv`]; `-` means stdin.
///
/// # Errors
/// See [`read_series_csv`]; opening the file maps to an I/O error on line 0.
pub fn read_series_from_path(path: &str) -> Result<Vec<Series>, ParseCsvError> {
    if path == "-" {
        read_series_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_series_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_columns() {
        let csv = "wpm, accuracy\n40,90\n42.5,91\n";
        let got = read_series_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            got,
            vec![
                Series::new("wpm", vec![40.0, 42.5]),
                Series::new("accuracy", vec![90.0, 91.0]),
            ]
        );
    }

    #[test]
    fn headerless_columns_get_default_names() {
        let csv = "# comment\n1,2\r\n\n3,4\n";
        let got = read_series_csv(csv.as_bytes()).unwrap();
        assert_eq!(got[0], Series::new("s1", vec![1.0, 3.0]));
        assert_eq!(got[1], Series::new("s2", vec![2.0, 4.0]));
    }

    #[test]
    fn blank_fields_are_skipped() {
        let csv = "a,b\n1,\n2,5\n,6\n";
        let got = read_series_csv(csv.as_bytes()).unwrap();
        assert_eq!(got[0].values, vec![1.0, 2.0]);
        assert_eq!(got[1].values, vec![5.0, 6.0]);
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let csv = "x\n\u{2212}2.5\n";
        let got = read_series_csv(csv.as_bytes()).unwrap();
        assert_eq!(got[0].values, vec![-2.5]);
    }

    #[test]
    fn rows_wider_than_header_fail() {
        let err = read_series_csv("a\n1,2\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn bad_number_reports_column() {
        let err = read_series_csv("1,2\n3,x\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { column: 2, .. }));
    }

    #[test]
    fn header_only_is_no_data() {
        let err = read_series_csv("a,b\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoData));
    }
}
