//! Plain-text tables padded by character count.

/// Pad every cell to its column width. Columns listed in `right_align` are
/// right-aligned; short rows are padded with empty cells. The header line
/// comes first when `headers` is non-empty.
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>], right_align: &[usize]) -> Vec<String> {
    let cols = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    if cols == 0 {
        return Vec::new();
    }

    let mut widths = vec![0usize; cols];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = display_width(h);
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !headers.is_empty() {
        lines.push(format_row(headers.iter().copied(), &widths, right_align));
    }
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths, right_align));
    }
    lines
}

fn format_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_align: &[usize],
) -> String {
    let mut cells = cells.fuse();
    let mut line = String::new();
    for (i, &w) in widths.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let cell = cells.next().unwrap_or("");
        line.push_str(&pad_cell(cell, w, right_align.contains(&i)));
    }
    line
}

fn pad_cell(value: &str, width: usize, right: bool) -> String {
    let pad = width.saturating_sub(display_width(value));
    if right {
        format!("{}{value}", " ".repeat(pad))
    } else {
        format!("{value}{}", " ".repeat(pad))
    }
}

#[inline]
fn display_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_aligns() {
        let rows = vec![
            vec!["a".to_owned(), "1".to_owned()],
            vec!["<space>".to_owned(), "100".to_owned()],
        ];
        let lines = format_table(&["Char", "N"], &rows, &[1]);
        assert_eq!(lines, vec!["Char      N", "a         1", "<space> 100"]);
    }

    #[test]
    fn short_rows_get_blank_cells() {
        let rows = vec![vec!["x".to_owned()]];
        let lines = format_table(&["A", "B"], &rows, &[]);
        assert_eq!(lines, vec!["A B", "x  "]);
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(format_table(&[], &[], &[]).is_empty());
    }
}
