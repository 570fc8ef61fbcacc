//! Minimal column-aligned table rendering for stdout.

use unicode_width::UnicodeWidthStr;

/// One table cell: the plain text used for width math, plus the string
/// actually printed (which may carry ANSI styling).
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    display: String,
}

impl Cell {
    /// A cell printed exactly as measured.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let display = text.clone();
        Self { text, display }
    }

    /// A cell whose printed form differs from its measured text.
    ///
    /// `text` must be the unstyled content so padding stays correct
    /// when `display` carries escape sequences.
    pub fn styled(text: impl Into<String>, display: impl Into<String>) -> Self {
        Self { text: text.into(), display: display.into() }
    }
}

/// A header row plus data rows, rendered with two-space gutters.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Start a table with the given column headers.
    #[must_use]
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self { headers: headers.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Append one row. Short rows are padded with empty cells.
    pub fn add_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    /// What: Render the table to a newline-terminated string.
    ///
    /// Details:
    /// - Column widths come from the widest unstyled content, measured
    ///   with `unicode-width` so wide glyphs line up.
    /// - A dash rule separates the header from the rows.
    #[must_use]
    pub fn render(&self) -> String {
        let cols = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; cols];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = widths[i].max(header.width());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.text.width());
            }
        }

        let mut out = String::new();
        if !self.headers.is_empty() {
            for (i, header) in self.headers.iter().enumerate() {
                push_padded(&mut out, header, header.width(), widths[i], i + 1 == cols);
            }
            out.push('\n');
            for (i, width) in widths.iter().enumerate() {
                push_padded(&mut out, &"-".repeat(*width), *width, *width, i + 1 == cols);
            }
            out.push('\n');
        }
        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                let (display, text_width) = row
                    .get(i)
                    .map_or(("", 0), |cell| (cell.display.as_str(), cell.text.width()));
                push_padded(&mut out, display, text_width, *width, i + 1 == cols);
            }
            out.push('\n');
        }
        out
    }
}

/// Write `display` padded to `width`, with a gutter unless last column.
fn push_padded(out: &mut String, display: &str, text_width: usize, width: usize, last: bool) {
    out.push_str(display);
    if !last {
        for _ in text_width..width + 2 {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: columns align on the widest unstyled cell.
    ///
    /// - Input: Two rows with different widths plus a styled cell whose
    ///   display is longer than its text.
    /// - Output: Every data line starts its second column at the same
    ///   offset.
    #[test]
    fn columns_align() {
        let mut table = Table::new(["Hex", "Ratio"]);
        table.add_row(vec![Cell::plain("#4d9375"), Cell::plain("5.13")]);
        table.add_row(vec![
            Cell::styled("#fff", "\u{1b}[7m#fff\u{1b}[0m"),
            Cell::plain("21.00"),
        ]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Hex"));
        assert!(lines[1].starts_with("---"));
        // "#4d9375" is 7 wide, so the gutter puts "5.13" at column 9.
        assert_eq!(&lines[2][9..], "5.13");
        assert!(lines[3].ends_with("21.00"));
    }

    /// What: short rows render without panicking.
    #[test]
    fn short_rows_pad() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(vec![Cell::plain("only")]);
        let rendered = table.render();
        assert!(rendered.contains("only"));
    }
}
