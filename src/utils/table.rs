//! Table rendering for CLI outputs. Column widths follow the widest cell,
//! measured in terminal columns rather than bytes.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    /// Render the table. `decorate` may wrap a padded cell (e.g. in colour)
    /// after its width has been computed.
    pub fn render_with<F>(&self, decorate: F) -> String
    where
        F: Fn(usize, usize, String) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(&pad_right(h, widths[i]));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&decorate(r, i, pad_right(cell, *w)));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, cell| cell)
    }
}
