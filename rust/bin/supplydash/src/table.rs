//! Plain-text tables with sortable columns.

use std::cmp::Ordering;
use std::fmt::Write;

/// One table cell. Numeric cells sort numerically, text cells
/// case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    /// Value and number of decimals to print.
    Float(f64, usize),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::Float(v, decimals) => format!("{:.*}", *decimals, v),
        }
    }

    fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => a.cmp(b),
            (Cell::Float(a, _), Cell::Float(b, _)) => a.total_cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => self.render().cmp(&other.render()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column whose header matches `name`, ignoring case,
    /// spaces, dashes and underscores.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = normalize(name);
        self.headers.iter().position(|h| normalize(h) == wanted)
    }

    /// Stable sort by the named column.
    pub fn sort_by(&mut self, column: &str, descending: bool) -> anyhow::Result<()> {
        let idx = self.column(column).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown column \"{}\". Columns: {}",
                column,
                self.headers.join(", ")
            )
        })?;
        self.rows.sort_by(|a, b| {
            let ord = a[idx].compare(&b[idx]);
            if descending { ord.reverse() } else { ord }
        });
        Ok(())
    }

    /// Render with columns padded to their widest cell.
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        write_row(&mut out, self.headers.iter().map(|h| h.to_string()), &widths);
        for row in cells {
            write_row(&mut out, row.into_iter(), &widths);
        }
        out
    }
}

fn write_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<width$}", width = *w))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
