//! In-memory tabular dataset loaded from a catalog file.

use std::collections::BTreeMap;
use std::fmt;

use crate::normalize::canonical_key;
use crate::numeric::format_number;

/// Line number shown to users for a 0-based data row.
///
/// Line 1 is the header, so the first data row is line 2.
#[inline]
pub fn line_number(row_idx: usize) -> usize {
    row_idx + 2
}

/// A single cell value as read from the source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing cell (blank CSV field, empty spreadsheet cell, error cell).
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl CellValue {
    /// Build a text cell, mapping the empty string to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// A cell is empty when it is missing, NaN, or whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Float(value) => value.is_nan(),
            Self::Integer(_) => false,
        }
    }

    /// String form of the value as shown in findings.
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) if value.is_nan() => String::new(),
            Self::Float(value) => format_number(*value),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Ordered columns and rows of one loaded file.
///
/// Rows are stored positionally so that duplicate column names (several
/// anonymous headers renamed to the same sentinel) remain addressable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset, padding or truncating every row to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows (header excluded).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column with this exact name. The last match wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|column| column == name)
    }

    /// Index of the column whose canonical key matches `name`. The last match wins.
    pub fn resolve_column(&self, name: &str) -> Option<usize> {
        let key = canonical_key(name);
        self.columns
            .iter()
            .rposition(|column| canonical_key(column) == key)
    }

    pub fn rename_column(&mut self, index: usize, name: impl Into<String>) {
        if let Some(column) = self.columns.get_mut(index) {
            *column = name.into();
        }
    }

    /// Cell at (row, column), or an empty cell when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Iterate `(row_index, cell)` down one column.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = (usize, &CellValue)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(move |(idx, row)| (idx, row.get(column).unwrap_or(&EMPTY_CELL)))
    }

    /// Build a cleaned copy with the given corrections applied.
    pub fn corrected(&self, corrections: &Corrections) -> Dataset {
        let mut copy = self.clone();
        for (&(row, column), value) in corrections.iter() {
            if let Some(cell) = copy.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
                *cell = value.clone();
            }
        }
        copy
    }
}

/// Overlay of corrected cell values keyed by `(row, column)` position.
///
/// Rules that clean data record their changes here instead of mutating
/// the loaded dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corrections {
    inner: BTreeMap<(usize, usize), CellValue>,
}

impl Corrections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: usize, column: usize, value: CellValue) {
        self.inner.insert((row, column), value);
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.inner.get(&(row, column))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &CellValue)> {
        self.inner.iter()
    }
}
