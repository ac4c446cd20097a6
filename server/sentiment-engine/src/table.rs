//! In-memory table model: named columns of scalar cells, rows aligned by position.

use serde::Serialize;

/// Text used for a cell that holds no value.
pub const MISSING_TEXT: &str = "nan";

/// One scalar cell as loaded from CSV or XLSX.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
  Empty,
  Bool(bool),
  Int(i64),
  Float(f64),
  Text(String),
}

impl Cell {
  pub fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }

  /// Total coercion to text, applied before classification.
  ///
  /// Floats keep a trailing `.0` when integral (`3.0`), booleans render as
  /// `True`/`False`, and empty cells render as [`MISSING_TEXT`].
  pub fn to_text(&self) -> String {
    match self {
      Self::Empty => MISSING_TEXT.to_string(),
      Self::Bool(true) => "True".to_string(),
      Self::Bool(false) => "False".to_string(),
      Self::Int(i) => i.to_string(),
      Self::Float(f) => float_text(*f),
      Self::Text(s) => s.clone(),
    }
  }
}

impl From<&str> for Cell {
  fn from(s: &str) -> Self {
    Self::Text(s.to_string())
  }
}

impl From<String> for Cell {
  fn from(s: String) -> Self {
    Self::Text(s)
  }
}

fn float_text(f: f64) -> String {
  if f.is_nan() {
    return MISSING_TEXT.to_string();
  }
  if f.is_infinite() {
    return if f > 0.0 { "inf".into() } else { "-inf".into() };
  }
  if f.fract() == 0.0 && f.abs() < 1e16 {
    format!("{:.1}", f)
  } else {
    f.to_string()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
  pub name: String,
  pub cells: Vec<Cell>,
}

impl Column {
  pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
    Self {
      name: name.into(),
      cells,
    }
  }
}

/// Ordered columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
  columns: Vec<Column>,
  rows: usize,
}

impl Table {
  /// Build a table from header names and row-major records.
  ///
  /// Short records are padded with [`Cell::Empty`]; extra cells are dropped
  /// (codecs reject over-long records before calling this).
  pub fn from_rows(headers: Vec<String>, records: Vec<Vec<Cell>>) -> Self {
    let rows = records.len();
    let mut columns: Vec<Column> = headers
      .into_iter()
      .map(|name| Column::new(name, Vec::with_capacity(rows)))
      .collect();
    for record in records {
      let mut cells = record.into_iter();
      for column in columns.iter_mut() {
        column.cells.push(cells.next().unwrap_or(Cell::Empty));
      }
    }
    Self { columns, rows }
  }

  pub fn columns(&self) -> &[Column] {
    &self.columns
  }

  pub fn column_names(&self) -> Vec<&str> {
    self.columns.iter().map(|c| c.name.as_str()).collect()
  }

  pub fn column(&self, index: usize) -> Option<&Column> {
    self.columns.get(index)
  }

  pub fn column_count(&self) -> usize {
    self.columns.len()
  }

  pub fn row_count(&self) -> usize {
    self.rows
  }

  /// Cells of one row, in column order.
  pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
    if index >= self.rows {
      return None;
    }
    Some(self.columns.iter().map(|c| &c.cells[index]).collect())
  }

  /// Append a derived column. Its length must match the row count.
  pub fn push_column(&mut self, column: Column) -> bool {
    if self.columns.is_empty() && self.rows == 0 {
      self.rows = column.cells.len();
    } else if column.cells.len() != self.rows {
      return false;
    }
    self.columns.push(column);
    true
  }
}

/// Rename repeated header names to `name.1`, `name.2`, ... in order.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
  let mut seen: Vec<String> = Vec::with_capacity(headers.len());
  for name in headers {
    let mut candidate = name.clone();
    let mut n = 0;
    while seen.contains(&candidate) {
      n += 1;
      candidate = format!("{}.{}", name, n);
    }
    seen.push(candidate);
  }
  seen
}
