//! CSV reading and writing.

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::AnalysisError;
use crate::table::{dedupe_headers, Cell, Table};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row plus records. Empty fields load as [`Cell::Empty`], everything
/// else as text so values survive a write/read cycle unchanged.
pub fn read(bytes: &[u8]) -> Result<Table, AnalysisError> {
  let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
  let mut rdr = ReaderBuilder::new()
    .has_headers(true)
    .flexible(true)
    .from_reader(bytes);

  let headers: Vec<String> = rdr
    .headers()?
    .iter()
    .enumerate()
    .map(|(i, h)| header_name(h, i))
    .collect();
  if headers.is_empty() {
    return Err(AnalysisError::unreadable("No columns to parse from file"));
  }
  let headers = dedupe_headers(headers);

  let mut records = Vec::new();
  for result in rdr.records() {
    let record = result?;
    if record.len() > headers.len() {
      let line = record.position().map(|p| p.line()).unwrap_or(0);
      return Err(AnalysisError::unreadable(format!(
        "Error tokenizing data. Expected {} fields in line {}, saw {}",
        headers.len(),
        line,
        record.len()
      )));
    }
    records.push(record.iter().map(field_cell).collect());
  }

  Ok(Table::from_rows(headers, records))
}

/// Header row plus one record per row, `\n` line endings.
pub fn write(table: &Table) -> Result<Vec<u8>, AnalysisError> {
  let mut wtr = WriterBuilder::new()
    .terminator(Terminator::Any(b'\n'))
    .from_writer(Vec::new());

  wtr
    .write_record(table.column_names())
    .map_err(|e| AnalysisError::export(e.to_string()))?;
  for i in 0..table.row_count() {
    let row = table.row(i).unwrap_or_default();
    wtr
      .write_record(row.iter().map(|cell| field_text(cell)))
      .map_err(|e| AnalysisError::export(e.to_string()))?;
  }

  wtr
    .into_inner()
    .map_err(|e| AnalysisError::export(e.to_string()))
}

pub(crate) fn header_name(raw: &str, index: usize) -> String {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    format!("Unnamed: {}", index)
  } else {
    raw.to_string()
  }
}

fn field_cell(field: &str) -> Cell {
  if field.is_empty() {
    Cell::Empty
  } else {
    Cell::Text(field.to_string())
  }
}

fn field_text(cell: &Cell) -> String {
  match cell {
    Cell::Empty => String::new(),
    other => other.to_text(),
  }
}
