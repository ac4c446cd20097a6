//! XLSX reading (first worksheet, first row as header) and writing.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use chrono::NaiveDateTime;
use rust_xlsxwriter::Workbook;

use crate::csv_codec::header_name;
use crate::error::AnalysisError;
use crate::table::{dedupe_headers, Cell, Table};

/// Largest magnitude at which an integral float is still read back as an integer.
const MAX_EXACT_INT: f64 = 9.0e15;

pub fn read(bytes: &[u8]) -> Result<Table, AnalysisError> {
  let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
  let range = workbook
    .worksheet_range_at(0)
    .ok_or_else(|| AnalysisError::unreadable("The workbook does not contain any worksheets."))??;

  // Ranges start at the first used cell; restore leading blank columns.
  let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);
  let mut rows = range.rows();
  let header_row = match rows.next() {
    Some(row) => row,
    None => return Ok(Table::default()),
  };

  let headers: Vec<String> = std::iter::repeat(Cell::Empty)
    .take(lead)
    .chain(header_row.iter().map(data_cell))
    .enumerate()
    .map(|(i, cell)| match cell {
      Cell::Empty => header_name("", i),
      other => header_name(&other.to_text(), i),
    })
    .collect();
  let headers = dedupe_headers(headers);

  let records: Vec<Vec<Cell>> = rows
    .map(|row| {
      std::iter::repeat(Cell::Empty)
        .take(lead)
        .chain(row.iter().map(data_cell))
        .collect()
    })
    .collect();

  Ok(Table::from_rows(headers, records))
}

pub fn write(table: &Table) -> Result<Vec<u8>, AnalysisError> {
  let mut workbook = Workbook::new();
  let worksheet = workbook.add_worksheet();

  for (c, column) in table.columns().iter().enumerate() {
    let col = u16::try_from(c).map_err(|_| AnalysisError::export("too many columns for a worksheet"))?;
    worksheet.write_string(0, col, column.name.as_str())?;
    for (r, cell) in column.cells.iter().enumerate() {
      let row = u32::try_from(r + 1).map_err(|_| AnalysisError::export("too many rows for a worksheet"))?;
      match cell {
        Cell::Empty => {}
        Cell::Bool(b) => {
          worksheet.write_boolean(row, col, *b)?;
        }
        Cell::Int(i) => {
          worksheet.write_number(row, col, *i as f64)?;
        }
        Cell::Float(f) if f.is_finite() => {
          worksheet.write_number(row, col, *f)?;
        }
        Cell::Float(_) => {
          worksheet.write_string(row, col, cell.to_text())?;
        }
        Cell::Text(s) => {
          worksheet.write_string(row, col, s.as_str())?;
        }
      }
    }
  }

  Ok(workbook.save_to_buffer()?)
}

fn data_cell(data: &Data) -> Cell {
  match data {
    Data::Empty => Cell::Empty,
    Data::Bool(b) => Cell::Bool(*b),
    Data::Int(i) => Cell::Int(*i),
    Data::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INT => Cell::Int(*f as i64),
    Data::Float(f) => Cell::Float(*f),
    Data::String(s) => Cell::Text(s.clone()),
    Data::DateTime(dt) => match dt.as_datetime() {
      Some(naive) => Cell::Text(datetime_text(&naive)),
      None => Cell::Float(dt.as_f64()),
    },
    Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    Data::Error(e) => Cell::Text(e.to_string()),
  }
}

/// Spreadsheet dates render as `YYYY-MM-DD HH:MM:SS`.
fn datetime_text(dt: &NaiveDateTime) -> String {
  dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
