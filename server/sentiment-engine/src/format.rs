//! Upload formats and the load/write entry points for tables.

use serde::Serialize;

use crate::csv_codec;
use crate::error::AnalysisError;
use crate::table::Table;
use crate::xlsx_codec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
  Csv,
  Xlsx,
}

impl TableFormat {
  /// Format from an uploaded file name's extension (case-insensitive).
  pub fn from_file_name(name: &str) -> Result<Self, AnalysisError> {
    let ext = name
      .rsplit_once('.')
      .map(|(_, ext)| ext.trim().to_ascii_lowercase())
      .unwrap_or_default();
    match ext.as_str() {
      "csv" => Ok(Self::Csv),
      "xlsx" => Ok(Self::Xlsx),
      _ => Err(AnalysisError::UnsupportedFormat(name.to_string())),
    }
  }

  /// Format from a MIME type, for uploads without a usable file name.
  pub fn from_mime(mime: &str) -> Option<Self> {
    let essence = mime.split(';').next().unwrap_or("").trim();
    match essence {
      "text/csv" | "application/csv" => Some(Self::Csv),
      m if m == Self::Xlsx.mime_type() => Some(Self::Xlsx),
      _ => None,
    }
  }

  /// Fixed download name for annotated results.
  pub fn results_file_name(self) -> &'static str {
    match self {
      Self::Csv => "sentiment_results.csv",
      Self::Xlsx => "sentiment_results.xlsx",
    }
  }

  pub fn mime_type(self) -> &'static str {
    match self {
      Self::Csv => "text/csv",
      Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    }
  }

  /// Label of the download button.
  pub fn download_label(self) -> &'static str {
    match self {
      Self::Csv => "Download CSV",
      Self::Xlsx => "Download Excel",
    }
  }
}

/// Parse uploaded bytes into a table.
pub fn load_table(bytes: &[u8], format: TableFormat) -> Result<Table, AnalysisError> {
  match format {
    TableFormat::Csv => csv_codec::read(bytes),
    TableFormat::Xlsx => xlsx_codec::read(bytes),
  }
}

/// Serialize a table in the given format.
pub fn write_table(table: &Table, format: TableFormat) -> Result<Vec<u8>, AnalysisError> {
  match format {
    TableFormat::Csv => csv_codec::write(table),
    TableFormat::Xlsx => xlsx_codec::write(table),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_from_extension() {
    assert_eq!(TableFormat::from_file_name("reviews.csv").unwrap(), TableFormat::Csv);
    assert_eq!(TableFormat::from_file_name("Q3.Reviews.XLSX").unwrap(), TableFormat::Xlsx);
    assert!(matches!(
      TableFormat::from_file_name("notes.txt"),
      Err(AnalysisError::UnsupportedFormat(_))
    ));
    assert!(TableFormat::from_file_name("csv").is_err());
  }

  #[test]
  fn format_from_mime() {
    assert_eq!(TableFormat::from_mime("text/csv; charset=utf-8"), Some(TableFormat::Csv));
    assert_eq!(
      TableFormat::from_mime("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
      Some(TableFormat::Xlsx)
    );
    assert_eq!(TableFormat::from_mime("application/octet-stream"), None);
  }

  #[test]
  fn download_names_are_fixed() {
    assert_eq!(TableFormat::Csv.results_file_name(), "sentiment_results.csv");
    assert_eq!(TableFormat::Xlsx.results_file_name(), "sentiment_results.xlsx");
    assert_eq!(TableFormat::Csv.mime_type(), "text/csv");
  }
}
