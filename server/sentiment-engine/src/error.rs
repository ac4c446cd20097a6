//! Structured error types for the sentiment engine.

use thiserror::Error;

/// Failures that halt one analysis. Cell-level problems never surface here:
/// every cell is coerced to text before classification.
#[derive(Debug, Error)]
pub enum AnalysisError {
  #[error("Could not read the file: {0}")]
  UnreadableFile(String),

  #[error("No column containing 'review' found. Please make sure the file has a review column.")]
  MissingReviewColumn,

  #[error("unsupported file type: {0} (expected .csv or .xlsx)")]
  UnsupportedFormat(String),

  #[error("could not write the results file: {0}")]
  Export(String),
}

impl AnalysisError {
  pub fn unreadable(reason: impl Into<String>) -> Self {
    Self::UnreadableFile(reason.into())
  }

  pub fn export(reason: impl Into<String>) -> Self {
    Self::Export(reason.into())
  }

  /// Stable machine-readable kind, used in API payloads and logs.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::UnreadableFile(_) => "unreadable_file",
      Self::MissingReviewColumn => "missing_review_column",
      Self::UnsupportedFormat(_) => "unsupported_format",
      Self::Export(_) => "export",
    }
  }
}

impl From<csv::Error> for AnalysisError {
  fn from(e: csv::Error) -> Self {
    Self::unreadable(e.to_string())
  }
}

impl From<calamine::XlsxError> for AnalysisError {
  fn from(e: calamine::XlsxError) -> Self {
    Self::unreadable(e.to_string())
  }
}

impl From<rust_xlsxwriter::XlsxError> for AnalysisError {
  fn from(e: rust_xlsxwriter::XlsxError) -> Self {
    Self::export(e.to_string())
  }
}
