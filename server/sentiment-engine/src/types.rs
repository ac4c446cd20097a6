//! Core types for the sentiment engine (labels + serialized report contracts).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::Distribution;
use crate::format::TableFormat;
use crate::insight::Insight;

// ---------------------------------------------------------------------------
// Sentiment label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
  Positive,
  Negative,
  Neutral,
}

impl SentimentLabel {
  /// Display order used for charts and tie-breaking.
  pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Positive => "Positive",
      Self::Negative => "Negative",
      Self::Neutral => "Neutral",
    }
  }
}

impl fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Report (JSON contract for callers)
// ---------------------------------------------------------------------------

/// Summary of one analysed upload, without the table bytes.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
  pub format: TableFormat,
  pub review_column: String,
  pub row_count: usize,
  /// First rows of the review column, coerced to text.
  pub preview: Vec<String>,
  pub distribution: Distribution,
  pub insight: InsightOutput,
  pub download: DownloadOutput,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightOutput {
  pub kind: Insight,
  pub level: &'static str,
  pub title: &'static str,
  pub message: &'static str,
}

impl From<Insight> for InsightOutput {
  fn from(insight: Insight) -> Self {
    Self {
      kind: insight,
      level: insight.level(),
      title: insight.title(),
      message: insight.message(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadOutput {
  pub file_name: &'static str,
  pub mime_type: &'static str,
  pub label: &'static str,
}

impl From<TableFormat> for DownloadOutput {
  fn from(format: TableFormat) -> Self {
    Self {
      file_name: format.results_file_name(),
      mime_type: format.mime_type(),
      label: format.download_label(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_serialize_as_names() {
    assert_eq!(serde_json::to_string(&SentimentLabel::Positive).unwrap(), "\"Positive\"");
    assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
  }
}
