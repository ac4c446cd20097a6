//! Core pipeline: load, select the review column, classify, aggregate, export.

use tracing::debug;

use crate::aggregate::{aggregate, Distribution};
use crate::classifier::Classifier;
use crate::column::find_review_column;
use crate::config::EngineConfig;
use crate::error::AnalysisError;
use crate::format::{load_table, write_table, TableFormat};
use crate::insight::{select_insight, Insight};
use crate::table::{dedupe_headers, Cell, Column, Table};
use crate::types::{Report, SentimentLabel};

/// The sentiment pipeline. Holds only immutable configuration, so one engine
/// can serve any number of independent uploads.
#[derive(Debug, Clone)]
pub struct Engine {
  config: EngineConfig,
  classifier: Classifier,
}

/// Result of one analysed table.
#[derive(Debug, Clone)]
pub struct Analysis {
  pub format: TableFormat,
  /// Input columns plus the appended label column.
  pub table: Table,
  pub review_column: String,
  pub labels: Vec<SentimentLabel>,
  pub distribution: Distribution,
  pub insight: Insight,
  pub preview: Vec<String>,
}

impl Engine {
  pub fn new(config: EngineConfig) -> Self {
    Self {
      config,
      classifier: Classifier::new(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(EngineConfig::default())
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  /// Parse `bytes` as `format` and analyse the resulting table.
  pub fn analyze_bytes(&self, bytes: &[u8], format: TableFormat) -> Result<Analysis, AnalysisError> {
    let table = load_table(bytes, format)?;
    debug!(
      columns = table.column_count(),
      rows = table.row_count(),
      ?format,
      "table loaded"
    );
    self.analyze(table, format)
  }

  /// Classify every row of the review column and append the label column.
  ///
  /// Fails with [`AnalysisError::MissingReviewColumn`] before touching the table
  /// when no header contains "review".
  pub fn analyze(&self, mut table: Table, format: TableFormat) -> Result<Analysis, AnalysisError> {
    let index = find_review_column(&table.column_names()).ok_or(AnalysisError::MissingReviewColumn)?;
    let review = table
      .column(index)
      .ok_or(AnalysisError::MissingReviewColumn)?;
    let review_column = review.name.clone();

    let labels: Vec<SentimentLabel> = review
      .cells
      .iter()
      .map(|cell| self.classifier.classify_cell(cell))
      .collect();
    let preview: Vec<String> = review
      .cells
      .iter()
      .take(self.config.preview_rows)
      .map(Cell::to_text)
      .collect();

    let distribution = aggregate(&labels);
    let insight = select_insight(&distribution);
    debug!(
      review_column = %review_column,
      rows = labels.len(),
      positive = distribution.positive,
      negative = distribution.negative,
      neutral = distribution.neutral,
      ?insight,
      "reviews classified"
    );

    let name = self.label_column_name(&table);
    let cells = labels.iter().map(|l| Cell::from(l.as_str())).collect();
    if !table.push_column(Column::new(name, cells)) {
      return Err(AnalysisError::export("label column length does not match the table"));
    }

    Ok(Analysis {
      format,
      table,
      review_column,
      labels,
      distribution,
      insight,
      preview,
    })
  }

  /// Label column name, suffixed when the upload already uses it.
  fn label_column_name(&self, table: &Table) -> String {
    let mut names: Vec<String> = table.column_names().into_iter().map(String::from).collect();
    names.push(self.config.sentiment_column.clone());
    dedupe_headers(names).pop().unwrap_or_else(|| self.config.sentiment_column.clone())
  }
}

impl Analysis {
  /// Serialize the annotated table in the upload's format.
  pub fn export(&self) -> Result<Vec<u8>, AnalysisError> {
    write_table(&self.table, self.format)
  }

  pub fn report(&self) -> Report {
    Report {
      format: self.format,
      review_column: self.review_column.clone(),
      row_count: self.table.row_count(),
      preview: self.preview.clone(),
      distribution: self.distribution,
      insight: self.insight.into(),
      download: self.format.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn reviews_table(reviews: &[&str]) -> Table {
    Table::from_rows(
      vec!["id".into(), "Review_Text".into()],
      reviews
        .iter()
        .enumerate()
        .map(|(i, r)| vec![Cell::Int(i as i64), Cell::from(*r)])
        .collect(),
    )
  }

  #[test]
  fn appends_one_label_column() {
    let engine = Engine::with_defaults();
    let table = reviews_table(&["Great value", "Awful support", "Came on Monday"]);
    let analysis = engine.analyze(table, TableFormat::Csv).unwrap();

    assert_eq!(analysis.table.column_count(), 3);
    assert_eq!(analysis.table.row_count(), 3);
    assert_eq!(analysis.review_column, "Review_Text");
    let labels = &analysis.table.column(2).unwrap();
    assert_eq!(labels.name, "Sentiment");
    assert_eq!(
      labels.cells,
      vec![Cell::from("Positive"), Cell::from("Negative"), Cell::from("Neutral")]
    );
  }

  #[test]
  fn missing_review_column_halts() {
    let engine = Engine::with_defaults();
    let table = Table::from_rows(vec!["comment".into()], vec![vec![Cell::from("good")]]);
    let err = engine.analyze(table, TableFormat::Csv).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingReviewColumn));
  }

  #[test]
  fn existing_sentiment_column_is_kept() {
    let engine = Engine::with_defaults();
    let table = Table::from_rows(
      vec!["review".into(), "Sentiment".into()],
      vec![vec![Cell::from("good"), Cell::from("manual")]],
    );
    let analysis = engine.analyze(table, TableFormat::Csv).unwrap();
    assert_eq!(analysis.table.column_names(), vec!["review", "Sentiment", "Sentiment.1"]);
    assert_eq!(analysis.table.column(1).unwrap().cells[0], Cell::from("manual"));
  }

  #[test]
  fn empty_table_uses_defined_fallback() {
    let engine = Engine::with_defaults();
    let table = Table::from_rows(vec!["review".into()], vec![]);
    let analysis = engine.analyze(table, TableFormat::Csv).unwrap();
    assert!(analysis.distribution.is_empty());
    assert_eq!(analysis.insight, Insight::Mixed);
    assert_eq!(analysis.table.column_count(), 2);
    assert!(analysis.preview.is_empty());
  }

  #[test]
  fn preview_is_capped() {
    let engine = Engine::new(EngineConfig {
      preview_rows: 2,
      ..EngineConfig::default()
    });
    let analysis = engine
      .analyze(reviews_table(&["a", "b", "c"]), TableFormat::Csv)
      .unwrap();
    assert_eq!(analysis.preview, vec!["a", "b"]);
  }

  #[test]
  fn report_reflects_analysis() {
    let engine = Engine::with_defaults();
    let analysis = engine
      .analyze(reviews_table(&["terrible", "bad", "good"]), TableFormat::Xlsx)
      .unwrap();
    let report = analysis.report();
    assert_eq!(report.row_count, 3);
    assert_eq!(report.distribution.negative, 66.67);
    assert_eq!(report.insight.kind, Insight::Alert);
    assert_eq!(report.download.file_name, "sentiment_results.xlsx");
  }
}
