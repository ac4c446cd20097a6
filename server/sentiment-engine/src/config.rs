//! Engine configuration with sane defaults.

/// Presentation knobs. The classifier itself is fixed and not configurable.
#[derive(Debug, Clone)]
pub struct EngineConfig {
  /// Review rows included in the report preview.
  pub preview_rows: usize,
  /// Name of the appended label column.
  pub sentiment_column: String,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      preview_rows: 5,
      sentiment_column: "Sentiment".to_string(),
    }
  }
}
