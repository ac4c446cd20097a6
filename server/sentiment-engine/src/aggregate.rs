//! Label distribution as percentages.

use serde::Serialize;

use crate::types::SentimentLabel;

/// Percentage (0–100, two decimals) of each label, plus the label count.
///
/// An empty input yields all-zero percentages with `total == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Distribution {
  pub positive: f64,
  pub negative: f64,
  pub neutral: f64,
  pub total: usize,
}

impl Distribution {
  pub fn get(&self, label: SentimentLabel) -> f64 {
    match label {
      SentimentLabel::Positive => self.positive,
      SentimentLabel::Negative => self.negative,
      SentimentLabel::Neutral => self.neutral,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.total == 0
  }

  /// Labels by descending percentage; ties keep Positive, Negative, Neutral order.
  pub fn ranked(&self) -> Vec<(SentimentLabel, f64)> {
    let mut bars: Vec<(SentimentLabel, f64)> =
      SentimentLabel::ALL.iter().map(|&l| (l, self.get(l))).collect();
    bars.sort_by(|a, b| b.1.total_cmp(&a.1));
    bars
  }
}

/// Relative frequency of each label × 100, rounded to 2 decimals.
pub fn aggregate(labels: &[SentimentLabel]) -> Distribution {
  if labels.is_empty() {
    return Distribution::default();
  }
  let total = labels.len();
  let count = |target: SentimentLabel| labels.iter().filter(|&&l| l == target).count();
  let pct = |n: usize| round2(n as f64 / total as f64 * 100.0);

  Distribution {
    positive: pct(count(SentimentLabel::Positive)),
    negative: pct(count(SentimentLabel::Negative)),
    neutral: pct(count(SentimentLabel::Neutral)),
    total,
  }
}

fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}
