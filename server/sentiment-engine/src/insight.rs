//! Canned business insight chosen from the label distribution.

use serde::Serialize;

use crate::aggregate::Distribution;

/// Share (percent) a label must exceed to drive the insight.
pub const MAJORITY_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Insight {
  /// More than half of the reviews are negative.
  Alert,
  /// More than half of the reviews are positive.
  Kudos,
  Mixed,
}

impl Insight {
  /// Severity used by the presentation layer.
  pub fn level(self) -> &'static str {
    match self {
      Self::Alert => "warning",
      Self::Kudos => "success",
      Self::Mixed => "info",
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      Self::Alert => "Customer Sentiment Alert",
      Self::Kudos => "Kudos!",
      Self::Mixed => "Sentiment is mixed.",
    }
  }

  pub fn message(self) -> &'static str {
    match self {
      Self::Alert => {
        "More than half of your reviews are negative. It might be time to investigate recurring issues, improve customer experience, and address pain points."
      }
      Self::Kudos => {
        "Customers are loving your service. Keep it up! Highlight those positive experiences and build momentum."
      }
      Self::Mixed => "Sentiment is mixed. Watch closely for patterns over time.",
    }
  }
}

/// First match wins: negative majority, then positive majority, else mixed.
pub fn select_insight(distribution: &Distribution) -> Insight {
  if distribution.negative > MAJORITY_PERCENT {
    Insight::Alert
  } else if distribution.positive > MAJORITY_PERCENT {
    Insight::Kudos
  } else {
    Insight::Mixed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dist(negative: f64, positive: f64, neutral: f64) -> Distribution {
    Distribution {
      positive,
      negative,
      neutral,
      total: 10,
    }
  }

  #[test]
  fn negative_majority_alerts() {
    assert_eq!(select_insight(&dist(60.0, 20.0, 20.0)), Insight::Alert);
  }

  #[test]
  fn positive_majority_gets_kudos() {
    assert_eq!(select_insight(&dist(10.0, 70.0, 20.0)), Insight::Kudos);
  }

  #[test]
  fn split_is_mixed() {
    assert_eq!(select_insight(&dist(40.0, 40.0, 20.0)), Insight::Mixed);
  }

  #[test]
  fn exactly_half_is_not_a_majority() {
    assert_eq!(select_insight(&dist(50.0, 50.0, 0.0)), Insight::Mixed);
    assert_eq!(select_insight(&Distribution::default()), Insight::Mixed);
  }

  #[test]
  fn negative_is_checked_first() {
    // Not reachable from real counts; pins the evaluation order.
    assert_eq!(select_insight(&dist(51.0, 51.0, 0.0)), Insight::Alert);
  }

  #[test]
  fn variants_carry_levels() {
    assert_eq!(Insight::Alert.level(), "warning");
    assert_eq!(Insight::Kudos.level(), "success");
    assert_eq!(Insight::Mixed.level(), "info");
  }
}
