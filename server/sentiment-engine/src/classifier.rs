//! Polarity scoring and the fixed three-way sentiment threshold.

use crate::lexicon::Lexicon;
use crate::table::Cell;
use crate::types::SentimentLabel;

/// Scores above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Multiplier applied to an assessment preceded by a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Each `!` directly after an assessed word strengthens it by this factor.
const EXCLAMATION_FACTOR: f64 = 1.25;

const EXCLAMATION: &str = "!";

/// Bag-of-words polarity classifier. Pure: no state survives between calls.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
  lexicon: Lexicon,
}

impl Classifier {
  pub fn new() -> Self {
    Self {
      lexicon: Lexicon::new(),
    }
  }

  /// Mean polarity of the assessed words in `text`, in [-1.0, 1.0].
  /// Text with no lexicon words scores 0.0.
  pub fn polarity(&self, text: &str) -> f64 {
    let mut assessments: Vec<f64> = Vec::new();
    let mut negated = false;
    let mut intensity = 1.0;
    // Exclamations only boost the assessment they directly follow.
    let mut last_assessed = false;

    for token in tokenize(text, &self.lexicon) {
      let word = token.as_str();
      if word == EXCLAMATION {
        if last_assessed {
          if let Some(last) = assessments.last_mut() {
            *last *= EXCLAMATION_FACTOR;
          }
        }
        negated = false;
        intensity = 1.0;
        continue;
      }
      last_assessed = false;
      if self.lexicon.is_negation(word) {
        negated = true;
        continue;
      }
      if let Some(m) = self.lexicon.intensity(word) {
        intensity *= m;
        continue;
      }
      if negated && self.lexicon.is_negation_bridge(word) {
        continue;
      }
      if let Some(p) = self.lexicon.polarity(word) {
        let mut score = p * intensity;
        if negated {
          score *= NEGATION_FACTOR;
        }
        assessments.push(score);
        last_assessed = true;
      }
      negated = false;
      intensity = 1.0;
    }

    if assessments.is_empty() {
      return 0.0;
    }
    let sum: f64 = assessments.iter().map(|a| a.clamp(-1.0, 1.0)).sum();
    (sum / assessments.len() as f64).clamp(-1.0, 1.0)
  }

  pub fn classify_text(&self, text: &str) -> SentimentLabel {
    label_for(self.polarity(text))
  }

  /// Coerce the cell to text and classify it. Never fails.
  pub fn classify_cell(&self, cell: &Cell) -> SentimentLabel {
    self.classify_text(&cell.to_text())
  }
}

/// Strict thresholds: exactly 0.1 or -0.1 is Neutral.
pub fn label_for(score: f64) -> SentimentLabel {
  if score > POSITIVE_THRESHOLD {
    SentimentLabel::Positive
  } else if score < NEGATIVE_THRESHOLD {
    SentimentLabel::Negative
  } else {
    SentimentLabel::Neutral
  }
}

/// Whitespace chunks, lower-cased. Emoticons pass through whole; other chunks
/// are split on punctuation (apostrophes kept inside words) and every `!`
/// becomes its own token.
fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
  let normalized = text.replace(['\u{2019}', '\u{2018}'], "'");
  let mut tokens = Vec::new();
  for chunk in normalized.split_whitespace() {
    if lexicon.emoticon(chunk).is_some() {
      tokens.push(chunk.to_lowercase());
      continue;
    }
    let mut word = String::new();
    for ch in chunk.chars() {
      if ch.is_alphanumeric() || ch == '\'' {
        word.push(ch);
        continue;
      }
      push_word(&mut tokens, &mut word);
      if ch == '!' {
        tokens.push(EXCLAMATION.to_string());
      }
    }
    push_word(&mut tokens, &mut word);
  }
  tokens
}

fn push_word(tokens: &mut Vec<String>, word: &mut String) {
  let trimmed = word.trim_matches('\'');
  if !trimmed.is_empty() {
    tokens.push(trimmed.to_lowercase());
  }
  word.clear();
}

#[cfg(test)]
mod tests {
  use super::*;

  fn c() -> Classifier {
    Classifier::new()
  }

  #[test]
  fn clear_reviews_get_expected_labels() {
    assert_eq!(c().classify_text("Great service, really good food!"), SentimentLabel::Positive);
    assert_eq!(c().classify_text("Terrible experience. The staff was rude."), SentimentLabel::Negative);
    assert_eq!(c().classify_text("I picked it up on Tuesday."), SentimentLabel::Neutral);
  }

  #[test]
  fn negation_flips_and_dampens() {
    let p = c().polarity("not good");
    assert!((p - (-0.35)).abs() < 1e-9, "got {p}");
    assert_eq!(c().classify_text("The food was not good"), SentimentLabel::Negative);
    assert_eq!(c().classify_text("It isn't a bad deal"), SentimentLabel::Positive);
    assert_eq!(c().classify_text("No problem at all"), SentimentLabel::Positive);
  }

  #[test]
  fn intensifiers_scale_the_next_word() {
    let plain = c().polarity("good");
    let strong = c().polarity("very good");
    let soft = c().polarity("slightly good");
    assert!(strong > plain && plain > soft);
    assert_eq!(c().polarity("extremely excellent"), 1.0);
  }

  #[test]
  fn exclamations_strengthen_the_word_before() {
    assert!((c().polarity("Great!") - 1.0).abs() < 1e-9);
    assert!((c().polarity("nice!!") - 0.6 * 1.25 * 1.25).abs() < 1e-9);
    assert_eq!(c().polarity("good!!!"), 1.0);
    assert!((c().polarity("bad!") - (-0.875)).abs() < 1e-9);
    assert_eq!(c().polarity("Wow, it arrived!"), c().polarity("Wow, it arrived"));
    assert_eq!(c().polarity("Hello!"), 0.0);
  }

  #[test]
  fn exclamation_can_cross_the_threshold() {
    assert_eq!(c().classify_text("decent"), SentimentLabel::Positive);
    assert_eq!(c().classify_text("adequate"), SentimentLabel::Neutral);
    assert_eq!(c().classify_text("adequate!"), SentimentLabel::Positive);
    assert_eq!(c().classify_text("as expected!"), SentimentLabel::Negative);
  }

  #[test]
  fn everyday_reviews_are_labelled() {
    let positive = [
      "Pleasant stay, tasty breakfast and useful tips",
      "Fun and interesting tour",
      "The host was attentive and the apartment spotless",
      "Cozy cabin with a gorgeous view",
      "Knowledgeable guide, well organised and punctual",
    ];
    let negative = [
      "Stupid, ugly and nasty",
      "The staff were incompetent and unprofessional",
      "Stale bread and lukewarm coffee",
      "Filthy bathroom, smelly towels",
      "Flimsy case that cracked after a week",
    ];
    for text in positive {
      assert_eq!(c().classify_text(text), SentimentLabel::Positive, "{text}");
    }
    for text in negative {
      assert_eq!(c().classify_text(text), SentimentLabel::Negative, "{text}");
    }
  }

  #[test]
  fn curly_apostrophes_negate_too() {
    assert_eq!(c().classify_text("I don\u{2019}t love it"), SentimentLabel::Negative);
  }

  #[test]
  fn emoticons_count() {
    assert_eq!(c().classify_text("arrived today :)"), SentimentLabel::Positive);
    assert_eq!(c().classify_text("arrived today :("), SentimentLabel::Negative);
  }

  #[test]
  fn thresholds_are_strict() {
    assert_eq!(label_for(0.1), SentimentLabel::Neutral);
    assert_eq!(label_for(-0.1), SentimentLabel::Neutral);
    assert_eq!(label_for(0.100001), SentimentLabel::Positive);
    assert_eq!(label_for(-0.100001), SentimentLabel::Negative);
    assert_eq!(label_for(0.0), SentimentLabel::Neutral);
  }

  #[test]
  fn boundary_texts_are_neutral() {
    assert_eq!(c().polarity("adequate"), 0.1);
    assert_eq!(c().classify_text("Adequate."), SentimentLabel::Neutral);
    assert_eq!(c().polarity("as expected"), -0.1);
    assert_eq!(c().classify_text("Arrived as expected"), SentimentLabel::Neutral);
  }

  #[test]
  fn cells_are_coerced_before_scoring() {
    assert_eq!(c().classify_cell(&Cell::Empty), SentimentLabel::Neutral);
    assert_eq!(c().classify_cell(&Cell::Int(5)), SentimentLabel::Neutral);
    assert_eq!(c().classify_cell(&Cell::Bool(true)), SentimentLabel::Neutral);
    assert_eq!(c().classify_cell(&Cell::from("awful")), SentimentLabel::Negative);
  }
}
