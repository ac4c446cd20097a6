//! Fixed English polarity lexicon with intensifiers and negations.
//!
//! Polarity values lie in [-1.0, 1.0]. Intensities are multipliers applied to
//! the next assessed word (> 1.0 amplifies, < 1.0 softens). The word table
//! ships in `data/polarity.tsv` and is compiled into the crate.

use std::collections::HashMap;

/// Word polarities, one `word<TAB>polarity` pair per line.
const POLARITY_TABLE: &str = include_str!("../data/polarity.tsv");

const EMOTICONS: &[(&str, f64)] = &[
  (":)", 0.5),
  (":-)", 0.5),
  (":d", 1.0),
  ("<3", 1.0),
  (":(", -0.75),
  (":-(", -0.75),
  (":'(", -0.75),
];

const INTENSIFIERS: &[(&str, f64)] = &[
  ("extremely", 1.5),
  ("incredibly", 1.5),
  ("absolutely", 1.4),
  ("totally", 1.3),
  ("very", 1.3),
  ("really", 1.3),
  ("so", 1.3),
  ("super", 1.3),
  ("too", 1.2),
  ("highly", 1.2),
  ("quite", 1.1),
  ("pretty", 1.1),
  ("somewhat", 0.8),
  ("fairly", 0.8),
  ("rather", 0.8),
  ("slightly", 0.7),
  ("barely", 0.5),
];

const NEGATIONS: &[&str] = &[
  "not", "no", "never", "nothing", "neither", "nor", "without", "hardly", "cannot",
];

/// Words allowed between a negation and the word it negates.
const NEGATION_BRIDGES: &[&str] = &["a", "an", "the"];

/// Lookup tables for the polarity heuristic.
#[derive(Debug, Clone)]
pub struct Lexicon {
  polarity: HashMap<&'static str, f64>,
  intensity: HashMap<&'static str, f64>,
}

impl Lexicon {
  pub fn new() -> Self {
    Self {
      polarity: polarity_entries(POLARITY_TABLE)
        .chain(EMOTICONS.iter().copied())
        .collect(),
      intensity: INTENSIFIERS.iter().copied().collect(),
    }
  }

  pub fn polarity(&self, word: &str) -> Option<f64> {
    self.polarity.get(word).copied()
  }

  pub fn intensity(&self, word: &str) -> Option<f64> {
    self.intensity.get(word).copied()
  }

  /// Negation words plus any `n't` contraction ("don't", "wasn't").
  pub fn is_negation(&self, word: &str) -> bool {
    NEGATIONS.contains(&word)
      || word.ends_with("n't")
      || matches!(word, "dont" | "didnt" | "doesnt" | "isnt" | "wasnt" | "wont" | "cant")
  }

  pub fn is_negation_bridge(&self, word: &str) -> bool {
    NEGATION_BRIDGES.contains(&word)
  }

  /// Emoticon polarity for a raw token, matched before punctuation is stripped.
  pub fn emoticon(&self, token: &str) -> Option<f64> {
    let token = token.to_lowercase();
    EMOTICONS.iter().find(|(e, _)| *e == token).map(|(_, p)| *p)
  }
}

/// Skips blank lines, `#` comments and lines that do not parse.
fn polarity_entries(table: &'static str) -> impl Iterator<Item = (&'static str, f64)> {
  table.lines().filter_map(|line| {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      return None;
    }
    let (word, value) = line.split_once('\t')?;
    let value = value.trim().parse::<f64>().ok()?;
    Some((word.trim(), value))
  })
}

impl Default for Lexicon {
  fn default() -> Self {
    Self::new()
  }
}
