//! Review column lookup over arbitrary user-supplied headers.

/// Substring a header must contain (case-insensitive) to hold reviews.
pub const REVIEW_KEYWORD: &str = "review";

/// Index of the first column whose lower-cased name contains [`REVIEW_KEYWORD`].
pub fn find_review_column<S: AsRef<str>>(names: &[S]) -> Option<usize> {
  names
    .iter()
    .position(|name| name.as_ref().to_lowercase().contains(REVIEW_KEYWORD))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_any_case() {
    assert_eq!(find_review_column(&["id", "Review_Text"]), Some(1));
    assert_eq!(find_review_column(&["CUSTOMER REVIEW", "date"]), Some(0));
    assert_eq!(find_review_column(&["Reviewer", "rating"]), Some(0));
  }

  #[test]
  fn first_match_wins() {
    assert_eq!(find_review_column(&["stars", "review_title", "review_body"]), Some(1));
  }

  #[test]
  fn none_when_absent() {
    assert_eq!(find_review_column(&["id", "comment", "rating"]), None);
    assert_eq!(find_review_column::<&str>(&[]), None);
  }
}
