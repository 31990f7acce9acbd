//! Core data types shared by comparators, the engine and reports.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence count per normalized word for one document.
pub type WordFrequencyMap = HashMap<String, usize>;

/// How much of a comparator's result a report should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayLevel {
  /// Only the comparator score.
  Basic,
  /// The score plus every detail row.
  #[default]
  Full,
}

/// One row of the word-counter detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
  /// The word this row describes.
  pub word: String,
  /// Occurrences in the left document after sample adjustment.
  pub left: usize,
  /// Occurrences in the right document after sample adjustment.
  pub right: usize,
  /// Per-word match ratio in `[0, 1]`.
  pub ratio: f32,
}

/// The outcome of running one comparator over a document pair.
///
/// A result carries both the individual match ratios a comparator contributed
/// and the rows explaining them. The overall score is derived from the
/// ratios, so a comparator only has to push one ratio per compared unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
  /// Display label of the comparator that produced this result.
  pub comparator: String,
  /// Name of the left document.
  pub left: String,
  /// Name of the right document.
  pub right: String,
  /// How much detail a report should render.
  pub display: DisplayLevel,
  /// Column captions for `rows`.
  pub caption: Vec<String>,
  /// Explanatory rows, one per compared word.
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub rows: Vec<DetailRow>,
  /// Every ratio contributed towards the score.
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub matches: Vec<f32>,
}

impl MatchResult {
  /// Creates an empty result for the given comparator and documents.
  pub fn new(
    comparator: impl Into<String>,
    left: impl Into<String>,
    right: impl Into<String>,
    display: DisplayLevel,
  ) -> Self {
    Self {
      comparator: comparator.into(),
      left: left.into(),
      right: right.into(),
      display,
      caption: Vec::new(),
      rows: Vec::new(),
      matches: Vec::new(),
    }
  }

  /// Sets the detail table captions.
  pub fn with_caption<I, S>(mut self, caption: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.caption = caption.into_iter().map(Into::into).collect();
    self
  }

  /// Contributes one ratio towards the overall score.
  pub fn add_match(&mut self, ratio: f32) {
    self.matches.push(ratio);
  }

  /// Adds an explanatory detail row.
  pub fn add_row(&mut self, row: DetailRow) {
    self.rows.push(row);
  }

  /// Arithmetic mean of every contributed ratio.
  ///
  /// A result with no contributions scores `0.0`: nothing was shared, so
  /// nothing counts as evidence of copying.
  pub fn score(&self) -> f32 {
    if self.matches.is_empty() {
      return 0.0;
    }
    self.matches.iter().sum::<f32>() / self.matches.len() as f32
  }

  /// Looks up the detail row for `word`.
  pub fn row(&self, word: &str) -> Option<&DetailRow> {
    self.rows.iter().find(|r| r.word == word)
  }
}
