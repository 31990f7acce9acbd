//! The documents a comparator is constructed over.

use crate::document::Document;

/// The left, right and optional sample documents of one comparison.
///
/// The sample is a template shared by both sides, such as an assignment
/// handout. Comparators use it to discount content both documents inherited
/// from it.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonContext<'a> {
  /// The left-hand document.
  pub left: &'a Document,
  /// The right-hand document.
  pub right: &'a Document,
  /// The template document, if any.
  pub sample: Option<&'a Document>,
}

impl<'a> ComparisonContext<'a> {
  /// Creates a context with no sample document.
  pub fn new(left: &'a Document, right: &'a Document) -> Self {
    Self {
      left,
      right,
      sample: None,
    }
  }

  /// Attaches a sample document.
  pub fn with_sample(mut self, sample: Option<&'a Document>) -> Self {
    self.sample = sample;
    self
  }
}
