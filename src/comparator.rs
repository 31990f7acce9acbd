//! The `Comparator` trait, which defines the interface for comparison strategies.

use crate::comparators::WordFrequencyComparator;
use crate::context::ComparisonContext;
use crate::types::MatchResult;
use serde::{Deserialize, Serialize};

/// A strategy that scores how similar two documents are.
///
/// A comparator is constructed over one [`ComparisonContext`] and then run.
/// Every comparator is independent and read-only over its documents, so the
/// `Send` and `Sync` bounds let the engine run many of them concurrently.
pub trait Comparator: Send + Sync {
  /// Display label used in reports.
  fn name(&self) -> &str;

  /// Compares the documents this comparator was built over.
  ///
  /// The returned result holds one contributed ratio per compared unit and
  /// the detail rows that explain them.
  fn run(&self) -> MatchResult;
}

/// Builds a comparator for each document pair the engine compares.
///
/// Comparators borrow the documents they compare, so the engine holds
/// factories rather than comparators. Every [`ComparatorKind`] is a factory;
/// custom strategies implement this trait to plug into the engine.
pub trait ComparatorFactory: Send + Sync {
  /// Constructs a comparator over `context`.
  fn build<'a>(&self, context: ComparisonContext<'a>) -> Box<dyn Comparator + 'a>;
}

/// The built-in comparison strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorKind {
  /// Compares how often each word is used on both sides.
  WordCounter,
}

impl ComparatorKind {
  /// Display label used in reports.
  pub fn name(self) -> &'static str {
    match self {
      ComparatorKind::WordCounter => "Document Word Counter",
    }
  }
}

impl ComparatorFactory for ComparatorKind {
  fn build<'a>(&self, context: ComparisonContext<'a>) -> Box<dyn Comparator + 'a> {
    match self {
      ComparatorKind::WordCounter => Box::new(WordFrequencyComparator::new(context)),
    }
  }
}
