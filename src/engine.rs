//! The engine that runs comparators over document pairs.

use crate::comparator::ComparatorFactory;
use crate::context::ComparisonContext;
use crate::document::Document;
use crate::settings::Settings;
use crate::types::MatchResult;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs a set of comparators over document pairs.
///
/// The engine owns the optional sample document and hands it to every
/// comparator, so template text is discounted consistently across all pairs.
///
/// Create a `ComparisonEngine` using the [`ComparisonEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use wordmatch::prelude::*;
///
/// let engine = ComparisonEngine::builder()
///   .with(Box::new(ComparatorKind::WordCounter))
///   .sample(Document::from_text("handout.txt", "Answer the questions below."))
///   .build();
///
/// let docs = vec![
///   Document::from_text("a.txt", "Answer the questions below. Rust is fast."),
///   Document::from_text("b.txt", "Answer the questions below. Rust is fast."),
///   Document::from_text("c.txt", "Answer the questions below. I like Go."),
/// ];
///
/// let reports = engine.compare_all(&docs);
/// assert_eq!(reports.len(), 3);
/// assert_eq!((reports[0].left.as_str(), reports[0].right.as_str()), ("a.txt", "b.txt"));
/// assert_eq!(reports[0].score(), 1.0);
/// ```
pub struct ComparisonEngine {
  /// Factories for the comparators run on every pair.
  comparators: Vec<Box<dyn ComparatorFactory>>,
  /// Template document discounted from every pair.
  sample: Option<Document>,
  settings: Settings,
}

impl ComparisonEngine {
  /// Creates a new `ComparisonEngineBuilder` to construct an engine.
  pub fn builder() -> ComparisonEngineBuilder {
    ComparisonEngineBuilder::new()
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn sample(&self) -> Option<&Document> {
    self.sample.as_ref()
  }

  /// Runs every comparator over one document pair.
  pub fn compare(&self, left: &Document, right: &Document) -> PairReport {
    if self.comparators.is_empty() {
      warn!(left = %left.name, right = %right.name, "No comparators registered");
    }

    let context = ComparisonContext::new(left, right).with_sample(self.sample.as_ref());

    let results = self
      .comparators
      .iter()
      .map(|factory| factory.build(context).run())
      .collect();

    PairReport {
      left: left.name.clone(),
      right: right.name.clone(),
      results,
    }
  }

  /// Compares every unordered pair of `documents`.
  ///
  /// Reports are sorted by score, highest first. Pairs with equal scores keep
  /// their input order. If the `parallel` feature is enabled, pairs are
  /// compared concurrently.
  pub fn compare_all(&self, documents: &[Document]) -> Vec<PairReport> {
    let pairs: Vec<(usize, usize)> = (0..documents.len())
      .flat_map(|i| (i + 1..documents.len()).map(move |j| (i, j)))
      .collect();

    info!(
      documents = documents.len(),
      pairs = pairs.len(),
      "Comparing documents"
    );

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    let mut reports: Vec<PairReport> = iter
      .map(|&(i, j)| self.compare(&documents[i], &documents[j]))
      .collect();

    reports.sort_by(|a, b| {
      b.score()
        .partial_cmp(&a.score())
        .unwrap_or(std::cmp::Ordering::Equal)
    });

    reports
  }
}

/// A builder for creating `ComparisonEngine` instances.
#[derive(Default)]
pub struct ComparisonEngineBuilder {
  comparators: Vec<Box<dyn ComparatorFactory>>,
  sample: Option<Document>,
  settings: Option<Settings>,
}

impl ComparisonEngineBuilder {
  /// Creates a new, empty `ComparisonEngineBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a comparator to run on every pair.
  pub fn with(mut self, comparator: Box<dyn ComparatorFactory>) -> Self {
    self.comparators.push(comparator);
    self
  }

  /// Sets the template document discounted from every pair.
  pub fn sample(mut self, sample: Document) -> Self {
    self.sample = Some(sample);
    self
  }

  /// Sets the engine settings.
  pub fn settings(mut self, settings: Settings) -> Self {
    self.settings = Some(settings);
    self
  }

  /// Builds the engine.
  ///
  /// If no comparator was added, the comparators named by the settings are
  /// used.
  pub fn build(self) -> ComparisonEngine {
    let settings = self.settings.unwrap_or_default();
    let comparators = if self.comparators.is_empty() {
      settings
        .comparators
        .iter()
        .map(|&kind| Box::new(kind) as Box<dyn ComparatorFactory>)
        .collect()
    } else {
      self.comparators
    };

    ComparisonEngine {
      comparators,
      sample: self.sample,
      settings,
    }
  }
}

/// Every comparator result for one document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
  /// Name of the left document.
  pub left: String,
  /// Name of the right document.
  pub right: String,
  /// One result per comparator, in registration order.
  pub results: Vec<MatchResult>,
}

impl PairReport {
  /// Mean of the comparator scores, `0.0` with no comparators.
  pub fn score(&self) -> f32 {
    if self.results.is_empty() {
      return 0.0;
    }
    self.results.iter().map(MatchResult::score).sum::<f32>() / self.results.len() as f32
  }

  /// Whether the pair scores at or above `threshold`.
  pub fn is_suspicious(&self, threshold: f32) -> bool {
    self.score() >= threshold
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::comparator::ComparatorKind;
  use crate::types::WordFrequencyMap;

  fn doc(name: &str, words: &[(&str, usize)]) -> Document {
    let words: WordFrequencyMap = words.iter().map(|(w, c)| (w.to_string(), *c)).collect();
    Document::new(name, words)
  }

  #[test]
  fn test_build_falls_back_to_settings_comparators() {
    let engine = ComparisonEngine::builder().build();
    assert_eq!(engine.settings(), &Settings::default());
    assert!(engine.sample().is_none());

    let report = engine.compare(&doc("a", &[("x", 1)]), &doc("b", &[("x", 1)]));

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].comparator, ComparatorKind::WordCounter.name());
    assert_eq!(report.score(), 1.0);
  }

  #[test]
  fn test_no_comparators_scores_zero() {
    let engine = ComparisonEngine::builder()
      .settings(Settings::default().comparators(Vec::new()))
      .build();
    let report = engine.compare(&doc("a", &[("x", 1)]), &doc("b", &[("x", 1)]));

    assert!(report.results.is_empty());
    assert_eq!(report.score(), 0.0);
    assert!(!report.is_suspicious(0.5));
  }

  #[test]
  fn test_sample_applies_to_every_pair() {
    let engine = ComparisonEngine::builder()
      .sample(doc("template", &[("header", 2)]))
      .build();
    let report = engine.compare(
      &doc("a", &[("header", 2), ("body", 3)]),
      &doc("b", &[("header", 2), ("body", 1)]),
    );

    let result = &report.results[0];
    assert!(result.row("header").is_none());
    assert_eq!(result.row("body").map(|r| (r.left, r.right)), Some((3, 1)));
  }

  #[test]
  fn test_compare_all_visits_each_pair_once() {
    let engine = ComparisonEngine::builder().build();
    let docs = vec![
      doc("a", &[("x", 2)]),
      doc("b", &[("x", 1)]),
      doc("c", &[("x", 2)]),
      doc("d", &[("y", 2)]),
    ];

    let reports = engine.compare_all(&docs);

    assert_eq!(reports.len(), 6);
    assert_eq!((reports[0].left.as_str(), reports[0].right.as_str()), ("a", "c"));
    assert_eq!(reports[0].score(), 1.0);
    assert!(reports.windows(2).all(|w| w[0].score() >= w[1].score()));
    assert!(reports.iter().all(|r| r.left < r.right));
  }

  fn disjoint_docs(count: usize) -> Vec<Document> {
    (0..count)
      .map(|i| {
        let name = format!("doc{i}");
        let word = format!("w{i}");
        doc(&name, &[(word.as_str(), 1)])
      })
      .collect()
  }

  #[test]
  fn test_compare_all_keeps_pair_order_on_ties() {
    let engine = ComparisonEngine::builder().build();
    let docs = disjoint_docs(5);

    let reports = engine.compare_all(&docs);

    let expected: Vec<(String, String)> = (0..5)
      .flat_map(|i| (i + 1..5).map(move |j| (format!("doc{i}"), format!("doc{j}"))))
      .collect();
    let actual: Vec<(String, String)> = reports
      .iter()
      .map(|r| (r.left.clone(), r.right.clone()))
      .collect();
    assert_eq!(actual.len(), 10);
    assert_eq!(actual, expected);
  }

  #[cfg(feature = "parallel")]
  #[test]
  fn test_parallel_compare_all_matches_sequential_pairs() {
    let engine = ComparisonEngine::builder().build();
    let mut docs = disjoint_docs(5);
    docs.push(doc("copy0", &[("w0", 1)]));

    let reports = engine.compare_all(&docs);

    assert_eq!(reports.len(), 15);
    assert_eq!((reports[0].left.as_str(), reports[0].right.as_str()), ("doc0", "copy0"));
    assert_eq!(reports[0].score(), 1.0);

    let mut expected: Vec<PairReport> = Vec::new();
    for i in 0..docs.len() {
      for j in i + 1..docs.len() {
        expected.push(engine.compare(&docs[i], &docs[j]));
      }
    }
    expected.sort_by(|a, b| {
      b.score()
        .partial_cmp(&a.score())
        .unwrap_or(std::cmp::Ordering::Equal)
    });
    assert_eq!(reports, expected);
  }

  #[test]
  fn test_compare_all_with_single_document() {
    let engine = ComparisonEngine::builder().build();
    assert!(engine.compare_all(&[doc("a", &[("x", 1)])]).is_empty());
  }
}
