//! Word-frequency comparison.
//!
//! Two documents that use the same words the same number of times are likely
//! to share text. This comparator tallies every word on both sides, discounts
//! occurrences that come from a shared sample document, and scores each word
//! by how closely the two counts agree.

use crate::comparator::{Comparator, ComparatorKind};
use crate::context::ComparisonContext;
use crate::types::{DetailRow, DisplayLevel, MatchResult, WordFrequencyMap};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use tracing::debug;

/// Detail table captions.
pub const CAPTION: [&str; 4] = ["Word", "Left count", "Right count", "Match"];

/// Occurrences of one word in the left and right documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTally {
  pub left: usize,
  pub right: usize,
}

impl WordTally {
  pub fn new(left: usize, right: usize) -> Self {
    Self { left, right }
  }

  /// Symmetric agreement between both counts: `min / max`, or 0 when the
  /// word is missing on either side.
  pub fn ratio(&self) -> f32 {
    if self.left == 0 || self.right == 0 {
      return 0.0;
    }
    self.left.min(self.right) as f32 / self.left.max(self.right) as f32
  }

  /// Removes `count` occurrences from both sides, flooring each at 0.
  fn discount(&mut self, count: usize) {
    self.left = self.left.saturating_sub(count);
    self.right = self.right.saturating_sub(count);
  }

  fn is_empty(&self) -> bool {
    self.left == 0 && self.right == 0
  }
}

/// Per-word tallies of a document pair, ordered by word.
///
/// Every word present in either document has an entry; a word missing from
/// one side has a count of 0 there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedCounts {
  words: BTreeMap<String, WordTally>,
}

impl CombinedCounts {
  /// Merges the left and right word counts.
  pub fn from_pair(left: &WordFrequencyMap, right: &WordFrequencyMap) -> Self {
    let mut words: BTreeMap<String, WordTally> = BTreeMap::new();

    for (word, count) in left {
      words.entry(word.clone()).or_default().left += count;
    }
    for (word, count) in right {
      words.entry(word.clone()).or_default().right += count;
    }

    Self { words }
  }

  /// Discounts the sample's occurrences from both sides of every shared word.
  ///
  /// Words reduced to zero on both sides are dropped. Sample words that
  /// neither document uses are ignored. Returns how many words were dropped.
  pub fn subtract_sample(&mut self, sample: &WordFrequencyMap) -> usize {
    let mut removed = 0;

    for (word, &count) in sample {
      if let Some(tally) = self.words.get_mut(word) {
        tally.discount(count);
        if tally.is_empty() {
          self.words.remove(word);
          removed += 1;
        }
      }
    }

    removed
  }

  pub fn get(&self, word: &str) -> Option<WordTally> {
    self.words.get(word).copied()
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> btree_map::Iter<'_, String, WordTally> {
    self.words.iter()
  }
}

/// Scores a document pair by how often each word is used on both sides.
///
/// Each surviving word contributes `min(left, right) / max(left, right)` to
/// the result, and the score is the mean of those ratios. When a sample
/// document is supplied, its counts are subtracted from both sides first so
/// that shared boilerplate does not look like copying.
///
/// # Examples
///
/// ```rust
/// use wordmatch::prelude::*;
/// use std::collections::HashMap;
///
/// let left = Document::new("a", HashMap::from([("x".to_string(), 4)]));
/// let right = Document::new("b", HashMap::from([("x".to_string(), 10)]));
/// let sample = Document::new("template", HashMap::from([("x".to_string(), 4)]));
///
/// let context = ComparisonContext::new(&left, &right).with_sample(Some(&sample));
/// let result = WordFrequencyComparator::new(context).run();
///
/// let row = result.row("x").unwrap();
/// assert_eq!((row.left, row.right, row.ratio), (0, 6, 0.0));
/// ```
pub struct WordFrequencyComparator<'a> {
  context: ComparisonContext<'a>,
}

impl<'a> WordFrequencyComparator<'a> {
  pub fn new(context: ComparisonContext<'a>) -> Self {
    Self { context }
  }

  /// Builds the per-word tallies with the sample already discounted.
  pub fn combined_counts(&self) -> CombinedCounts {
    let mut counts = CombinedCounts::from_pair(&self.context.left.words, &self.context.right.words);
    if let Some(sample) = self.context.sample {
      let removed = counts.subtract_sample(&sample.words);
      debug!(sample = %sample.name, removed, "Discounted sample words");
    }
    counts
  }
}

impl Comparator for WordFrequencyComparator<'_> {
  fn name(&self) -> &str {
    ComparatorKind::WordCounter.name()
  }

  fn run(&self) -> MatchResult {
    let counts = self.combined_counts();

    let mut result = MatchResult::new(
      self.name(),
      &self.context.left.name,
      &self.context.right.name,
      DisplayLevel::Full,
    )
    .with_caption(CAPTION);

    for (word, tally) in counts.iter() {
      let ratio = tally.ratio();
      result.add_match(ratio);
      result.add_row(DetailRow {
        word: word.clone(),
        left: tally.left,
        right: tally.right,
        ratio,
      });
    }

    debug!(
      left = %self.context.left.name,
      right = %self.context.right.name,
      words = counts.len(),
      score = result.score(),
      "Compared word frequencies"
    );

    result
  }
}
