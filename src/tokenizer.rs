//! Text tokenization into normalized word counts.

use crate::types::WordFrequencyMap;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercased words of `text`, split on Unicode word boundaries.
fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
  text.unicode_words().map(str::to_lowercase)
}

/// Split text into lowercase words.
pub fn tokenize(text: &str) -> Vec<String> {
  normalized_words(text).collect()
}

/// Tally how often each normalized word occurs in a text.
///
/// Case variants of a word share one entry, so `Fox` and `fox` count together.
pub fn term_frequencies(text: &str) -> WordFrequencyMap {
  normalized_words(text).fold(WordFrequencyMap::new(), |mut freqs, word| {
    *freqs.entry(word).or_default() += 1;
    freqs
  })
}
