//! Documents as seen by comparators: a name plus word counts.

#[cfg(feature = "tokenize")]
use crate::error::{Error, Result};
use crate::types::WordFrequencyMap;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tokenize")]
use std::path::Path;

/// A document reduced to its word-frequency map.
///
/// Comparators never look at raw text. Normalization (case folding,
/// punctuation stripping) happens before a `Document` is built, and must be
/// the same for every document in a comparison for sample subtraction to be
/// meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  /// Display name, usually the file name.
  pub name: String,
  /// Occurrence count per normalized word.
  pub words: WordFrequencyMap,
}

impl Document {
  /// Creates a document from an already tokenized word-count map.
  pub fn new(name: impl Into<String>, words: WordFrequencyMap) -> Self {
    Self {
      name: name.into(),
      words,
    }
  }

  /// Tokenizes `text` and counts its words.
  #[cfg(feature = "tokenize")]
  pub fn from_text(name: impl Into<String>, text: &str) -> Self {
    Self::new(name, crate::tokenizer::term_frequencies(text))
  }

  /// Reads a UTF-8 file and tokenizes it. The file name becomes the
  /// document name.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] if the file cannot be read as UTF-8 text.
  #[cfg(feature = "tokenize")]
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| path.display().to_string());

    Ok(Self::from_text(name, &text))
  }

  /// Occurrence count of `word`, 0 when absent.
  pub fn count(&self, word: &str) -> usize {
    self.words.get(word).copied().unwrap_or(0)
  }

  /// Total number of word occurrences.
  pub fn total_words(&self) -> usize {
    self.words.values().sum()
  }
}
