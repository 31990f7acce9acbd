//! Wordmatch - word-frequency document comparison for plagiarism detection.
//!
//! Documents are reduced to word counts and compared pairwise by pluggable
//! comparators. The built-in word counter scores a pair by how closely both
//! documents agree on how often each word is used, optionally ignoring words
//! inherited from a shared template document.

pub mod comparator;
pub mod comparators;
pub mod context;
pub mod document;
pub mod engine;
pub mod error;
pub mod report;
pub mod settings;
#[cfg(feature = "tokenize")]
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result};

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::comparator::*;
  pub use crate::comparators::*;
  pub use crate::context::*;
  pub use crate::document::*;
  pub use crate::engine::*;
  pub use crate::settings::*;
  pub use crate::types::*;
}
