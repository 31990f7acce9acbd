//! Built-in `Comparator` implementations.
//!
//! # Available Comparators
//!
//! - [`WordFrequencyComparator`](crate::comparators::WordFrequencyComparator):
//!   compares how many times each word appears in both documents.
//!
//! # Example
//!
//! ```rust
//! use wordmatch::prelude::*;
//!
//! let left = Document::from_text("left.txt", "the fox and the dog");
//! let right = Document::from_text("right.txt", "the fox and the cat");
//!
//! let comparator = WordFrequencyComparator::new(ComparisonContext::new(&left, &right));
//! let result = comparator.run();
//!
//! assert_eq!(result.row("the").map(|r| r.ratio), Some(1.0));
//! assert_eq!(result.row("cat").map(|r| r.ratio), Some(0.0));
//! ```

/// Implements the word-frequency comparator.
pub mod word_counter;

pub use word_counter::{CombinedCounts, WordFrequencyComparator, WordTally};
