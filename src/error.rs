//! Error types for the fallible edges of the crate.
//!
//! The comparison core is infallible. Errors only come from loading documents
//! and parsing settings.

use std::path::PathBuf;

/// Errors produced while loading documents or settings.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// A document could not be read from disk.
  #[error("failed to read document {}: {source}", path.display())]
  Io {
    /// Path that failed to load
    path: PathBuf,
    /// Underlying I/O error
    source: std::io::Error,
  },

  /// Settings JSON could not be parsed.
  #[error("failed to parse settings: {0}")]
  Settings(#[from] serde_json::Error),

  /// Settings parsed but hold an out-of-range value.
  #[error("invalid settings: {message}")]
  InvalidSettings {
    /// What was wrong
    message: String,
  },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
