//! Configuration for comparison runs.

use crate::comparator::ComparatorKind;
use crate::error::{Error, Result};
use crate::types::DisplayLevel;
use serde::{Deserialize, Serialize};

/// Settings shared by the engine and report rendering.
///
/// Every field has a default, so a settings file only needs to name what it
/// changes:
///
/// ```rust
/// use wordmatch::prelude::*;
///
/// let settings = Settings::from_json(r#"{ "threshold": 0.8 }"#).unwrap();
/// assert_eq!(settings.threshold, 0.8);
/// assert_eq!(settings.display, DisplayLevel::Full);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
  /// Comparators the engine runs when none are registered explicitly.
  #[serde(default = "default_comparators")]
  pub comparators: Vec<ComparatorKind>,
  /// How much of each comparator result reports show.
  #[serde(default)]
  pub display: DisplayLevel,
  /// Pair score at or above which a pair is reported as suspicious.
  #[serde(default = "default_threshold")]
  pub threshold: f32,
}

fn default_comparators() -> Vec<ComparatorKind> {
  vec![ComparatorKind::WordCounter]
}

fn default_threshold() -> f32 {
  0.5
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      comparators: default_comparators(),
      display: DisplayLevel::default(),
      threshold: default_threshold(),
    }
  }
}

impl Settings {
  /// Parses and validates settings from JSON.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Settings`] for malformed JSON and
  /// [`Error::InvalidSettings`] for out-of-range values.
  pub fn from_json(json: &str) -> Result<Self> {
    let settings: Settings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
  }

  /// Checks that every value is in range.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidSettings`] if the threshold is outside `[0, 1]`.
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.threshold) {
      return Err(Error::InvalidSettings {
        message: format!("threshold must be within [0, 1], got {}", self.threshold),
      });
    }
    Ok(())
  }

  /// Sets the comparators to run.
  pub fn comparators(mut self, comparators: Vec<ComparatorKind>) -> Self {
    self.comparators = comparators;
    self
  }

  /// Sets the report display level.
  pub fn display(mut self, display: DisplayLevel) -> Self {
    self.display = display;
    self
  }

  /// Sets the suspicion threshold.
  pub fn threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }
}
