//! Plain-text rendering of comparison reports.

use crate::engine::PairReport;
use crate::settings::Settings;
use crate::types::{DetailRow, DisplayLevel, MatchResult};

/// Formats a ratio as a percentage with two decimals, e.g. `50.00%`.
pub fn format_percent(ratio: f32) -> String {
  format!("{:.2}%", ratio * 100.0)
}

/// Formats a detail row as `word, left, right, percentage`.
pub fn format_row(row: &DetailRow) -> String {
  format!(
    "{}, {}, {}, {}",
    row.word,
    row.left,
    row.right,
    format_percent(row.ratio)
  )
}

/// Renders one pair report.
///
/// Each comparator gets a score line. Detail rows follow when both the
/// settings and the comparator result ask for [`DisplayLevel::Full`].
pub fn render(report: &PairReport, settings: &Settings) -> String {
  let mut header = format!(
    "{} <-> {}: {}",
    report.left,
    report.right,
    format_percent(report.score())
  );
  if report.is_suspicious(settings.threshold) {
    header.push_str(" [suspicious]");
  }

  let mut lines = vec![header];
  for result in &report.results {
    lines.extend(result_lines(result, settings.display));
  }

  lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Renders every report, separated by blank lines.
pub fn render_all(reports: &[PairReport], settings: &Settings) -> String {
  reports
    .iter()
    .map(|r| render(r, settings))
    .collect::<Vec<_>>()
    .join("\n")
}

fn result_lines(result: &MatchResult, display: DisplayLevel) -> Vec<String> {
  let mut lines = vec![format!(
    "  {}: {}",
    result.comparator,
    format_percent(result.score())
  )];

  if display == DisplayLevel::Basic || result.display == DisplayLevel::Basic {
    return lines;
  }

  if !result.caption.is_empty() {
    lines.push(format!("    {}", result.caption.join(", ")));
  }
  lines.extend(result.rows.iter().map(|row| format!("    {}", format_row(row))));

  lines
}
