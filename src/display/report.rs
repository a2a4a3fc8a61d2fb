//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the ledger report and the
//! category summary.

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Keep at most `max_chars` characters of a string
///
/// Cuts on character boundaries, without any ellipsis.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
