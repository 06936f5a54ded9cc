// Output formatting: the terminal report.

pub mod terminal;

/// Format a ratio to the four decimal places used across the report.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.4}")
}
