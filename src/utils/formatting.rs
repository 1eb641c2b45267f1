//! Formatting utilities used for CLI and export outputs.

/// Format fractional hours with one decimal, e.g. `8.0h`.
pub fn hours1(hours: f64) -> String {
    format!("{:.1}h", hours)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
