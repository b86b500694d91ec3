//! Formatting utilities for terminal output

pub const TITLE: &str = "ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL";
pub const PROMPT: &str = "Enter Password";

/// `N Attempt(s) Left:` followed by one block per remaining attempt
///
/// # Examples
/// ```
/// use wordhack::output::formatters::attempts_line;
///
/// assert_eq!(attempts_line(3), "3 Attempt(s) Left: █ █ █");
/// assert_eq!(attempts_line(0), "0 Attempt(s) Left:");
/// ```
#[must_use]
pub fn attempts_line(remaining: usize) -> String {
    let blocks = vec!["█"; remaining].join(" ");
    if blocks.is_empty() {
        format!("{remaining} Attempt(s) Left:")
    } else {
        format!("{remaining} Attempt(s) Left: {blocks}")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, 0 for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
