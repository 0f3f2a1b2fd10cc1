//! Formatting utilities for terminal output

use std::time::Duration;

/// Format letters as a bracketed list, e.g. `[P, A, G]`
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    let joined = letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Whole seconds, the way the finish banner reports them
#[must_use]
pub fn format_seconds(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs == 1 {
        "1 second".to_string()
    } else {
        format!("{secs} seconds")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_bracketed() {
        assert_eq!(format_letters(&['P', 'A', 'G']), "[P, A, G]");
        assert_eq!(format_letters(&[]), "[]");
    }

    #[test]
    fn seconds_truncate() {
        assert_eq!(format_seconds(Duration::from_millis(1999)), "1 second");
        assert_eq!(format_seconds(Duration::from_secs(42)), "42 seconds");
        assert_eq!(format_seconds(Duration::ZERO), "0 seconds");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
