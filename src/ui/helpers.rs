//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! UTF-8 safe truncation.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to at most `max` characters, appending an ellipsis when
/// anything was cut.
///
/// Operates on character indices, not bytes, so multi-byte names render
/// correctly.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = chars[..max.saturating_sub(1)].iter().collect();
    out.push('…');
    out
}

/// Character count of a string, for column accounting.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Acme", 10), "Acme");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_the_limit() {
        let out = truncate("A Very Long Company Name", 10);
        assert_eq!(display_width(&out), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let out = truncate("Société Générale", 9);
        assert_eq!(display_width(&out), 9);
    }

    #[test]
    fn zero_width_truncates_to_empty() {
        assert_eq!(truncate("Acme", 0), "");
    }
}
