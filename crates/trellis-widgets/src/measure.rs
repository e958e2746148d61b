//! Display-column measurement for widget labels.
//!
//! Thin wrappers over [`unicode-width`] used by the collapsing layout to
//! price items in terminal columns, and by the menu to truncate labels that
//! do not fit their row.
//!
//! [`unicode-width`]: https://docs.rs/unicode-width

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// CJK characters, fullwidth forms, and similar characters count as 2
/// columns; control characters count as 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_width` display columns.
///
/// If the string fits within `max_width`, it is returned unchanged.
/// If truncated, `tail` (e.g. "…") is appended. The total display width
/// of the result (including the tail) will not exceed `max_width`.
///
/// # Examples
///
/// ```
/// use trellis_widgets::measure::truncate;
///
/// assert_eq!(truncate("hello world", 8, "…"), "hello w…");
/// assert_eq!(truncate("hi", 10, "…"), "hi");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = display_width(tail);
    if tail_width >= max_width {
        // No room for content at all; emit as much of the tail as fits.
        return take_columns(tail, max_width);
    }

    let mut result = take_columns(s, max_width - tail_width);
    result.push_str(tail);
    result
}

/// Longest prefix of `s` that fits within `columns` display columns.
fn take_columns(s: &str, columns: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > columns {
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_cjk() {
        // Each CJK character is width 2
        assert_eq!(display_width("\u{4E16}\u{754C}"), 4); // "世界"
        assert_eq!(display_width("hi\u{4E16}\u{754C}"), 6);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate("hello", 10, "…"), "hello");
        assert_eq!(truncate("hello", 5, "…"), "hello");
    }

    #[test]
    fn truncate_basic() {
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_with_cjk() {
        // "世界abc" has width 4+3=7. Truncate to 6 with "…" (width 1):
        // target 5 columns of content = "世界a", then the tail.
        let result = truncate("\u{4E16}\u{754C}abc", 6, "\u{2026}");
        assert_eq!(result, "\u{4E16}\u{754C}a\u{2026}");
        assert_eq!(display_width(&result), 6);
    }

    #[test]
    fn truncate_wide_char_never_splits() {
        // Truncating to 4 with a 1-column tail leaves 3 columns, which
        // cannot hold the second ideograph; it is dropped whole.
        let result = truncate("\u{4E16}\u{754C}", 3, "\u{2026}");
        assert_eq!(result, "\u{4E16}\u{2026}");
    }

    #[test]
    fn truncate_empty_tail() {
        assert_eq!(truncate("hello world", 5, ""), "hello");
    }

    #[test]
    fn truncate_tail_wider_than_max() {
        assert_eq!(truncate("hello", 2, "..."), "..");
    }
}
