//! Width-aware text helpers for terminal rendering.
//!
//! Widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` columns, ending with `...` when cut.
#[must_use]
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width - 3;
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    truncated.push_str("...");
    truncated
}

/// Greedily wraps prose at word boundaries into lines of at most
/// `max_width` columns.
///
/// Blank input lines are kept as paragraph breaks. Words wider than the
/// limit are truncated with an ellipsis.
#[must_use]
pub(crate) fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let fitted = if word.width() > width {
                truncate_with_ellipsis(word, width)
            } else {
                word.to_owned()
            };
            let needed = if current.is_empty() {
                fitted.width()
            } else {
                current.width().saturating_add(1).saturating_add(fitted.width())
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&fitted);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{truncate_with_ellipsis, wrap_words};

    #[rstest]
    #[case::fits("hello", 10, "hello")]
    #[case::cut("The Lord of the Rings", 10, "The Lor...")]
    #[case::zero("abcdef", 0, "")]
    #[case::tiny("abcdef", 2, "..")]
    #[case::wide_characters("千と千尋の神隠し", 7, "千と...")]
    fn truncation(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_with_ellipsis(text, width), expected);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_words("a thief who steals corporate secrets", 12),
            vec!["a thief who", "steals", "corporate", "secrets"]
        );
    }

    #[test]
    fn keeps_paragraph_breaks() {
        assert_eq!(wrap_words("first\n\nsecond", 20), vec!["first", "", "second"]);
    }

    #[test]
    fn overlong_words_are_truncated() {
        assert_eq!(wrap_words("supercalifragilistic", 8), vec!["super..."]);
    }
}
