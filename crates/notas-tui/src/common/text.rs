//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Character drawn in place of each password character.
pub const MASK_CHAR: char = '•';

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Keeps the start of the text. Wide characters (CJK, emoji) count as two
/// columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Truncates from the start so the end of the text stays visible.
///
/// Used for input lines, where the cursor sits after the last character.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    let mut truncated = String::from("…");
    truncated.extend(kept.into_iter().rev());
    truncated
}

/// Replaces every character with [`MASK_CHAR`].
pub fn mask(text: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, text.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start_with_ellipsis("hello world", 6), "…world");
        assert_eq!(truncate_start_with_ellipsis("4.5", 6), "4.5");
    }

    #[test]
    fn test_truncate_start_wide_chars() {
        // "ñandú" is 5 columns wide
        assert_eq!(truncate_start_with_ellipsis("ñandú", 4), "…ndú");
        // CJK chars take 2 columns each
        assert_eq!(truncate_start_with_ellipsis("a中文", 4), "…文");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("contraseña"), "••••••••••");
    }
}
