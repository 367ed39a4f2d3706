//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` terminal columns.
///
/// Uses unicode width so wide characters (CJK, emoji) are measured correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Returns the suffix of `text` that fits in `max_width` columns.
///
/// Used to keep the end of a long input value (where the cursor usually is)
/// visible in a fixed-width field. Returns the suffix and the number of
/// chars skipped from the front.
pub fn tail_fitting(text: &str, max_width: usize) -> (&str, usize) {
    if text.width() <= max_width {
        return (text, 0);
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        used += ch_width;
        start = idx;
    }
    let skipped = text[..start].chars().count();
    (&text[start..], skipped)
}

/// Display width of a button label rendered as `[label]`.
pub fn button_width(label: &str) -> u16 {
    (label.width() + 2) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_exact() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        // "中文" = 4 columns, then "t" = 1, ellipsis = 1
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_tail_fitting_short_text_untouched() {
        assert_eq!(tail_fitting("milk", 10), ("milk", 0));
    }

    #[test]
    fn test_tail_fitting_keeps_end() {
        assert_eq!(tail_fitting("comprar leche", 5), ("leche", 8));
    }

    #[test]
    fn test_button_width_counts_columns_not_bytes() {
        assert_eq!(button_width("Cerrar Sesión"), 15);
    }
}
