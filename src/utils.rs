use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending in "...".
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Dashed rule of exactly `width` columns: `dash` dashes then `gap` spaces.
pub fn dashed_line(width: usize, dash: usize, gap: usize) -> String {
    if dash == 0 {
        return " ".repeat(width);
    }
    (0..width)
        .map(|i| if i % (dash + gap) < dash { '-' } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_no_truncation() {
        assert_eq!(truncate_to_width("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_with_truncation() {
        let result = truncate_to_width("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.width(), 20);
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide.
        let result = truncate_to_width("日本語のテキスト", 9);
        assert_eq!(result, "日本語...");
        assert!(result.width() <= 9);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_to_width("abcdef", 2), "..");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_dashed_line() {
        assert_eq!(dashed_line(10, 2, 1), "-- -- -- -");
        assert_eq!(dashed_line(0, 2, 1), "");
        assert_eq!(dashed_line(3, 0, 1), "   ");
    }
}
