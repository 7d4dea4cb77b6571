use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Collapses line breaks so the text fits on one row.
pub fn single_line(s: &str) -> String {
    s.lines().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_no_cut() {
        assert_eq!(truncate_to_width("Sunny", 10), "Sunny");
        assert_eq!(truncate_to_width("Sunny", 5), "Sunny");
    }

    #[test]
    fn test_truncate_cut_alnum() {
        assert_eq!(truncate_to_width("Perfect date weather", 8), "Perfect…");
    }

    #[test]
    fn test_truncate_cut_wide_chars() {
        // each emoji is two columns wide
        assert_eq!(truncate_to_width("😊😊😊", 4), "😊…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Discover\nComing Soon"), "Discover Coming Soon");
        assert_eq!(single_line("one"), "one");
    }
}
