use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s[..byte_index.min(s.len())]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s[byte_index..]
        .chars()
        .next()
        .map(|c| byte_index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `byte_index`, skipping any separators first.
pub fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let head = &s[..byte_index.min(s.len())];
    let mut chars = head.char_indices().rev().peekable();

    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}

    let mut start = head.len();
    while let Some((i, _)) = chars.next_if(|(_, c)| is_word_char(*c)) {
        start = i;
    }
    if start == head.len() { 0 } else { start }
}

/// Start of the next word after `byte_index`.
pub fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    let mut chars = s[byte_index..].char_indices().peekable();

    while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}

    chars.peek().map(|(i, _)| byte_index + i).unwrap_or(s.len())
}

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` so it fits in `max_width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prev_char_boundary() {
        let s = "aöb";
        assert_eq!(prev_char_boundary(s, 0), 0);
        assert_eq!(prev_char_boundary(s, 1), 0);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 4), 3);
    }

    #[test]
    fn test_next_char_boundary() {
        let s = "aöb";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 4);
        assert_eq!(next_char_boundary(s, 4), 4);
    }

    #[test]
    fn test_char_boundary_emoji() {
        let s = "👋x";
        assert_eq!(next_char_boundary(s, 0), 4);
        assert_eq!(prev_char_boundary(s, 4), 0);
    }

    #[test]
    fn test_prev_word_boundary() {
        let s = "buy oat milk";
        assert_eq!(prev_word_boundary(s, 12), 8);
        assert_eq!(prev_word_boundary(s, 8), 4);
        assert_eq!(prev_word_boundary(s, 4), 0);
        assert_eq!(prev_word_boundary(s, 2), 0);
        assert_eq!(prev_word_boundary(s, 0), 0);
    }

    #[test]
    fn test_next_word_boundary() {
        let s = "buy oat milk";
        assert_eq!(next_word_boundary(s, 0), 4);
        assert_eq!(next_word_boundary(s, 4), 8);
        assert_eq!(next_word_boundary(s, 8), 12);
        assert_eq!(next_word_boundary(s, 12), 12);
        assert_eq!(next_word_boundary(s, 1), 4);
    }

    #[test]
    fn test_word_boundary_with_punctuation() {
        let s = "call mom, today!";
        assert_eq!(next_word_boundary(s, 5), 10);
        assert_eq!(prev_word_boundary(s, 16), 10);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly", 7), "exactly");
        assert_eq!(truncate_to_width("a longer task", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
