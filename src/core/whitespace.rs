//! Unicode space cleanup

/// No-break space.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// Returns true for zero-width space, zero-width non-joiner, zero-width
/// joiner and the byte-order mark. These are dropped from output.
#[inline]
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

/// Replace every no-break space with `replacement` and remove zero-width
/// characters.
///
/// Ordinary spaces are left alone. Pass `" "` for the plain default, or
/// [`super::escape::NBSP`] when the output is LaTeX text.
pub fn normalize_whitespace(text: &str, replacement: &str) -> String {
    if !text.chars().any(|ch| ch == NO_BREAK_SPACE || is_zero_width(ch)) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == NO_BREAK_SPACE {
            out.push_str(replacement);
        } else if !is_zero_width(ch) {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(normalize_whitespace("a b  c", " "), "a b  c");
        assert_eq!(normalize_whitespace("", "~"), "");
    }

    #[test]
    fn test_nbsp_replaced() {
        assert_eq!(normalize_whitespace("10\u{00A0}km", " "), "10 km");
        assert_eq!(normalize_whitespace("10\u{00A0}km", "~"), "10~km");
    }

    #[test]
    fn test_zero_width_removed() {
        let input = "a\u{200B}b\u{200C}c\u{200D}d\u{FEFF}e";
        assert_eq!(normalize_whitespace(input, "~"), "abcde");
    }

    #[test]
    fn test_other_spaces_kept() {
        // narrow no-break and thin spaces are not touched here
        let input = "a\u{202F}b\u{2009}c";
        assert_eq!(normalize_whitespace(input, "~"), input);
    }
}
