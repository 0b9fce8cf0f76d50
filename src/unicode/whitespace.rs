//! The fixed whitespace class used by trimming.
//!
//! Space separators (general category Zs) plus CHARACTER TABULATION.
//! Line terminators are deliberately absent: `"\nx\n"` trims to itself.

/// Check whether `c` belongs to the whitespace class.
#[must_use]
pub const fn is_whitespace_char(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Check whether every code point of a grapheme is whitespace.
///
/// A space carrying a combining mark is not whitespace. Empty input is not
/// a grapheme and returns `false`.
#[must_use]
pub fn is_whitespace_grapheme(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(is_whitespace_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_separators_are_whitespace() {
        for c in [' ', '\t', '\u{00A0}', '\u{2003}', '\u{3000}', '\u{202F}'] {
            assert!(is_whitespace_char(c), "{c:?} should be whitespace");
        }
    }

    #[test]
    fn line_terminators_are_not_whitespace() {
        for c in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{2028}', '\u{2029}'] {
            assert!(!is_whitespace_char(c), "{c:?} should not be whitespace");
        }
    }

    #[test]
    fn zero_width_space_is_not_whitespace() {
        // U+200B is Cf, not Zs.
        assert!(!is_whitespace_char('\u{200B}'));
    }

    #[test]
    fn grapheme_with_combining_mark_is_kept() {
        assert!(is_whitespace_grapheme(" "));
        assert!(!is_whitespace_grapheme(" \u{0301}"));
        assert!(!is_whitespace_grapheme(""));
    }
}
