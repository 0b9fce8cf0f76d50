//! Substring extraction by signed grapheme offsets.

use crate::unicode::{byte_offset, length, resolve_position};

/// Extract the graphemes between `start` (inclusive) and `end` (exclusive).
///
/// Both bounds may be negative to count from the end. `end == None`, or any
/// `end` at or past the length, means "to the end of the text". Bounds are
/// clamped rather than rejected, and a start past the end yields `""`.
///
/// ```
/// use strext_rust::text::slice;
///
/// assert_eq!(slice("hello", 1, Some(-1)), "ell");
/// assert_eq!(slice("hello", -3, None), "llo");
/// assert_eq!(slice("hello", 4, Some(2)), "");
/// ```
#[must_use]
pub fn slice(text: &str, start: isize, end: Option<isize>) -> &str {
    let len = length(text);
    let start = resolve_position(len, start);
    // An end at or past the length resolves to `len`, same as `None`.
    let end = end.map_or(len, |end| resolve_position(len, end));

    if start >= end {
        return "";
    }

    let from = byte_offset(text, start);
    let to = if end == len {
        text.len()
    } else {
        byte_offset(text, end)
    };
    &text[from..to]
}

/// Extract everything from `start` to the end of the text.
#[must_use]
pub fn slice_from(text: &str, start: isize) -> &str {
    slice(text, start, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_text() {
        assert_eq!(slice("hello", 0, None), "hello");
        assert_eq!(slice("", 0, None), "");
        assert_eq!(slice_from("hello", 0), "hello");
    }

    #[test]
    fn negative_bounds() {
        assert_eq!(slice("hello", -3, None), "llo");
        assert_eq!(slice("hello", 1, Some(-1)), "ell");
        assert_eq!(slice("hello", -4, Some(-2)), "el");
        assert_eq!(slice_from("hello", -2), "lo");
    }

    #[test]
    fn out_of_range_bounds_clamp() {
        assert_eq!(slice("hello", -99, None), "hello");
        assert_eq!(slice("hello", 99, None), "");
        assert_eq!(slice("hello", 2, Some(99)), "llo");
        assert_eq!(slice("hello", 0, Some(5)), "hello");
        assert_eq!(slice("hello", 0, Some(-99)), "");
        assert_eq!(slice("hello", isize::MIN, Some(isize::MAX)), "hello");
    }

    #[test]
    fn crossed_bounds_are_empty() {
        assert_eq!(slice("hello", 3, Some(1)), "");
        assert_eq!(slice("hello", -1, Some(-2)), "");
        assert_eq!(slice("hello", 2, Some(2)), "");
    }

    #[test]
    fn respects_grapheme_boundaries() {
        let s = "ae\u{0301}👍🇺🇸z";
        assert_eq!(slice(s, 1, Some(3)), "e\u{0301}👍");
        assert_eq!(slice(s, -2, None), "🇺🇸z");
        assert_eq!(slice(s, 3, Some(-1)), "🇺🇸");
    }
}
