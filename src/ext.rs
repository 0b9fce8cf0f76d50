//! Method-call syntax for the free functions in [`text`](crate::text).
//!
//! ```
//! use strext_rust::StrExt;
//!
//! assert_eq!("héllo".grapheme_len(), 5);
//! assert_eq!("héllo".char_at(1).unwrap(), "é");
//! assert_eq!("hello".slice_graphemes(1, Some(-1)), "ell");
//! assert_eq!("42".pad_left("0", 5), "00042");
//! assert!("abc123".full_match("[a-z]+[0-9]+").unwrap());
//! ```

use crate::error::Result;
use crate::{pattern, text, unicode};

/// Grapheme-aware string operations as methods on `str`.
pub trait StrExt {
    /// Number of user-perceived characters.
    fn grapheme_len(&self) -> usize;

    /// Character at a signed index. See [`text::char_at`].
    fn char_at(&self, index: isize) -> Result<&str>;

    /// Owned character at a signed index.
    fn char_string_at(&self, index: isize) -> Result<String>;

    /// Substring between signed offsets. See [`text::slice`].
    fn slice_graphemes(&self, start: isize, end: Option<isize>) -> &str;

    /// Substring from a signed offset to the end. See [`text::slice_from`].
    fn slice_graphemes_from(&self, start: isize) -> &str;

    /// See [`text::pad_left`].
    fn pad_left(&self, padding: &str, target: usize) -> String;

    /// See [`text::pad_right`].
    fn pad_right(&self, padding: &str, target: usize) -> String;

    /// Named to avoid clashing with [`str::trim`], which uses a different
    /// whitespace class.
    fn trim_whitespace(&self) -> &str;

    /// Keep only characters found in `allowed`. See [`text::only_characters`].
    fn only_characters(&self, allowed: &str) -> String;

    /// Whole-string regex match. See [`pattern::matches`].
    fn full_match(&self, pattern: &str) -> Result<bool>;
}

impl StrExt for str {
    fn grapheme_len(&self) -> usize {
        unicode::length(self)
    }

    fn char_at(&self, index: isize) -> Result<&str> {
        text::char_at(self, index)
    }

    fn char_string_at(&self, index: isize) -> Result<String> {
        text::char_string_at(self, index)
    }

    fn slice_graphemes(&self, start: isize, end: Option<isize>) -> &str {
        text::slice(self, start, end)
    }

    fn slice_graphemes_from(&self, start: isize) -> &str {
        text::slice_from(self, start)
    }

    fn pad_left(&self, padding: &str, target: usize) -> String {
        text::pad_left(self, padding, target)
    }

    fn pad_right(&self, padding: &str, target: usize) -> String {
        text::pad_right(self, padding, target)
    }

    fn trim_whitespace(&self) -> &str {
        text::trim(self)
    }

    fn only_characters(&self, allowed: &str) -> String {
        text::only_characters(self, allowed)
    }

    fn full_match(&self, pattern: &str) -> Result<bool> {
        pattern::matches(self, pattern)
    }
}
