//! Indexed character access.

use crate::error::{Error, Result};
use crate::unicode::{graphemes, length, resolve_index};

/// Get the character at a signed index.
///
/// Negative indices count back from the end (`-1` is the last character).
/// Unlike slicing, nothing is clamped: an index outside `[-len, len - 1]`
/// returns [`Error::IndexOutOfRange`].
///
/// The returned `&str` holds exactly one grapheme cluster.
pub fn char_at(text: &str, index: isize) -> Result<&str> {
    let len = length(text);
    let out_of_range = || Error::IndexOutOfRange { index, length: len };
    let position = resolve_index(len, index).ok_or_else(out_of_range)?;
    graphemes(text).nth(position).ok_or_else(out_of_range)
}

/// Owned variant of [`char_at`].
pub fn char_string_at(text: &str, index: isize) -> Result<String> {
    char_at(text, index).map(str::to_owned)
}
