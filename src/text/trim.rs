//! Whitespace trimming.

use crate::unicode::{grapheme_indices, is_whitespace_grapheme};

/// Strip leading and trailing whitespace graphemes.
///
/// Whitespace is the fixed class in [`is_whitespace_char`]: space
/// separators and tab, but not line breaks.
///
/// [`is_whitespace_char`]: crate::unicode::is_whitespace_char
#[must_use]
pub fn trim(text: &str) -> &str {
    let Some((start, _)) = grapheme_indices(text).find(|(_, g)| !is_whitespace_grapheme(g))
    else {
        return "";
    };
    let end = grapheme_indices(text)
        .rev()
        .find(|(_, g)| !is_whitespace_grapheme(g))
        .map_or(text.len(), |(offset, g)| offset + g.len());
    &text[start..end]
}

/// Check whether `text` has no leading or trailing whitespace.
#[must_use]
pub fn is_trimmed(text: &str) -> bool {
    trim(text).len() == text.len()
}
