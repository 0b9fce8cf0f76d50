//! Character-set filtering.

use crate::unicode::{GraphemeSet, graphemes};

/// Keep only the characters of `text` that also appear in `allowed`.
///
/// Order is preserved and characters are copied exactly as they appear in
/// `text`. Membership uses canonical equivalence, so a precomposed `"é"` in
/// `allowed` also admits `"e\u{301}"`.
///
/// ```
/// use strext_rust::text::only_characters;
///
/// assert_eq!(only_characters("a1b2c3", "abc"), "abc");
/// assert_eq!(only_characters("(555) 123-4567", "0123456789"), "5551234567");
/// ```
#[must_use]
pub fn only_characters(text: &str, allowed: &str) -> String {
    if text.is_empty() || allowed.is_empty() {
        return String::new();
    }
    let allowed = GraphemeSet::from_text(allowed);
    graphemes(text).filter(|g| allowed.contains(g)).collect()
}
