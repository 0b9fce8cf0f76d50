//! Canonical-equivalence helpers.
//!
//! Two graphemes are the same character when they are canonically
//! equivalent: `"é"` (U+00E9) and `"e\u{301}"` compare equal.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

use crate::unicode::grapheme::graphemes;

/// Normalize `text` to NFC (canonical composition).
#[must_use]
pub fn normalize_nfc(text: &str) -> String {
    if unicode_normalization::is_nfc_quick(text.chars())
        == unicode_normalization::IsNormalized::Yes
    {
        return text.to_owned();
    }
    text.nfc().collect()
}

/// Set of graphemes keyed by their NFC form.
#[derive(Clone, Debug, Default)]
pub struct GraphemeSet {
    members: HashSet<String>,
}

impl GraphemeSet {
    /// Build a set from every grapheme of `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            members: graphemes(text).map(normalize_nfc).collect(),
        }
    }

    /// Whether a canonically equivalent grapheme is in the set.
    #[must_use]
    pub fn contains(&self, grapheme: &str) -> bool {
        self.members.contains(grapheme) || self.members.contains(&normalize_nfc(grapheme))
    }
}
