//! Grapheme cluster iteration and counting.

use unicode_segmentation::UnicodeSegmentation;

/// Iterator over grapheme clusters in a string.
#[derive(Clone)]
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over extended grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl DoubleEndedIterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Number of user-perceived characters (extended grapheme clusters).
#[must_use]
pub fn length(s: &str) -> usize {
    // ASCII has no multi-byte or combining clusters except CRLF.
    if s.is_ascii() && !s.contains('\r') {
        return s.len();
    }
    graphemes(s).count()
}

/// Byte offset where grapheme `position` starts.
///
/// `position` is a grapheme index in `[0, length(s)]`; any value at or past
/// the end maps to `s.len()`.
#[must_use]
pub fn byte_offset(s: &str, position: usize) -> usize {
    grapheme_indices(s)
        .nth(position)
        .map_or(s.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_reverse() {
        let g: Vec<_> = graphemes("ab\u{301}c").rev().collect();
        assert_eq!(g, vec!["c", "b\u{301}", "a"]);
    }

    #[test]
    fn test_graphemes_clone_cycles() {
        let g: Vec<_> = graphemes("ab\u{301}").cycle().take(5).collect();
        assert_eq!(g, vec!["a", "b\u{301}", "a", "b\u{301}", "a"]);
    }

    #[test]
    fn test_length_counts_clusters() {
        assert_eq!(length(""), 0);
        assert_eq!(length("hello"), 5);
        // Family emoji (ZWJ sequence)
        assert_eq!(length("👨‍👩‍👧"), 1);
        // e + combining acute accent
        assert_eq!(length("e\u{0301}"), 1);
        // Regional indicator pair
        assert_eq!(length("🇺🇸🇫🇷"), 2);
    }

    #[test]
    fn test_length_crlf_is_one_cluster() {
        assert_eq!(length("a\r\nb"), 3);
        assert_eq!(length("a\nb"), 3);
    }

    #[test]
    fn test_byte_offset() {
        let s = "aé👍z";
        assert_eq!(byte_offset(s, 0), 0);
        assert_eq!(byte_offset(s, 1), 1);
        assert_eq!(byte_offset(s, 2), 3);
        assert_eq!(byte_offset(s, 3), 7);
        assert_eq!(byte_offset(s, 4), s.len());
        assert_eq!(byte_offset(s, 99), s.len());
    }
}
