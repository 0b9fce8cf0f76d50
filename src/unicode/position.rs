//! Signed offset resolution.
//!
//! Every operation that accepts an index goes through here so the clamping
//! rules stay identical everywhere. Non-negative offsets count from the
//! start, negative offsets count back from the end.

/// Resolve a signed offset against a text of `len` graphemes.
///
/// The result is always in `[0, len]`:
/// - `offset >= 0` resolves to `min(offset, len)`.
/// - `offset < 0` resolves to `max(len + offset, 0)`.
#[must_use]
pub fn resolve_position(len: usize, offset: isize) -> usize {
    if offset >= 0 {
        offset.unsigned_abs().min(len)
    } else {
        len.saturating_sub(offset.unsigned_abs())
    }
}

/// Resolve a signed offset to the position of an actual grapheme.
///
/// Returns `None` when the offset falls outside `[-len, len - 1]`, so the
/// end-of-text sentinel is never returned.
#[must_use]
pub fn resolve_index(len: usize, offset: isize) -> Option<usize> {
    let magnitude = offset.unsigned_abs();
    if offset >= 0 {
        (magnitude < len).then_some(magnitude)
    } else {
        len.checked_sub(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_position_positive_clamps_to_end() {
        assert_eq!(resolve_position(5, 0), 0);
        assert_eq!(resolve_position(5, 3), 3);
        assert_eq!(resolve_position(5, 5), 5);
        assert_eq!(resolve_position(5, 6), 5);
        assert_eq!(resolve_position(5, isize::MAX), 5);
    }

    #[test]
    fn resolve_position_negative_counts_from_end() {
        assert_eq!(resolve_position(5, -1), 4);
        assert_eq!(resolve_position(5, -5), 0);
        assert_eq!(resolve_position(5, -6), 0);
        assert_eq!(resolve_position(5, isize::MIN), 0);
    }

    #[test]
    fn resolve_position_empty_text() {
        assert_eq!(resolve_position(0, 0), 0);
        assert_eq!(resolve_position(0, 3), 0);
        assert_eq!(resolve_position(0, -3), 0);
    }

    #[test]
    fn resolve_index_rejects_sentinel_and_overrun() {
        assert_eq!(resolve_index(5, 0), Some(0));
        assert_eq!(resolve_index(5, 4), Some(4));
        assert_eq!(resolve_index(5, 5), None);
        assert_eq!(resolve_index(5, -1), Some(4));
        assert_eq!(resolve_index(5, -5), Some(0));
        assert_eq!(resolve_index(5, -6), None);
        assert_eq!(resolve_index(0, 0), None);
        assert_eq!(resolve_index(0, -1), None);
        assert_eq!(resolve_index(5, isize::MIN), None);
    }

    #[test]
    fn resolve_index_agrees_with_position_in_range() {
        let len = 7;
        for offset in -7..7 {
            assert_eq!(
                resolve_index(len, offset),
                Some(resolve_position(len, offset))
            );
        }
    }
}
