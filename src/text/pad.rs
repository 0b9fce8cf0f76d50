//! Padding to a target length.
//!
//! Padding never truncates: a text already at or above the target comes
//! back unchanged. Otherwise the padding graphemes are cycled from the start
//! and cut to exactly the missing count.

use crate::error::{Error, Result};
use crate::log::{LogLevel, emit_log};
use crate::unicode::{graphemes, length};

/// Pad the left side of `text` with `padding` up to `target` characters.
///
/// An empty `padding` cannot fill anything; the text is returned unchanged
/// and a warning is logged. Use [`try_pad_left`] to get an error instead.
///
/// ```
/// use strext_rust::text::pad_left;
///
/// assert_eq!(pad_left("42", "0", 5), "00042");
/// assert_eq!(pad_left("7", "ab", 4), "aba7");
/// assert_eq!(pad_left("toolong", "0", 3), "toolong");
/// ```
#[must_use]
pub fn pad_left(text: &str, padding: &str, target: usize) -> String {
    try_pad_left(text, padding, target).unwrap_or_else(|_| warn_empty_padding(text))
}

/// Pad the right side of `text` with `padding` up to `target` characters.
///
/// Same empty-padding behavior as [`pad_left`].
///
/// ```
/// use strext_rust::text::pad_right;
///
/// assert_eq!(pad_right("42", "0", 5), "42000");
/// assert_eq!(pad_right("7", "ab", 4), "7aba");
/// ```
#[must_use]
pub fn pad_right(text: &str, padding: &str, target: usize) -> String {
    try_pad_right(text, padding, target).unwrap_or_else(|_| warn_empty_padding(text))
}

/// Like [`pad_left`], but fails with [`Error::EmptyPadding`] when padding
/// would be needed and `padding` is empty.
pub fn try_pad_left(text: &str, padding: &str, target: usize) -> Result<String> {
    let Some(deficit) = deficit(text, target) else {
        return Ok(text.to_owned());
    };
    let mut out = fill(padding, deficit, text.len())?;
    out.push_str(text);
    Ok(out)
}

/// Like [`pad_right`], but fails with [`Error::EmptyPadding`] when padding
/// would be needed and `padding` is empty.
pub fn try_pad_right(text: &str, padding: &str, target: usize) -> Result<String> {
    let Some(deficit) = deficit(text, target) else {
        return Ok(text.to_owned());
    };
    let fill = fill(padding, deficit, text.len())?;
    let mut out = String::with_capacity(text.len() + fill.len());
    out.push_str(text);
    out.push_str(&fill);
    Ok(out)
}

/// Missing character count, or `None` when no padding is needed.
fn deficit(text: &str, target: usize) -> Option<usize> {
    target.checked_sub(length(text)).filter(|&n| n > 0)
}

/// Cycle the graphemes of `padding` until `count` have been emitted.
fn fill(padding: &str, count: usize, extra_capacity: usize) -> Result<String> {
    if padding.is_empty() {
        return Err(Error::EmptyPadding);
    }
    let mut out = String::with_capacity(
        padding
            .len()
            .saturating_mul(count)
            .saturating_add(extra_capacity),
    );
    for grapheme in graphemes(padding).cycle().take(count) {
        out.push_str(grapheme);
    }
    Ok(out)
}

fn warn_empty_padding(text: &str) -> String {
    emit_log(
        LogLevel::Warn,
        "pad called with empty padding string; text left unpadded",
    );
    text.to_owned()
}
