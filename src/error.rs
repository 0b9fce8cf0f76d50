//! Error types for strext.

use std::fmt;

/// Result type alias for strext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for strext operations.
#[derive(Debug)]
pub enum Error {
    /// Signed index does not address a grapheme of the text.
    IndexOutOfRange { index: isize, length: usize },
    /// Pattern rejected by the regex engine.
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    /// Padding string has no graphemes to repeat.
    EmptyPadding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => {
                write!(
                    f,
                    "index {index} out of range for text of {length} characters"
                )
            }
            Self::Pattern { pattern, source } => {
                write!(f, "invalid pattern {pattern:?}: {source}")
            }
            Self::EmptyPadding => write!(f, "padding string is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
