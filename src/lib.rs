//! `strext` - grapheme-aware string primitives
//!
//! Padding, trimming, length, signed indexing, slicing, character-set
//! filtering and whole-string pattern matching, all counted in
//! user-perceived characters (extended grapheme clusters).
//!
//! ```
//! use strext_rust::{char_at, length, pad_left, slice};
//!
//! assert_eq!(length("e\u{301}👨‍👩‍👧"), 2);
//! assert_eq!(char_at("hello", -1).unwrap(), "o");
//! assert_eq!(slice("hello", -3, None), "llo");
//! assert_eq!(pad_left("42", "0", 5), "00042");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow pattern::PatternOptions etc
#![allow(clippy::missing_errors_doc)] // Error variants documented on the enum
#![allow(clippy::missing_panics_doc)] // Only the log-lock expect can panic
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Trait forwarding methods
#![allow(clippy::return_self_not_must_use)] // Builder setters

pub mod error;
pub mod ext;
pub mod log;
pub mod pattern;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use ext::StrExt;
pub use log::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use pattern::{Pattern, PatternOptions, matches};
pub use text::{
    char_at, char_string_at, is_trimmed, only_characters, pad_left, pad_right, slice, slice_from,
    trim, try_pad_left, try_pad_right,
};
pub use unicode::{length, resolve_index, resolve_position};
