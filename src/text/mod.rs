//! Grapheme-aware string operations.
//!
//! Every operation counts user-perceived characters (extended grapheme
//! clusters), never bytes or code points. Signed offsets go through
//! [`resolve_position`](crate::unicode::resolve_position): negative values
//! count back from the end and out-of-range values are clamped. The one
//! exception is [`char_at`], which reports an error instead of clamping.
//!
//! Key operations:
//!
//! - [`char_at`]: single character by signed index
//! - [`slice`]: substring between two signed offsets
//! - [`pad_left`] / [`pad_right`]: pad up to a target length
//! - [`trim`]: strip leading/trailing whitespace
//! - [`only_characters`]: keep characters from an allowed set
//!
//! # Examples
//!
//! ```
//! use strext_rust::text;
//!
//! assert_eq!(text::slice("hello", -3, None), "llo");
//! assert_eq!(text::slice("hello", 1, Some(-1)), "ell");
//! assert_eq!(text::char_at("hello", -1).unwrap(), "o");
//! assert!(text::char_at("hello", 10).is_err());
//! assert_eq!(text::pad_left("42", "0", 5), "00042");
//! assert_eq!(text::trim("  hi  "), "hi");
//! assert_eq!(text::only_characters("a1b2c3", "abc"), "abc");
//! ```

mod access;
mod filter;
mod pad;
mod slice;
mod trim;

pub use access::{char_at, char_string_at};
pub use filter::only_characters;
pub use pad::{pad_left, pad_right, try_pad_left, try_pad_right};
pub use slice::{slice, slice_from};
pub use trim::{is_trimmed, trim};
