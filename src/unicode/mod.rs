//! Unicode utilities: grapheme counting, offset resolution, normalization.

mod grapheme;
mod normalize;
mod position;
mod whitespace;

pub use grapheme::{GraphemeIterator, byte_offset, grapheme_indices, graphemes, length};
pub use normalize::{GraphemeSet, normalize_nfc};
pub use position::{resolve_index, resolve_position};
pub use whitespace::{is_whitespace_char, is_whitespace_grapheme};
