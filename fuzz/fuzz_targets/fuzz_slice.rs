//! Fuzz target for signed indexing, slicing, padding and trimming.
//!
//! Arbitrary text and offsets must never panic, and results must stay
//! inside the input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strext_rust::{char_at, length, pad_left, pad_right, slice, trim};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    padding: &'a str,
    start: isize,
    end: Option<isize>,
    index: isize,
    target: u8,
}

fuzz_target!(|input: Input<'_>| {
    let len = length(input.text);

    let out = slice(input.text, input.start, input.end);
    assert!(input.text.contains(out));

    match char_at(input.text, input.index) {
        Ok(c) => assert!(!c.is_empty()),
        Err(_) => assert!(input.index >= len as isize || input.index < -(len as isize)),
    }

    let target = usize::from(input.target);
    assert!(pad_left(input.text, input.padding, target).ends_with(input.text));
    assert!(pad_right(input.text, input.padding, target).starts_with(input.text));

    let trimmed = trim(input.text);
    assert_eq!(trim(trimmed), trimmed);
});
