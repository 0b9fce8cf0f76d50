//! Fuzz target for full-string matching.
//!
//! Arbitrary patterns either compile or return an error; they never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strext_rust::{Pattern, PatternOptions};

fuzz_target!(|data: (&str, &str)| {
    let (pattern, text) = data;
    let options = PatternOptions::new().size_limit(1 << 20);
    if let Ok(compiled) = Pattern::with_options(pattern, options) {
        let _ = compiled.is_full_match(text);
        assert_eq!(compiled.as_str(), pattern);
    }
});
