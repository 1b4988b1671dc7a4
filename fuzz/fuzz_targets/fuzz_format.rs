//! Fuzz target for card formatting.
//!
//! Tests that formatting never panics and never loses characters.

#![no_main]

use card_identifier::{format, sanitize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = format::format_card_number(data);
    let _ = format::format_with_separator(data, "");

    let dashed = format::format_with_separator(data, "-");
    let kept: String = dashed.chars().filter(|&c| c != '-').collect();
    let original: String = data.chars().filter(|&c| c != '-').collect();
    assert_eq!(kept, original, "formatting should only insert separators");

    let clean = sanitize::sanitize(data);
    let formatted = format::format_card_number(&clean);
    assert_eq!(sanitize::sanitize(&formatted), clean, "format roundtrip should preserve digits");
});
