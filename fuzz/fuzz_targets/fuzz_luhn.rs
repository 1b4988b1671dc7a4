//! Fuzz target for the Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_identifier::{luhn, validate_card};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(luhn::passes(&digits), validate_card(&text), "string/digit mismatch");

    let check = luhn::generate_check_digit(&digits);
    assert!(check <= 9, "Check digit should be 0-9");

    let mut with_check = digits;
    with_check.push(check);
    assert!(luhn::passes(&with_check), "Adding check digit should make valid");
});
