//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used by most card numbering schemes to catch single-digit typos
//! and most adjacent transpositions.
//!
//! The string entry point, [`validate_card`], sanitizes its input first; the
//! slice functions work on digit values (0-9) that have already been parsed.

use crate::sanitize::{is_numeric_only, sanitize, to_digit_values};

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a raw card string using the Luhn algorithm.
///
/// Whitespace and hyphens are removed first. A string that still contains
/// anything other than digits is invalid. An input that sanitizes to nothing
/// runs the algorithm over zero digits, whose sum is 0, and is reported as
/// valid.
///
/// # Example
///
/// ```
/// use card_identifier::validate_card;
///
/// assert!(validate_card("4532 0151 1283 0366"));
/// assert!(!validate_card("1234567890123456"));
/// assert!(!validate_card("4532-0151-1283-036X"));
/// ```
pub fn validate_card(input: &str) -> bool {
    let clean = sanitize(input);

    if clean.is_empty() {
        return passes(&[]);
    }

    if !is_numeric_only(&clean) {
        return false;
    }

    passes(&to_digit_values(&clean))
}

/// Returns true if the digits satisfy the Luhn checksum.
///
/// The empty slice has a checksum of 0 and therefore passes.
///
/// # Example
///
/// ```
/// use card_identifier::luhn::passes;
///
/// assert!(passes(&[4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6]));
/// assert!(!passes(&[4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 7]));
/// ```
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) of a digit sequence.
///
/// Digits are visited right to left; the rightmost is taken as-is, the next
/// one doubled, and so on alternately.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass.
///
/// # Example
///
/// ```
/// use card_identifier::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(generate_check_digit(&partial), 6);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Appending a digit shifts every existing position one step left, so the
    // rightmost existing digit becomes a doubled one.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
