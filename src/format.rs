//! Card number formatting for display.
//!
//! Digits are grouped in blocks of four, with the remainder at the end:
//!
//! - 16 digits: `XXXX XXXX XXXX XXXX`
//! - 15 digits: `XXXX XXXX XXXX XXX`
//! - 19 digits: `XXXX XXXX XXXX XXXX XXX`
//!
//! A separator is only inserted between a complete block and a following
//! digit, so there is never a trailing separator. Any non-digit character
//! passes through in place and starts a new block.
//!
//! # Example
//!
//! ```
//! use card_identifier::format::{format_card_number, format_with_separator};
//!
//! assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
//! assert_eq!(format_with_separator("378282246310005", "-"), "3782-8224-6310-005");
//! ```

/// Number of digits per display block.
pub const GROUP_SIZE: usize = 4;

/// Formats a sanitized card number in space-separated blocks of four.
///
/// # Example
///
/// ```
/// use card_identifier::format::format_card_number;
///
/// assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
/// assert_eq!(format_card_number("30569309025904"), "3056 9309 0259 04");
/// assert_eq!(format_card_number("4532"), "4532");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a sanitized card number with a custom block separator.
///
/// # Example
///
/// ```
/// use card_identifier::format::format_with_separator;
///
/// assert_eq!(format_with_separator("4532015112830366", "-"), "4532-0151-1283-0366");
/// assert_eq!(format_with_separator("4532015112830366", " - "), "4532 - 0151 - 1283 - 0366");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let mut result = String::with_capacity(input.len() + input.len() / GROUP_SIZE * separator.len());
    let mut run = 0usize;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);

        if !c.is_ascii_digit() {
            run = 0;
            continue;
        }

        run += 1;
        if run == GROUP_SIZE {
            run = 0;
            if chars.peek().is_some_and(|next| next.is_ascii_digit()) {
                result.push_str(separator);
            }
        }
    }

    result
}
