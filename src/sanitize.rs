//! Input sanitization and digit checks.
//!
//! Card numbers arrive in many shapes: `4532 0151 1283 0366`,
//! `4532-0151-1283-0366`, or with stray tabs and non-breaking spaces pasted
//! from a document. Everything downstream works on the sanitized form, where
//! whitespace and hyphens are gone and every other character is kept as-is.

use crate::error::CardError;

/// Returns true for the separator characters the sanitizer removes.
///
/// The whitespace set is the one of the ECMAScript `\s` class: ASCII tab,
/// line feed, vertical tab, form feed, carriage return and space, the Unicode
/// space separators, the line and paragraph separators, and the byte order
/// mark. It differs from [`char::is_whitespace`] in two places: U+0085 (NEL)
/// is kept, and U+FEFF is removed.
///
/// # Example
///
/// ```
/// use card_identifier::sanitize::is_separator;
///
/// assert!(is_separator('-'));
/// assert!(is_separator('\u{3000}'));
/// assert!(is_separator('\u{feff}'));
/// assert!(!is_separator('\u{85}'));
/// assert!(!is_separator('.'));
/// ```
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '-' | '\t'
            | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Removes all whitespace and hyphen characters from the input.
///
/// Letters and other punctuation are preserved unchanged. Whitespace means
/// the set accepted by [`is_separator`].
///
/// # Example
///
/// ```
/// use card_identifier::sanitize::sanitize;
///
/// assert_eq!(sanitize("4532 0151-1283 0366"), "4532015112830366");
/// assert_eq!(sanitize("4532.0151"), "4532.0151");
/// ```
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&c| !is_separator(c)).collect()
}

/// Returns true iff the string is non-empty and made only of ASCII digits.
///
/// # Example
///
/// ```
/// use card_identifier::sanitize::is_numeric_only;
///
/// assert!(is_numeric_only("4532015112830366"));
/// assert!(!is_numeric_only(""));
/// assert!(!is_numeric_only("4532x"));
/// ```
#[inline]
pub fn is_numeric_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Sanitizes the input and insists that what remains is a digit string.
///
/// Unlike [`sanitize`] followed by [`is_numeric_only`], this reports the
/// first offending character with its position in the *original* input.
///
/// # Errors
///
/// * [`CardError::InvalidCharacter`] for the first character that is neither
///   a digit nor a separator.
/// * [`CardError::Empty`] if no digits remain.
pub fn require_numeric(input: &str) -> Result<String, CardError> {
    let mut digits = String::with_capacity(input.len());

    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => digits.push(c),
            c if is_separator(c) => {}
            character => {
                return Err(CardError::InvalidCharacter {
                    position,
                    character,
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(CardError::Empty);
    }

    Ok(digits)
}

/// Converts an ASCII digit string into digit values (0-9).
///
/// Callers must have checked the string with [`is_numeric_only`].
#[inline]
pub(crate) fn to_digit_values(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}
