//! Card brand identification.
//!
//! The sanitized number is tested against the [pattern table](crate::patterns)
//! in declaration order and the first anchored match names the brand. Numbers
//! that match no specific brand but look like a card (13-19 digits) are
//! reported as [`Brand::Other`].

use tracing::trace;

use crate::card::{Brand, CardBrand};
use crate::patterns::{card_patterns, other_card_pattern};
use crate::sanitize::{is_numeric_only, sanitize};

/// Identifies the brand of a raw card string.
///
/// Whitespace and hyphens are removed first. Returns `None` when the
/// remaining string is empty, contains anything but digits, or matches
/// neither a specific brand nor the generic 13-19 digit pattern.
///
/// # Example
///
/// ```
/// use card_identifier::{identify_card, Brand, CardBrand};
///
/// assert_eq!(identify_card("4532 0151 1283 0366"), Some(Brand::Card(CardBrand::Visa)));
/// assert_eq!(identify_card("378282246310005").unwrap().name(), "Amex");
/// assert_eq!(identify_card("9999999999999"), Some(Brand::Other));
/// assert_eq!(identify_card("invalid"), None);
/// ```
pub fn identify_card(input: &str) -> Option<Brand> {
    identify_digits(&sanitize(input))
}

/// Identifies the brand of an already sanitized string.
///
/// This is [`identify_card`] without the sanitizing step; a string that is
/// not purely digits still yields `None`.
pub fn identify_digits(clean: &str) -> Option<Brand> {
    if !is_numeric_only(clean) {
        return None;
    }

    if let Some(pattern) = card_patterns().iter().find(|p| p.is_match(clean)) {
        trace!(brand = pattern.key(), digits = clean.len(), "matched brand pattern");
        return Some(Brand::Card(pattern.brand()));
    }

    if other_card_pattern().is_match(clean) {
        trace!(digits = clean.len(), "matched generic card pattern");
        return Some(Brand::Other);
    }

    trace!(digits = clean.len(), "no brand pattern matched");
    None
}

/// Lists every brand whose pattern matches the raw card string.
///
/// Brands are returned in table order, so the first element (if any) is the
/// one [`identify_card`] picks. Useful for inspecting overlapping ranges.
///
/// # Example
///
/// ```
/// use card_identifier::detect::matching_brands;
/// use card_identifier::CardBrand;
///
/// // A 14-digit `36` number fits both Diners and Voyager; Diners wins.
/// assert_eq!(
///     matching_brands("36148906777300"),
///     vec![CardBrand::Diners, CardBrand::Voyager]
/// );
/// ```
pub fn matching_brands(input: &str) -> Vec<CardBrand> {
    let clean = sanitize(input);
    if !is_numeric_only(&clean) {
        return Vec::new();
    }

    card_patterns()
        .iter()
        .filter(|p| p.is_match(&clean))
        .map(|p| p.brand())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(input: &str) -> Option<&'static str> {
        identify_card(input).map(|b| b.name())
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(name("4532015112830366"), Some("Visa"));
        assert_eq!(name("5425233010103442"), Some("Mastercard"));
        assert_eq!(name("378282246310005"), Some("Amex"));
        assert_eq!(name("6011111111111117"), Some("Discover"));
        assert_eq!(name("30569309025904"), Some("Diners"));
        assert_eq!(name("3530111333300000"), Some("Jcb"));
        assert_eq!(name("5078601721051171"), Some("Aura"));
        assert_eq!(name("6062820000000000"), Some("Hipercard"));
    }

    #[test]
    fn test_formatted_input() {
        assert_eq!(name("4532 0151 1283 0366"), Some("Visa"));
        assert_eq!(name("4532-0151-1283-0366"), Some("Visa"));
        assert_eq!(name("3782 822463 10005"), Some("Amex"));
    }

    #[test]
    fn test_remaining_brands() {
        assert_eq!(name("8690000000000000"), Some("Voyager"));
        assert_eq!(name("201412345678900"), Some("Enroute"));
        assert_eq!(name("2149000000000000"), Some("Enroute"));
        assert_eq!(name("6200000000000000"), Some("Unionpay"));
        assert_eq!(name("2200000000000000"), Some("Mir"));
        assert_eq!(name("6304000000000"), Some("Maestro"));
        assert_eq!(name("6363700000000000"), Some("Elo"));
        assert_eq!(name("2221000000000000"), Some("Mastercard"));
    }

    #[test]
    fn test_order_decides_overlaps() {
        // Diners precedes Voyager for 14-digit `36` numbers.
        assert_eq!(name("36148906777300"), Some("Diners"));
        // Aura precedes Maestro for 16-digit `5018` numbers.
        assert_eq!(name("5018000000000000"), Some("Aura"));
        assert_eq!(name("501800000000"), Some("Maestro"));
        // Discover precedes Elo for 16-digit `65` numbers.
        assert_eq!(name("6500000000000000"), Some("Discover"));
        assert_eq!(name("650000000000000"), Some("Elo"));
    }

    #[test]
    fn test_elo_seven_branch() {
        // Suspected defect kept for compatibility: bare "71".."76" are Elo,
        // while real-length numbers starting 71-76 are not.
        assert_eq!(name("71"), Some("Elo"));
        assert_eq!(name("7-6"), Some("Elo"));
        assert_eq!(name("77"), None);
        assert_eq!(name("7100000000000000"), Some("Other"));
    }

    #[test]
    fn test_other_fallback() {
        assert_eq!(identify_card("9999999999999"), Some(Brand::Other));
        assert_eq!(identify_card("9999999999999999999"), Some(Brand::Other));
        assert_eq!(identify_card("999999999999"), None);
        assert_eq!(identify_card("99999999999999999999"), None);
    }

    #[test]
    fn test_not_identified() {
        assert_eq!(identify_card(""), None);
        assert_eq!(identify_card("   "), None);
        assert_eq!(identify_card("invalid"), None);
        assert_eq!(identify_card("4532015112830366x"), None);
        assert_eq!(identify_card("4532.0151.1283.0366"), None);
    }

    #[test]
    fn test_identify_digits_skips_sanitizing() {
        assert_eq!(
            identify_digits("4532015112830366"),
            Some(Brand::Card(CardBrand::Visa))
        );
        assert_eq!(identify_digits("4532 0151 1283 0366"), None);
    }

    #[test]
    fn test_matching_brands() {
        assert_eq!(
            matching_brands("5018000000000000"),
            vec![CardBrand::Aura, CardBrand::Maestro]
        );
        assert!(matching_brands("9999999999999").is_empty());
        assert!(matching_brands("abc").is_empty());
    }
}
