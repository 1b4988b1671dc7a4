//! Card number generation for testing purposes.
//!
//! Generated numbers pass the Luhn check and identify as the requested brand.
//! They are not connected to real accounts and are meant for tests and demos.
//!
//! # Example
//!
//! ```
//! use card_identifier::generate::generate_card_deterministic;
//! use card_identifier::{identify_card, validate_card, Brand, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Hipercard);
//! assert_eq!(identify_card(&number), Some(Brand::Card(CardBrand::Hipercard)));
//! assert!(validate_card(&number));
//! ```

use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns a prefix that, padded with any digits to [`default_length`],
/// identifies as `brand` under the pattern table's ordering.
pub const fn prefix_for_brand(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "4",
        CardBrand::Mastercard => "51",
        CardBrand::Amex => "34",
        // `36` would also be a Voyager prefix; `300` is unambiguous.
        CardBrand::Diners => "300",
        CardBrand::Discover => "6011",
        CardBrand::Elo => "63637",
        CardBrand::Hipercard => "606282",
        CardBrand::Jcb => "3530",
        CardBrand::Aura => "50",
        // 14-digit `36` numbers are taken by Diners.
        CardBrand::Voyager => "869",
        CardBrand::Enroute => "2014",
        CardBrand::Unionpay => "62",
        CardBrand::Mir => "2200",
        // `5018` at 16 digits is taken by Aura.
        CardBrand::Maestro => "6304",
    }
}

/// Default length for generated numbers of each brand.
pub const fn default_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Amex | CardBrand::Enroute => 15,
        CardBrand::Diners => 14,
        _ => 16,
    }
}

/// Converts digit values into an ASCII string.
fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Parses the digits of a prefix, ignoring any other character.
fn prefix_digits(prefix: &str, length: usize) -> Vec<u8> {
    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    assert!(
        digits.len() < length,
        "Prefix length must be less than total length"
    );
    digits.reserve(length - digits.len());
    digits
}

/// Generates a valid card number deterministically (no randomness).
///
/// The prefix is padded with zeros and closed with the check digit. Available
/// without the `generate` feature.
///
/// # Example
///
/// ```
/// use card_identifier::generate::generate_card_deterministic;
/// use card_identifier::CardBrand;
///
/// assert_eq!(generate_card_deterministic(CardBrand::Visa), "4000000000000002");
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a valid card number deterministically with a custom prefix.
///
/// # Panics
///
/// Panics if the prefix has at least `length` digits.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    let mut digits = prefix_digits(prefix, length);
    digits.resize(length - 1, 0);

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits_to_string(&digits)
}

/// Generates a valid card number for the given brand using random digits.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use card_identifier::generate::generate_card;
/// use card_identifier::{get_card_info, CardBrand};
///
/// let info = get_card_info(&generate_card(CardBrand::Mir));
/// assert_eq!(info.brand(), "Mir");
/// assert!(info.is_valid());
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a valid card number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Panics
///
/// Panics if the prefix has at least `length` digits.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a valid card number using a provided RNG.
///
/// Useful for reproducible generation with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    let mut digits = prefix_digits(prefix, length);

    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }

    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);

    digits_to_string(&digits)
}

/// Generates multiple valid card numbers for the given brand.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_card(brand)).collect()
}
