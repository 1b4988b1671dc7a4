//! Card information aggregation.
//!
//! [`get_card_info`] combines identification, checksum validation and
//! display formatting into one result, sanitizing the input only once.

use std::fmt;

use tracing::debug;

use crate::card::{Brand, UNKNOWN_BRAND_NAME};
use crate::detect::identify_digits;
use crate::format::format_card_number;
use crate::luhn::validate_card;
use crate::sanitize::sanitize;

/// Everything the crate can tell about a card string.
///
/// Created fresh by [`get_card_info`]; immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    brand: Option<Brand>,
    is_valid: bool,
    card_number: String,
    raw_number: String,
}

impl CardInfo {
    /// Returns the brand name, or `"Unknown"` when nothing was identified.
    #[inline]
    pub fn brand(&self) -> &'static str {
        self.brand.map_or(UNKNOWN_BRAND_NAME, |b| b.name())
    }

    /// Returns the identified brand, if any.
    #[inline]
    pub fn identified(&self) -> Option<Brand> {
        self.brand
    }

    /// Whether the number passes the Luhn checksum.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The sanitized number grouped in blocks of four for display.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The sanitized number (whitespace and hyphens removed).
    #[inline]
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.brand(),
            self.card_number,
            if self.is_valid { "valid" } else { "invalid" }
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardInfo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CardInfo", 4)?;
        state.serialize_field("brand", self.brand())?;
        state.serialize_field("isValid", &self.is_valid)?;
        state.serialize_field("cardNumber", &self.card_number)?;
        state.serialize_field("rawNumber", &self.raw_number)?;
        state.end()
    }
}

/// Identifies, validates and formats a raw card string.
///
/// Never fails: malformed input yields brand `"Unknown"` and `is_valid`
/// false (or true for input that sanitizes to nothing, see
/// [`validate_card`](crate::validate_card)).
///
/// # Example
///
/// ```
/// use card_identifier::get_card_info;
///
/// let info = get_card_info("4532-0151-1283-0366");
/// assert_eq!(info.brand(), "Visa");
/// assert!(info.is_valid());
/// assert_eq!(info.card_number(), "4532 0151 1283 0366");
/// assert_eq!(info.raw_number(), "4532015112830366");
/// ```
pub fn get_card_info(input: &str) -> CardInfo {
    let clean = sanitize(input);
    let brand = identify_digits(&clean);
    let is_valid = validate_card(&clean);
    let card_number = format_card_number(&clean);

    debug!(
        brand = brand.map_or(UNKNOWN_BRAND_NAME, |b| b.name()),
        is_valid,
        digits = clean.len(),
        "card info computed"
    );

    CardInfo {
        brand,
        is_valid,
        card_number,
        raw_number: clean,
    }
}
