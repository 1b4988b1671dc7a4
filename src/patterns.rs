//! The brand pattern table.
//!
//! Each entry pairs a [`CardBrand`] with a regular expression that must match
//! the *whole* sanitized digit string. The table is ordered: identification
//! walks it top to bottom and the first match wins, so brands whose ranges
//! overlap (Diners and Voyager on `36`, Aura and Maestro on `5018`, Discover
//! and Elo on `65`) resolve by position rather than by specificity.
//!
//! The table is compiled once, on first use, and never mutated afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CardBrand;

/// A single row of the pattern table.
#[derive(Debug)]
pub struct BrandPattern {
    brand: CardBrand,
    regex: Regex,
}

impl BrandPattern {
    fn new(brand: CardBrand, pattern: &str) -> Self {
        // Patterns are compile-time constants covered by the tests below.
        let regex = Regex::new(pattern).expect("valid card pattern");
        Self { brand, regex }
    }

    /// The brand this row identifies.
    #[inline]
    pub fn brand(&self) -> CardBrand {
        self.brand
    }

    /// The lowercase table key, e.g. `"visa"`.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.brand.key()
    }

    /// The compiled expression.
    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The source text of the expression.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Tests a sanitized digit string against this row.
    #[inline]
    pub fn is_match(&self, digits: &str) -> bool {
        self.regex.is_match(digits)
    }
}

// Elo keeps its historical shape: the prefix branches carry no length
// constraint, and the final branch only accepts the two-digit strings 71-76.
const ELO_PATTERN: &str = concat!(
    r"^636(?:37|95|42)|^637|^63[7-8]|^639|^657|^658|^659|^6505|^6507|^6509",
    r"|^65[2-9]|^6594|^6596|^65[0-1]|^6550|^6551|^6552|^6553|^6554|^6555",
    r"|^6556|^6557|^6558|^6559|^65[0-9]|^7[1-6]$",
);

static CARD_PATTERNS: Lazy<[BrandPattern; 14]> = Lazy::new(|| {
    [
        BrandPattern::new(CardBrand::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
        BrandPattern::new(
            CardBrand::Mastercard,
            r"^(?:5[1-5][0-9]{14}|2(?:22[1-9][0-9]{12}|2[3-9][0-9]{13}|[3-6][0-9]{14}|7[01][0-9]{13}|720[0-9]{12}))$",
        ),
        BrandPattern::new(CardBrand::Amex, r"^3[47][0-9]{13}$"),
        BrandPattern::new(CardBrand::Diners, r"^3(?:0[0-5]|[68][0-9])[0-9]{11,13}$"),
        BrandPattern::new(CardBrand::Discover, r"^6(?:011|5[0-9]{2})[0-9]{12}$"),
        BrandPattern::new(CardBrand::Elo, ELO_PATTERN),
        BrandPattern::new(CardBrand::Hipercard, r"^(?:606282[0-9]{10}|3841[0-9]{12})$"),
        BrandPattern::new(CardBrand::Jcb, r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$"),
        BrandPattern::new(CardBrand::Aura, r"^50[0-9]{14}$"),
        BrandPattern::new(CardBrand::Voyager, r"^(?:36[0-9]{12}|869[0-9]{13})$"),
        BrandPattern::new(CardBrand::Enroute, r"^(?:2014[0-9]{11}|2149[0-9]{12,13})$"),
        BrandPattern::new(CardBrand::Unionpay, r"^62[0-9]{14,17}$"),
        BrandPattern::new(CardBrand::Mir, r"^220[0-4][0-9]{12}$"),
        BrandPattern::new(
            CardBrand::Maestro,
            r"^(?:5018|5020|5038|5893|6304|6759|6761|6762|6763)[0-9]{8,15}$",
        ),
    ]
});

static OTHER_CARD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{13,19}$").expect("valid fallback pattern"));

/// Returns the ordered, read-only pattern table.
///
/// # Example
///
/// ```
/// use card_identifier::{card_patterns, CardBrand};
///
/// let table = card_patterns();
/// assert_eq!(table[0].brand(), CardBrand::Visa);
/// assert!(table[0].is_match("4532015112830366"));
/// ```
#[inline]
pub fn card_patterns() -> &'static [BrandPattern] {
    CARD_PATTERNS.as_slice()
}

/// Returns the pattern for a single brand.
pub fn pattern_for(brand: CardBrand) -> &'static BrandPattern {
    // Table rows follow the declaration order of `CardBrand`.
    &CARD_PATTERNS[brand as usize]
}

/// Returns the generic fallback pattern: any 13-19 digit string.
#[inline]
pub fn other_card_pattern() -> &'static Regex {
    &OTHER_CARD_PATTERN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_brand_order() {
        let brands: Vec<CardBrand> = card_patterns().iter().map(|p| p.brand()).collect();
        assert_eq!(brands, CardBrand::ALL.to_vec());
    }

    #[test]
    fn test_pattern_for() {
        for brand in CardBrand::ALL {
            assert_eq!(pattern_for(brand).brand(), brand);
        }
        assert_eq!(pattern_for(CardBrand::Amex).as_str(), r"^3[47][0-9]{13}$");
    }

    #[test]
    fn test_patterns_are_anchored() {
        // Embedded in a longer string, no specific pattern may match.
        assert!(!pattern_for(CardBrand::Visa).is_match("04532015112830366"));
        assert!(!pattern_for(CardBrand::Visa).is_match("45320151128303660"));
        assert!(!pattern_for(CardBrand::Amex).is_match("3782822463100050"));
        assert!(!other_card_pattern().is_match("12345678901234567890"));
        assert!(!other_card_pattern().is_match("123456789012"));
    }

    #[test]
    fn test_visa_lengths() {
        let visa = pattern_for(CardBrand::Visa);
        assert!(visa.is_match("4222222222222"));
        assert!(visa.is_match("4111111111111111"));
        assert!(!visa.is_match("41111111111111"));
        assert!(!visa.is_match("4111111111111111111"));
    }

    #[test]
    fn test_mastercard_ranges() {
        let mc = pattern_for(CardBrand::Mastercard);
        assert!(mc.is_match("5100000000000000"));
        assert!(mc.is_match("5500000000000000"));
        assert!(!mc.is_match("5600000000000000"));
        assert!(mc.is_match("2221000000000000"));
        assert!(mc.is_match("2300000000000000"));
        assert!(mc.is_match("2699000000000000"));
        assert!(mc.is_match("2720990000000000"));
        assert!(!mc.is_match("2220990000000000"));
        assert!(!mc.is_match("2721000000000000"));
        assert!(!mc.is_match("2200000000000000"));
        assert!(!mc.is_match("555555555555444"));
    }

    #[test]
    fn test_diners_lengths() {
        let diners = pattern_for(CardBrand::Diners);
        assert!(diners.is_match("30000000000000"));
        assert!(diners.is_match("305000000000000"));
        assert!(diners.is_match("3800000000000000"));
        assert!(!diners.is_match("3060000000000000"));
        assert!(!diners.is_match("3000000000000"));
        assert!(!diners.is_match("36000000000000000"));
    }

    #[test]
    fn test_elo_prefix_branches_ignore_length() {
        let elo = pattern_for(CardBrand::Elo);
        assert!(elo.is_match("636370"));
        assert!(elo.is_match("637"));
        assert!(elo.is_match("650"));
        assert!(elo.is_match("6599999999999999999999"));
        assert!(!elo.is_match("65"));
        assert!(!elo.is_match("636000"));
    }

    #[test]
    fn test_elo_seven_branch_is_exact() {
        // Suspected defect kept for compatibility: only "71".."76" match.
        let elo = pattern_for(CardBrand::Elo);
        for s in ["71", "72", "73", "74", "75", "76"] {
            assert!(elo.is_match(s), "{} should match the 7x branch", s);
        }
        assert!(!elo.is_match("70"));
        assert!(!elo.is_match("77"));
        assert!(!elo.is_match("710"));
        assert!(!elo.is_match("7100000000000000"));
    }

    #[test]
    fn test_hipercard_jcb_aura() {
        assert!(pattern_for(CardBrand::Hipercard).is_match("6062820000000000"));
        assert!(pattern_for(CardBrand::Hipercard).is_match("3841000000000000"));
        assert!(pattern_for(CardBrand::Jcb).is_match("213100000000000"));
        assert!(pattern_for(CardBrand::Jcb).is_match("180000000000000"));
        assert!(pattern_for(CardBrand::Jcb).is_match("3530111333300000"));
        assert!(!pattern_for(CardBrand::Jcb).is_match("353011133330000"));
        assert!(pattern_for(CardBrand::Aura).is_match("5078601721051171"));
    }

    #[test]
    fn test_voyager_enroute() {
        let voyager = pattern_for(CardBrand::Voyager);
        assert!(voyager.is_match("36148906777300"));
        assert!(voyager.is_match("8690000000000000"));
        let enroute = pattern_for(CardBrand::Enroute);
        assert!(enroute.is_match("201412345678900"));
        assert!(enroute.is_match("2149000000000000"));
        assert!(enroute.is_match("21490000000000000"));
        assert!(!enroute.is_match("214900000000000"));
    }

    #[test]
    fn test_unionpay_mir_maestro() {
        let unionpay = pattern_for(CardBrand::Unionpay);
        assert!(unionpay.is_match("6200000000000000"));
        assert!(unionpay.is_match("6200000000000000000"));
        assert!(!unionpay.is_match("620000000000000"));

        let mir = pattern_for(CardBrand::Mir);
        assert!(mir.is_match("2204000000000000"));
        assert!(!mir.is_match("2205000000000000"));

        let maestro = pattern_for(CardBrand::Maestro);
        assert!(maestro.is_match("630400000000"));
        assert!(maestro.is_match("6759000000000000000"));
        assert!(!maestro.is_match("63040000000"));
        assert!(!maestro.is_match("67590000000000000000"));
    }
}
