//! Core card types.
//!
//! This module provides the `CardBrand` enum naming every network in the
//! pattern table, and the `Brand` enum returned by identification, which adds
//! the generic `Other` outcome.

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;

/// Card networks known to the pattern table.
///
/// Variants are declared in table order; that order decides which brand wins
/// when several patterns match the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, length 14-16
    Diners,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// Elo - Brazilian payment system, various prefixes
    Elo,
    /// Hipercard - Brazilian payment system, Prefix 606282, 3841, length 16
    Hipercard,
    /// JCB - Prefix 2131, 1800, 35, length 15-16
    Jcb,
    /// Aura - Brazilian payment system, Prefix 50, length 16
    Aura,
    /// Voyager - Prefix 36 (14 digits), 869 (16 digits)
    Voyager,
    /// enRoute - Prefix 2014 (15 digits), 2149 (16-17 digits)
    Enroute,
    /// UnionPay - Prefix 62, length 16-19
    Unionpay,
    /// Mir - Russian payment system, Prefix 2200-2204, length 16
    Mir,
    /// Maestro - Fixed 4-digit prefixes, length 12-19
    Maestro,
}

impl CardBrand {
    /// Every brand, in pattern table order.
    pub const ALL: [CardBrand; 14] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Diners,
        Self::Discover,
        Self::Elo,
        Self::Hipercard,
        Self::Jcb,
        Self::Aura,
        Self::Voyager,
        Self::Enroute,
        Self::Unionpay,
        Self::Mir,
        Self::Maestro,
    ];

    /// Returns the lowercase identifier used as the pattern table key.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Diners => "diners",
            Self::Discover => "discover",
            Self::Elo => "elo",
            Self::Hipercard => "hipercard",
            Self::Jcb => "jcb",
            Self::Aura => "aura",
            Self::Voyager => "voyager",
            Self::Enroute => "enroute",
            Self::Unionpay => "unionpay",
            Self::Mir => "mir",
            Self::Maestro => "maestro",
        }
    }

    /// Returns the display name: the key with its first letter capitalized.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "Amex",
            Self::Diners => "Diners",
            Self::Discover => "Discover",
            Self::Elo => "Elo",
            Self::Hipercard => "Hipercard",
            Self::Jcb => "Jcb",
            Self::Aura => "Aura",
            Self::Voyager => "Voyager",
            Self::Enroute => "Enroute",
            Self::Unionpay => "Unionpay",
            Self::Mir => "Mir",
            Self::Maestro => "Maestro",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for CardBrand {
    type Err = CardError;

    /// Parses a brand key, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|brand| brand.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CardError::UnknownBrand(s.to_string()))
    }
}

/// Display name for numbers that fit the generic 13-19 digit pattern only.
pub const OTHER_BRAND_NAME: &str = "Other";

/// Display name used by [`CardInfo`](crate::CardInfo) when nothing matched.
pub const UNKNOWN_BRAND_NAME: &str = "Unknown";

/// Outcome of a successful brand identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    /// A specific network from the pattern table.
    Card(CardBrand),
    /// A plausible card number that matched no specific network.
    Other,
}

impl Brand {
    /// Returns the display name (`"Visa"`, `"Jcb"`, ..., or `"Other"`).
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Card(brand) => brand.name(),
            Self::Other => OTHER_BRAND_NAME,
        }
    }

    /// Returns the specific network, if any.
    #[inline]
    pub const fn card_brand(&self) -> Option<CardBrand> {
        match self {
            Self::Card(brand) => Some(*brand),
            Self::Other => None,
        }
    }
}

impl From<CardBrand> for Brand {
    fn from(brand: CardBrand) -> Self {
        Self::Card(brand)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Brand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl PartialEq<str> for Brand {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl PartialEq<&str> for Brand {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}
