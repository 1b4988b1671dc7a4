//! # card_identifier
//!
//! Card brand identification and Luhn validation for Rust.
//!
//! ## Features
//!
//! - Brand identification for 14 networks from an ordered pattern table
//! - Generic "Other" fallback for plausible 13-19 digit numbers
//! - Luhn checksum validation
//! - Display formatting in blocks of four digits
//! - Batch and streaming helpers, optional rayon parallelism
//!
//! ## Quick Start
//!
//! ```rust
//! use card_identifier::{get_card_info, identify_card, validate_card, Brand, CardBrand};
//!
//! // Identify the network
//! assert_eq!(identify_card("4532 0151 1283 0366"), Some(Brand::Card(CardBrand::Visa)));
//! assert_eq!(identify_card("invalid"), None);
//!
//! // Check the Luhn checksum
//! assert!(validate_card("4532-0151-1283-0366"));
//! assert!(!validate_card("1234567890123456"));
//!
//! // Everything at once
//! let info = get_card_info("4532015112830366");
//! assert_eq!(info.brand(), "Visa");
//! assert!(info.is_valid());
//! assert_eq!(info.card_number(), "4532 0151 1283 0366");
//! assert_eq!(info.raw_number(), "4532015112830366");
//! ```
//!
//! ## Pattern Table
//!
//! ```rust
//! use card_identifier::card_patterns;
//!
//! let keys: Vec<_> = card_patterns().iter().map(|p| p.key()).collect();
//! assert_eq!(keys[..3], ["visa", "mastercard", "amex"]);
//! ```
//!
//! ## Supported Card Brands
//!
//! Checked in this order; the first match wins.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | Amex | 34, 37 | 15 |
//! | Diners | 300-305, 36, 38 | 14-16 |
//! | Discover | 6011, 65 | 16 |
//! | Elo | 63637, 63695, 63642, 637-639, 65x; exactly 71-76 | any |
//! | Hipercard | 606282, 3841 | 16 |
//! | Jcb | 2131, 1800, 35 | 15, 16 |
//! | Aura | 50 | 16 |
//! | Voyager | 36 (14), 869 (16) | 14, 16 |
//! | Enroute | 2014 (15), 2149 (16-17) | 15-17 |
//! | Unionpay | 62 | 16-19 |
//! | Mir | 2200-2204 | 16 |
//! | Maestro | 5018, 5020, 5038, 5893, 6304, 6759, 6761-6763 | 12-19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for results |
//! | `parallel` | Rayon-based batch processing |
//! | `generate` | Random test card generation |
//! | `cli` | Command-line tool `cardid` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod format;
pub mod generate;
pub mod info;
pub mod luhn;
pub mod patterns;
pub mod sanitize;
pub mod stream;

// Re-export main types at crate root
pub use batch::BatchIdentifier;
pub use card::{Brand, CardBrand, OTHER_BRAND_NAME, UNKNOWN_BRAND_NAME};
pub use detect::identify_card;
pub use error::CardError;
pub use info::{get_card_info, CardInfo};
pub use luhn::validate_card;
pub use patterns::{card_patterns, other_card_pattern, BrandPattern};

#[cfg(test)]
mod tests {
    use super::*;

    const VISA: &str = "4532015112830366";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";

    #[test]
    fn test_root_api() {
        assert_eq!(identify_card(VISA), Some(Brand::Card(CardBrand::Visa)));
        assert!(validate_card(VISA));
        assert_eq!(get_card_info(VISA).brand(), "Visa");
    }

    #[test]
    fn test_valid_documented_cards() {
        for (card, brand) in [
            (VISA, "Visa"),
            (AMEX, "Amex"),
            (DISCOVER, "Discover"),
            (DINERS, "Diners"),
            (JCB, "Jcb"),
        ] {
            let info = get_card_info(card);
            assert_eq!(info.brand(), brand);
            assert!(info.is_valid(), "{} should pass Luhn", card);
        }
    }

    #[test]
    fn test_pattern_table_is_exposed() {
        assert_eq!(card_patterns().len(), CardBrand::ALL.len());
        assert!(other_card_pattern().is_match("1234567890123"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardInfo>();
        assert_send_sync::<CardError>();
        assert_send_sync::<CardBrand>();
        assert_send_sync::<Brand>();
        assert_send_sync::<BrandPattern>();
        assert_send_sync::<BatchIdentifier>();
    }

    #[test]
    fn test_concurrent_reads_of_pattern_table() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| identify_card(AMEX)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(Brand::Card(CardBrand::Amex)));
        }
    }
}
