//! Error types for the fallible edges of the crate.
//!
//! Identification and checksum validation never fail: they answer with `None`
//! or `false`. These errors are reserved for strict parsing, where a caller
//! wants to know *why* an input was rejected.

use thiserror::Error;

/// Errors produced by strict card number parsing and brand lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The input contained no digits after removing whitespace and hyphens.
    #[error("card number is empty")]
    Empty,

    /// A character other than a digit, whitespace or hyphen was found.
    #[error(
        "invalid character '{}' at position {position} (only digits, spaces, and hyphens allowed)",
        .character.escape_default()
    )]
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// A brand key did not name any entry of the pattern table.
    #[error("unknown card brand '{0}'")]
    UnknownBrand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CardError::Empty.to_string(), "card number is empty");

        assert_eq!(
            CardError::InvalidCharacter {
                position: 5,
                character: 'x'
            }
            .to_string(),
            "invalid character 'x' at position 5 (only digits, spaces, and hyphens allowed)"
        );

        assert_eq!(
            CardError::UnknownBrand("amexx".into()).to_string(),
            "unknown card brand 'amexx'"
        );
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let err = CardError::InvalidCharacter {
            position: 0,
            character: '\u{7}',
        };
        assert!(err.to_string().contains("\\u{7}"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardError>();
    }
}
