//! Error types for card number validation.
//!
//! [`crate::validate_card_number`] only answers yes or no; these errors
//! back [`crate::check_card_number`] for callers that want to tell the user
//! what is wrong with the number they typed.

use std::fmt;

/// Reasons a card number can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty or contained only whitespace.
    Empty,

    /// A character other than an ASCII digit or whitespace was found.
    InvalidCharacter {
        /// Character index in the raw input (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits (13).
        minimum: usize,
    },

    /// The card number has too many digits.
    TooLong {
        /// The actual number of digits provided.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },

    /// The Luhn checksum validation failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("card number is empty"),
            Self::InvalidCharacter { position, character } => write!(
                f,
                "unexpected '{}' at position {}: card numbers may only contain digits and spaces",
                character.escape_default(),
                position
            ),
            Self::TooShort { length, minimum } => write!(
                f,
                "card number too short: got {} digits, minimum is {}",
                length, minimum
            ),
            Self::TooLong { length, maximum } => write!(
                f,
                "card number too long: got {} digits, maximum is {}",
                length, maximum
            ),
            Self::InvalidChecksum => f.write_str("card number failed the Luhn check"),
        }
    }
}

impl std::error::Error for ValidationError {}
