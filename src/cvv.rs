//! CVV/CVC/CID validation.
//!
//! The checkout form does not tie the code length to the card network: any
//! three or four ASCII digits are accepted.
//!
//! # Example
//!
//! ```
//! use card_input::cvv::{check_cvv, CvvError};
//! use card_input::validate_cvv;
//!
//! assert!(validate_cvv("123"));
//! assert!(validate_cvv("1234"));
//! assert!(!validate_cvv("12"));
//!
//! assert_eq!(check_cvv("12345"), Err(CvvError::InvalidLength { length: 5 }));
//! ```

use std::fmt;

/// Shortest accepted CVV.
pub const MIN_CVV_DIGITS: usize = 3;

/// Longest accepted CVV.
pub const MAX_CVV_DIGITS: usize = 4;

/// Errors that can occur during CVV validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// The input is empty.
    Empty,
    /// The CVV contains a character that is not an ASCII digit.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Character index of the invalid character.
        position: usize,
    },
    /// The CVV is not 3 or 4 digits long.
    InvalidLength {
        /// Actual number of digits.
        length: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "CVV must be {} or {} digits, got {}",
                    MIN_CVV_DIGITS, MAX_CVV_DIGITS, length
                )
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Checks that `input` is exactly 3 or 4 ASCII digits.
pub fn check_cvv(input: &str) -> Result<(), CvvError> {
    if input.is_empty() {
        return Err(CvvError::Empty);
    }

    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(CvvError::InvalidCharacter {
            character,
            position,
        });
    }

    // All characters are ASCII, so byte length is the digit count.
    let length = input.len();
    if !(MIN_CVV_DIGITS..=MAX_CVV_DIGITS).contains(&length) {
        return Err(CvvError::InvalidLength { length });
    }

    Ok(())
}

/// Returns `true` if `input` is exactly 3 or 4 ASCII digits.
#[inline]
pub fn validate_cvv(input: &str) -> bool {
    check_cvv(input).is_ok()
}
