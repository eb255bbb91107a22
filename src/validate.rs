//! Card number validation.
//!
//! A card number is accepted when, after removing whitespace, it consists
//! only of ASCII digits, has between [`MIN_CARD_DIGITS`] and
//! [`MAX_CARD_DIGITS`] of them, and passes the Luhn checksum. Prefix and
//! network are not considered here; see [`crate::network`].

use zeroize::Zeroizing;

use crate::error::ValidationError;
use crate::luhn;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Checks a card number and reports why it is rejected.
///
/// Whitespace anywhere in the input is ignored, so both the raw digits and
/// the formatted display string are accepted. Checks run in this order:
/// emptiness, characters, length, checksum.
///
/// # Example
///
/// ```
/// use card_input::{check_card_number, ValidationError};
///
/// assert!(check_card_number("4111 1111 1111 1111").is_ok());
/// assert_eq!(
///     check_card_number("4111111111111112"),
///     Err(ValidationError::InvalidChecksum)
/// );
/// ```
pub fn check_card_number(input: &str) -> Result<(), ValidationError> {
    let mut digits = Zeroizing::new([0u8; MAX_CARD_DIGITS]);
    let mut count = 0usize;

    for (position, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if !c.is_ascii_digit() {
            return Err(ValidationError::InvalidCharacter {
                position,
                character: c,
            });
        }
        // Keep counting past the cap so TooLong reports the real length.
        if count < MAX_CARD_DIGITS {
            digits[count] = (c as u8) - b'0';
        }
        count += 1;
    }

    if count == 0 {
        return Err(ValidationError::Empty);
    }

    if count < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length: count,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if count > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            length: count,
            maximum: MAX_CARD_DIGITS,
        });
    }

    if !luhn::validate(&digits[..count]) {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

/// Returns `true` if the card number passes [`check_card_number`].
///
/// # Example
///
/// ```
/// use card_input::validate_card_number;
///
/// assert!(validate_card_number("4111111111111111"));
/// assert!(!validate_card_number("4111111111111112"));
/// assert!(!validate_card_number("4111-1111-1111-1111"));
/// ```
#[inline]
pub fn validate_card_number(input: &str) -> bool {
    check_card_number(input).is_ok()
}
