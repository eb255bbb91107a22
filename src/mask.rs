//! Card number masking for logs and `Debug` output.
//!
//! Only the last four digits are ever revealed. Numbers with four digits or
//! fewer are masked completely, since they are partial input and the last
//! four would be the whole thing.

use crate::format::format_card_number;

/// Masks a card number, keeping the last four digits and the display
/// grouping.
///
/// Non-digit characters are dropped before masking.
///
/// # Example
///
/// ```
/// use card_input::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4111 1111 1111 1111"), "**** **** **** 1111");
/// assert_eq!(mask_card_number("378282246310005"), "**** **** ***0 005");
/// assert_eq!(mask_card_number("411"), "***");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked: String = std::iter::repeat('*')
        .take(len - 4)
        .chain(digits[len - 4..].iter().copied())
        .collect();

    format_card_number(&masked)
}

/// Returns the last four digits, or an empty string when there are fewer.
#[inline]
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
