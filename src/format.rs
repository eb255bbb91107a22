//! Keystroke formatting for the card fields of the checkout form.
//!
//! Each `format_*_input` function takes the new raw value of a field and
//! either returns the string to store or `None` when the keystroke should
//! be ignored because the field is full. The caller keeps its previous
//! value in that case.
//!
//! # Example
//!
//! ```
//! use card_input::format::{format_card_number_input, format_cvv_input, format_expiry_input};
//!
//! assert_eq!(format_card_number_input("41111111").as_deref(), Some("4111 1111"));
//! assert_eq!(format_card_number_input("41111111111111112"), None);
//!
//! assert_eq!(format_expiry_input("1225").as_deref(), Some("12/25"));
//! assert_eq!(format_cvv_input("12a3").as_deref(), Some("123"));
//! ```

/// Characters per group in a formatted card number.
pub const GROUP_SIZE: usize = 4;

/// Longest formatted card number accepted from the keyboard: 16 digits and
/// 3 separating spaces.
pub const MAX_FORMATTED_CARD_LEN: usize = 19;

/// Longest expiry input, `MM/YY`.
pub const MAX_EXPIRY_LEN: usize = 5;

/// Longest CVV input.
pub const MAX_CVV_LEN: usize = 4;

/// Regroups a card number into space-separated runs of four.
///
/// All whitespace is removed first. Other characters are kept and grouped
/// like digits. There is no trailing separator, and the transform is
/// idempotent.
///
/// # Example
///
/// ```
/// use card_input::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("4111 1111 1111 1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("41 1111"), "4111 11");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() + raw.len() / GROUP_SIZE);

    for (i, c) in raw.chars().filter(|c| !c.is_whitespace()).enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Formats a card number keystroke, capping input at 16 digits.
///
/// Returns `None` when the formatted value would be longer than
/// [`MAX_FORMATTED_CARD_LEN`] characters.
pub fn format_card_number_input(raw: &str) -> Option<String> {
    let formatted = format_card_number(raw);
    (formatted.chars().count() <= MAX_FORMATTED_CARD_LEN).then_some(formatted)
}

/// Formats an expiry keystroke as `MM/YY`.
///
/// Non-digits are dropped and a `/` is inserted after the month once a
/// third digit is typed. Deleting back past the slash therefore removes
/// it. Returns `None` when the result exceeds [`MAX_EXPIRY_LEN`].
///
/// # Example
///
/// ```
/// use card_input::format::format_expiry_input;
///
/// assert_eq!(format_expiry_input("1").as_deref(), Some("1"));
/// assert_eq!(format_expiry_input("12/").as_deref(), Some("12"));
/// assert_eq!(format_expiry_input("12/2").as_deref(), Some("12/2"));
/// assert_eq!(format_expiry_input("12/255"), None);
/// ```
pub fn format_expiry_input(raw: &str) -> Option<String> {
    let digits = strip_non_digits(raw);

    let formatted = if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    };

    (formatted.len() <= MAX_EXPIRY_LEN).then_some(formatted)
}

/// Formats a CVV keystroke: digits only, at most [`MAX_CVV_LEN`].
pub fn format_cvv_input(raw: &str) -> Option<String> {
    let digits = strip_non_digits(raw);
    (digits.len() <= MAX_CVV_LEN).then_some(digits)
}

/// Removes all whitespace, leaving every other character in place.
///
/// # Example
///
/// ```
/// use card_input::format::strip_whitespace;
///
/// assert_eq!(strip_whitespace("4111 1111\t1111 1111"), "4111111111111111");
/// ```
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keeps ASCII digits only.
fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
