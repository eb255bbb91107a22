//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_input::cvv::validate_cvv;
use card_input::expiry::{parse_expiry, validate_expiry_date_on};
use card_input::format::{format_cvv_input, format_expiry_input, strip_whitespace};
use card_input::mask::mask_card_number;
use card_input::{
    format_card_number, format_card_number_input, get_card_type, luhn, validate_card_number,
    CardNetwork,
};
use chrono::NaiveDate;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a digit string of the given length range that passes Luhn.
fn luhn_valid_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    let (min, max) = (*range.start(), *range.end());
    digit_string_range(min - 1..=max - 1).prop_map(|body| {
        let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
        let check = luhn::generate_check_digit(&digits);
        format!("{}{}", body, check)
    })
}

/// Inserts random whitespace between the characters of `text`.
fn with_whitespace(text: String) -> impl Strategy<Value = String> {
    let len = text.chars().count();
    proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("  "), Just("\t")], len + 1)
        .prop_map(move |gaps| {
            let mut result = String::new();
            for (i, c) in text.chars().enumerate() {
                result.push_str(gaps[i]);
                result.push(c);
            }
            result.push_str(gaps[len]);
            result
        })
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// =============================================================================
// CARD NUMBER PROPERTIES
// =============================================================================

proptest! {
    /// Property: Luhn-valid digit strings of length 13-19 are accepted.
    #[test]
    fn luhn_valid_in_range_accepted(number in luhn_valid_range(13..=19)) {
        prop_assert!(validate_card_number(&number), "{} should be valid", number);
    }

    /// Property: Too short or too long is rejected whatever the checksum.
    #[test]
    fn out_of_range_lengths_rejected(
        short in luhn_valid_range(1..=12),
        long in luhn_valid_range(20..=30),
    ) {
        prop_assert!(!validate_card_number(&short));
        prop_assert!(!validate_card_number(&long));
    }

    /// Property: Changing one digit of a valid number breaks the checksum.
    #[test]
    fn single_digit_change_detected(
        number in luhn_valid_range(13..=19),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=9,
    ) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        let i = index.index(digits.len());
        digits[i] = (digits[i] + delta) % 10;
        let changed: String = digits.iter().map(|d| (b'0' + d) as char).collect();
        prop_assert!(!validate_card_number(&changed), "{} -> {}", number, changed);
    }

    /// Property: Whitespace never changes the verdict.
    #[test]
    fn whitespace_is_ignored(spaced in digit_string_range(10..=22).prop_flat_map(with_whitespace)) {
        let plain = strip_whitespace(&spaced);
        prop_assert_eq!(validate_card_number(&spaced), validate_card_number(&plain));
    }

    /// Property: Validation never panics on arbitrary input.
    #[test]
    fn validation_never_panics(input in "\\PC*") {
        let _ = validate_card_number(&input);
        let _ = get_card_type(&input);
        let _ = mask_card_number(&input);
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Formatting is idempotent.
    #[test]
    fn format_idempotent(input in "[0-9 ]{0,40}") {
        let once = format_card_number(&input);
        prop_assert_eq!(format_card_number(&once), once);
    }

    /// Property: Formatting only moves whitespace.
    #[test]
    fn format_preserves_content(input in "\\PC{0,40}") {
        prop_assert_eq!(
            strip_whitespace(&format_card_number(&input)),
            strip_whitespace(&input)
        );
    }

    /// Property: Every group but the last has exactly four characters.
    #[test]
    fn format_groups_of_four(digits in digit_string_range(1..=19)) {
        let formatted = format_card_number(&digits);
        let groups: Vec<&str> = formatted.split(' ').collect();
        let (last, full) = groups.split_last().unwrap();
        prop_assert!(full.iter().all(|g| g.len() == 4));
        prop_assert!((1..=4).contains(&last.len()));
    }

    /// Property: Keystroke input accepts exactly the numbers with at most 16 digits.
    #[test]
    fn card_input_cap(digits in digit_string_range(0..=20)) {
        let accepted = format_card_number_input(&digits);
        prop_assert_eq!(accepted.is_some(), digits.len() <= 16);
        if let Some(formatted) = accepted {
            prop_assert!(formatted.len() <= 19);
        }
    }

    /// Property: Expiry keystroke output is at most MM/YY and only digits around one slash.
    #[test]
    fn expiry_input_shape(input in "[0-9/ a-z]{0,8}") {
        if let Some(formatted) = format_expiry_input(&input) {
            prop_assert!(formatted.len() <= 5);
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == '/'));
            prop_assert!(formatted.matches('/').count() <= 1);
        }
    }

    /// Property: Accepted CVV keystrokes are at most four digits.
    #[test]
    fn cvv_input_shape(input in "\\PC{0,8}") {
        if let Some(formatted) = format_cvv_input(&input) {
            prop_assert!(formatted.len() <= 4);
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

// =============================================================================
// EXPIRY AND CVV PROPERTIES
// =============================================================================

proptest! {
    /// Property: Validity matches a direct two-digit year/month comparison.
    #[test]
    fn expiry_matches_two_digit_comparison(month in 0u8..=15, year in 0u8..=99, today in any_date()) {
        use chrono::Datelike;

        let input = format!("{:02}/{:02}", month, year);
        let current_year = (today.year() % 100) as u8;
        let current_month = today.month() as u8;
        let expected = (1..=12).contains(&month)
            && (year > current_year || (year == current_year && month >= current_month));

        prop_assert_eq!(validate_expiry_date_on(&input, today), expected);
    }

    /// Property: Parsing never panics.
    #[test]
    fn expiry_parse_never_panics(input in "\\PC{0,8}") {
        let _ = parse_expiry(&input);
    }

    /// Property: CVV is valid iff it is 3-4 ASCII digits.
    #[test]
    fn cvv_validity(input in "[0-9a ]{0,6}") {
        let expected = (3..=4).contains(&input.len()) && input.bytes().all(|b| b.is_ascii_digit());
        prop_assert_eq!(validate_cvv(&input), expected);
    }
}

// =============================================================================
// NETWORK PROPERTIES
// =============================================================================

proptest! {
    /// Property: Classification depends only on the first two digits.
    #[test]
    fn network_depends_on_prefix(prefix in digit_string(2), rest in digit_string_range(0..=17)) {
        let full = format!("{}{}", prefix, rest);
        prop_assert_eq!(get_card_type(&full), get_card_type(&prefix));
    }

    /// Property: Any number starting with 4 is Visa.
    #[test]
    fn four_is_visa(rest in digit_string_range(0..=18)) {
        prop_assert_eq!(get_card_type(&format!("4{}", rest)), Some(CardNetwork::Visa));
    }
}
