//! Fuzz target for card number validation.
//!
//! Tests that validation never panics and agrees with its boolean form.

#![no_main]

use card_input::{check_card_number, get_card_type, validate_card_number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let checked = check_card_number(data);
    assert_eq!(checked.is_ok(), validate_card_number(data));

    let _ = get_card_type(data);
});
