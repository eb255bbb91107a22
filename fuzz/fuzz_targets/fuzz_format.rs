//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use card_input::format::{self, strip_whitespace};
use card_input::mask::mask_card_number;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = format::format_card_number_input(data);
    let _ = format::format_expiry_input(data);
    let _ = mask_card_number(data);

    // Formatting only moves whitespace and is idempotent
    let formatted = format::format_card_number(data);
    assert_eq!(strip_whitespace(&formatted), strip_whitespace(data));
    assert_eq!(format::format_card_number(&formatted), formatted);
});
