//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input.

#![no_main]

use card_input::cvv;
use card_input::format::format_cvv_input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    assert_eq!(cvv::check_cvv(data).is_ok(), cvv::validate_cvv(data));

    if let Some(formatted) = format_cvv_input(data) {
        assert!(formatted.len() <= 4);
        if formatted.len() >= 3 {
            assert!(cvv::validate_cvv(&formatted));
        }
    }
});
