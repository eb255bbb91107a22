//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use card_input::expiry;
use card_input::format::format_expiry_input;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u16, u8)| {
    let (data, year, month) = input;

    let _ = expiry::parse_expiry(data);
    // Five typed characters are always shaped like MM/YY
    if let Some(typed) = format_expiry_input(data) {
        if typed.len() == 5 {
            assert_ne!(expiry::parse_expiry(&typed), Err(expiry::ExpiryError::InvalidFormat));
        }
    }

    let today = NaiveDate::from_ymd_opt(2000 + (year % 200) as i32, (month % 12) as u32 + 1, 1);
    if let Some(today) = today {
        let _ = expiry::check_expiry_date_on(data, today);
    }

    if let Ok(exp) = expiry::parse_expiry(data) {
        assert_eq!(exp.to_string(), data, "MM/YY should display as parsed");
    }
});
