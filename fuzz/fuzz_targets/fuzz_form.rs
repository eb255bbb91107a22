//! Fuzz target for the checkout form.
//!
//! Feeds arbitrary keystroke sequences into the form and validates it.

#![no_main]

use card_input::{CheckoutForm, Field};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|inputs: Vec<(u8, &str)>| {
    let mut form = CheckoutForm::new();

    for (selector, value) in inputs {
        let field = Field::ALL[selector as usize % Field::ALL.len()];
        let before = form.value(field).to_string();
        if !form.handle_input(field, value) {
            assert_eq!(form.value(field), before, "rejected input must not change the field");
        }
    }

    if let Some(today) = NaiveDate::from_ymd_opt(2025, 3, 1) {
        let valid = form.validate_on(today);
        assert_eq!(valid, form.errors().is_empty());
    }
    let _ = format!("{:?}", form);
});
