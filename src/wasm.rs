//! WebAssembly bindings for the browser checkout form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, {
//!     formatCardNumberInput, validateCardNumber, validateExpiryDate, validateCVV, getCardType,
//! } from 'card_input';
//!
//! await init();
//!
//! // On every keystroke; undefined means "ignore the keystroke"
//! const next = formatCardNumberInput(event.target.value);
//! if (next !== undefined) setCardNumber(next);
//!
//! // Icon beside the field
//! const type = getCardType(cardNumber);  // "visa", "mastercard", ... or undefined
//!
//! // On submit
//! const ok = validateCardNumber(cardNumber) && validateExpiryDate(expiry) && validateCVV(cvv);
//! ```

#![cfg(feature = "wasm")]

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

/// Outcome of a `check*` call, returned to JavaScript.
#[wasm_bindgen]
pub struct CheckResult {
    valid: bool,
    error: Option<String>,
}

#[wasm_bindgen]
impl CheckResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for CheckResult {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Regroups a card number into runs of four.
///
/// # Example
/// ```javascript
/// formatCardNumber("4111111111111111")  // "4111 1111 1111 1111"
/// ```
#[wasm_bindgen(js_name = formatCardNumber)]
pub fn format_card_number(raw: &str) -> String {
    crate::format::format_card_number(raw)
}

/// Formats a card number keystroke; `undefined` past 16 digits.
#[wasm_bindgen(js_name = formatCardNumberInput)]
pub fn format_card_number_input(raw: &str) -> Option<String> {
    crate::format::format_card_number_input(raw)
}

/// Formats an expiry keystroke as `MM/YY`; `undefined` when too long.
#[wasm_bindgen(js_name = formatExpiryInput)]
pub fn format_expiry_input(raw: &str) -> Option<String> {
    crate::format::format_expiry_input(raw)
}

/// Formats a CVV keystroke; `undefined` past 4 digits.
#[wasm_bindgen(js_name = formatCvvInput)]
pub fn format_cvv_input(raw: &str) -> Option<String> {
    crate::format::format_cvv_input(raw)
}

/// Luhn and length check of a card number.
#[wasm_bindgen(js_name = validateCardNumber)]
pub fn validate_card_number(card_number: &str) -> bool {
    crate::validate_card_number(card_number)
}

/// Like `validateCardNumber`, with the reason on failure.
#[wasm_bindgen(js_name = checkCardNumber)]
pub fn check_card_number(card_number: &str) -> CheckResult {
    crate::check_card_number(card_number).into()
}

/// Validates `MM/YY` against the browser's local date.
#[wasm_bindgen(js_name = validateExpiryDate)]
pub fn validate_expiry_date(expiry: &str) -> bool {
    browser_today().is_some_and(|today| crate::validate_expiry_date_on(expiry, today))
}

/// Like `validateExpiryDate`, with the reason on failure.
#[wasm_bindgen(js_name = checkExpiryDate)]
pub fn check_expiry_date(expiry: &str) -> CheckResult {
    match browser_today() {
        Some(today) => crate::expiry::check_expiry_date_on(expiry, today).into(),
        None => CheckResult {
            valid: false,
            error: Some("browser date unavailable".to_string()),
        },
    }
}

/// Checks for exactly 3 or 4 digits.
#[wasm_bindgen(js_name = validateCVV)]
pub fn validate_cvv(cvv: &str) -> bool {
    crate::validate_cvv(cvv)
}

/// Like `validateCVV`, with the reason on failure.
#[wasm_bindgen(js_name = checkCVV)]
pub fn check_cvv(cvv: &str) -> CheckResult {
    crate::cvv::check_cvv(cvv).into()
}

/// Network identifier for the card icon, or `undefined`.
///
/// # Example
/// ```javascript
/// getCardType("3782 8224")  // "amex"
/// ```
#[wasm_bindgen(js_name = getCardType)]
pub fn get_card_type(card_number: &str) -> Option<String> {
    crate::get_card_type(card_number).map(|network| network.as_str().to_string())
}

/// Masks all but the last four digits.
#[wasm_bindgen(js_name = maskCardNumber)]
pub fn mask_card_number(card_number: &str) -> String {
    crate::mask::mask_card_number(card_number)
}

/// Today's date from the JS `Date` in the browser's time zone.
fn browser_today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    // getMonth() is 0-indexed
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}
