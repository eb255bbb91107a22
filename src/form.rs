//! Checkout form state for the credit card payment step.
//!
//! [`CheckoutForm`] owns the four card fields. Every keystroke goes through
//! [`CheckoutForm::handle_input`], which applies the field's formatter and
//! drops keystrokes that would overflow it. [`CheckoutForm::validate`]
//! computes the per-field error messages shown under the inputs.
//!
//! # Example
//!
//! ```
//! use card_input::form::{CheckoutForm, Field};
//! use card_input::CardNetwork;
//! use chrono::NaiveDate;
//!
//! let mut form = CheckoutForm::new();
//! form.handle_input(Field::CardNumber, "4111111111111111");
//! form.handle_input(Field::ExpiryDate, "1230");
//! form.handle_input(Field::Cvv, "123");
//! form.handle_input(Field::NameOnCard, "Ada Lovelace");
//!
//! assert_eq!(form.card_number(), "4111 1111 1111 1111");
//! assert_eq!(form.expiry_date(), "12/30");
//! assert_eq!(form.card_network(), Some(CardNetwork::Visa));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! assert!(form.validate_on(today));
//! assert!(form.errors().is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cvv::validate_cvv;
use crate::expiry::validate_expiry_date_on;
use crate::format::{format_card_number_input, format_cvv_input, format_expiry_input};
use crate::mask::mask_card_number;
use crate::network::{get_card_type, CardNetwork};
use crate::validate::validate_card_number;

/// Input fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Card number, stored formatted in groups of four.
    CardNumber,
    /// Expiry date, stored as `MM/YY`.
    ExpiryDate,
    /// Card verification code.
    Cvv,
    /// Cardholder name, stored verbatim.
    NameOnCard,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 4] = [
        Self::CardNumber,
        Self::ExpiryDate,
        Self::Cvv,
        Self::NameOnCard,
    ];

    /// Field name used by the web form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvv => "cvv",
            Self::NameOnCard => "nameOnCard",
        }
    }

    /// Message shown when the field fails validation.
    pub const fn error_message(&self) -> &'static str {
        match self {
            Self::CardNumber => "Please enter a valid card number",
            Self::ExpiryDate => "Please enter a valid expiry date",
            Self::Cvv => "Please enter a valid CVV",
            Self::NameOnCard => "Please enter the name on card",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the card payment form.
///
/// Field contents are wiped from memory when the form is dropped. `Debug`
/// shows the card number masked and never shows the CVV.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct CheckoutForm {
    card_number: String,
    expiry_date: String,
    cvv: String,
    name_on_card: String,
    #[zeroize(skip)]
    errors: BTreeMap<Field, &'static str>,
}

impl CheckoutForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a new raw value typed into `field`.
    ///
    /// Returns `false` and leaves the form untouched when the formatter
    /// rejects the value. Otherwise stores the formatted value, clears any
    /// error on that field and returns `true`.
    pub fn handle_input(&mut self, field: Field, value: &str) -> bool {
        let formatted = match field {
            Field::CardNumber => format_card_number_input(value),
            Field::ExpiryDate => format_expiry_input(value),
            Field::Cvv => format_cvv_input(value),
            Field::NameOnCard => Some(value.to_string()),
        };

        let Some(mut formatted) = formatted else {
            return false;
        };

        let slot = self.slot_mut(field);
        std::mem::swap(slot, &mut formatted);
        // `formatted` now holds the previous value.
        formatted.zeroize();

        self.errors.remove(&field);
        true
    }

    /// Validates every field as of `today` and replaces the error map.
    ///
    /// Returns `true` if no field has an error.
    pub fn validate_on(&mut self, today: NaiveDate) -> bool {
        let mut errors = BTreeMap::new();

        // The stored number is grouped with spaces; the validator strips them.
        if !validate_card_number(&self.card_number) {
            errors.insert(Field::CardNumber, Field::CardNumber.error_message());
        }
        if !validate_expiry_date_on(&self.expiry_date, today) {
            errors.insert(Field::ExpiryDate, Field::ExpiryDate.error_message());
        }
        if !validate_cvv(&self.cvv) {
            errors.insert(Field::Cvv, Field::Cvv.error_message());
        }
        if self.name_on_card.trim().is_empty() {
            errors.insert(Field::NameOnCard, Field::NameOnCard.error_message());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Same as [`CheckoutForm::validate_on`] with the local calendar date.
    pub fn validate(&mut self) -> bool {
        self.validate_on(Local::now().date_naive())
    }

    /// Network of the current card number, for the icon next to the field.
    pub fn card_network(&self) -> Option<CardNetwork> {
        get_card_type(&self.card_number)
    }

    /// Current value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
            Field::NameOnCard => &self.name_on_card,
        }
    }

    /// The formatted card number.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The expiry date as typed, `MM/YY` once complete.
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// The CVV digits.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The cardholder name.
    pub fn name_on_card(&self) -> &str {
        &self.name_on_card
    }

    /// Errors from the last validation, minus fields edited since.
    pub fn errors(&self) -> &BTreeMap<Field, &'static str> {
        &self.errors
    }

    /// Error message for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvv => &mut self.cvv,
            Field::NameOnCard => &mut self.name_on_card,
        }
    }
}

impl fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"*".repeat(self.cvv.len()))
            .field("name_on_card", &self.name_on_card)
            .field("errors", &self.errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn filled_form() -> CheckoutForm {
        let mut form = CheckoutForm::new();
        assert!(form.handle_input(Field::CardNumber, "4111111111111111"));
        assert!(form.handle_input(Field::ExpiryDate, "0425"));
        assert!(form.handle_input(Field::Cvv, "123"));
        assert!(form.handle_input(Field::NameOnCard, "Jordan Lee"));
        form
    }

    #[test]
    fn test_valid_form() {
        let mut form = filled_form();
        assert!(form.validate_on(march_2025()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = CheckoutForm::new();
        assert!(!form.validate_on(march_2025()));
        assert_eq!(form.errors().len(), 4);
        for field in Field::ALL {
            assert_eq!(form.error(field), Some(field.error_message()));
        }
    }

    #[test]
    fn test_only_failing_fields_reported() {
        let mut form = filled_form();
        form.handle_input(Field::ExpiryDate, "0225");
        assert!(!form.validate_on(march_2025()));
        assert_eq!(form.errors().keys().copied().collect::<Vec<_>>(), vec![Field::ExpiryDate]);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = filled_form();
        form.handle_input(Field::NameOnCard, "   ");
        assert!(!form.validate_on(march_2025()));
        assert_eq!(form.error(Field::NameOnCard), Some("Please enter the name on card"));
    }

    #[test]
    fn test_rejected_keystroke_keeps_previous_value() {
        let mut form = filled_form();
        assert!(!form.handle_input(Field::CardNumber, "4111 1111 1111 1111 1"));
        assert_eq!(form.card_number(), "4111 1111 1111 1111");

        assert!(!form.handle_input(Field::ExpiryDate, "04/255"));
        assert_eq!(form.expiry_date(), "04/25");

        assert!(!form.handle_input(Field::Cvv, "12345"));
        assert_eq!(form.cvv(), "123");
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = CheckoutForm::new();
        form.validate_on(march_2025());
        assert!(form.error(Field::Cvv).is_some());

        form.handle_input(Field::Cvv, "1");
        assert_eq!(form.error(Field::Cvv), None);
        assert!(form.error(Field::CardNumber).is_some());
    }

    #[test]
    fn test_rejected_keystroke_keeps_error() {
        let mut form = CheckoutForm::new();
        form.validate_on(march_2025());
        assert!(!form.handle_input(Field::Cvv, "12345"));
        assert!(form.error(Field::Cvv).is_some());
    }

    #[test]
    fn test_card_network_follows_input() {
        let mut form = CheckoutForm::new();
        assert_eq!(form.card_network(), None);
        form.handle_input(Field::CardNumber, "37");
        assert_eq!(form.card_network(), Some(CardNetwork::Amex));
        form.handle_input(Field::CardNumber, "3");
        assert_eq!(form.card_network(), None);
    }

    #[test]
    fn test_debug_is_masked() {
        let form = filled_form();
        let debug = format!("{:?}", form);
        assert!(!debug.contains("4111 1111"));
        assert!(!debug.contains("123"));
        assert!(debug.contains("1111"));
    }

    #[test]
    fn test_value_accessor() {
        let form = filled_form();
        assert_eq!(form.value(Field::ExpiryDate), "04/25");
        assert_eq!(form.value(Field::NameOnCard), "Jordan Lee");
        assert_eq!(Field::NameOnCard.to_string(), "nameOnCard");
    }

    #[test]
    fn test_form_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CheckoutForm>();
    }
}
