//! # card_input
//!
//! Card input validation for a web checkout: formatting of the card number
//! as the user types, Luhn validation, `MM/YY` expiry and CVV checks, and
//! card network detection for the icon beside the number field.
//!
//! Everything here is a client-side gate. The payment provider is the
//! authority on whether a card is accepted.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{
//!     format_card_number, get_card_type, validate_card_number, validate_cvv, CardNetwork,
//! };
//!
//! let display = format_card_number("4111111111111111");
//! assert_eq!(display, "4111 1111 1111 1111");
//!
//! assert!(validate_card_number(&display));
//! assert!(!validate_card_number("4111111111111112"));
//!
//! assert_eq!(get_card_type(&display), Some(CardNetwork::Visa));
//! assert!(validate_cvv("123"));
//! ```
//!
//! ## Expiry Validation
//!
//! ```rust
//! use card_input::{validate_expiry_date, validate_expiry_date_on};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! assert!(validate_expiry_date_on("03/25", today));
//! assert!(!validate_expiry_date_on("02/25", today));
//!
//! // Against the local clock
//! assert!(!validate_expiry_date("13/99"));
//! ```
//!
//! ## Why Was It Rejected?
//!
//! Each boolean validator has a `check_*` counterpart returning the reason.
//!
//! ```rust
//! use card_input::{check_card_number, ValidationError};
//! use card_input::cvv::{check_cvv, CvvError};
//!
//! assert_eq!(
//!     check_card_number("4111 1111"),
//!     Err(ValidationError::TooShort { length: 8, minimum: 13 })
//! );
//! assert_eq!(check_cvv("12"), Err(CvvError::InvalidLength { length: 2 }));
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix |
//! |---------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55, 22-27 |
//! | American Express | 34, 37 |
//! | JCB | 35 |
//! | UnionPay | 62 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for [`CardNetwork`] |
//! | `cli` | `cardcheck` command-line tool |
//! | `server` | `cardcheck-server` REST API with Swagger UI |
//! | `wasm` | WebAssembly bindings for the browser form |
//!
//! ## Security
//!
//! - Digit buffers and [`form::CheckoutForm`] fields are zeroized on drop
//! - `Debug` on the form masks the card number and CVV
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cvv;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use cvv::validate_cvv;
pub use error::ValidationError;
pub use expiry::{validate_expiry_date, validate_expiry_date_on, ExpiryDate};
pub use form::{CheckoutForm, Field};
pub use format::{format_card_number, format_card_number_input};
pub use network::{get_card_type, CardNetwork};
pub use validate::{check_card_number, validate_card_number, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
