//! Card expiry date validation.
//!
//! Only the `MM/YY` form typed into the checkout form is accepted. Years are
//! compared as two digits against the current year modulo 100: the century
//! is never disambiguated and there is no upper bound on how far ahead an
//! expiry may be.
//!
//! A card is usable through the end of its expiry month.
//!
//! # Example
//!
//! ```
//! use card_input::expiry::{check_expiry_date_on, ExpiryError};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//!
//! let expiry = check_expiry_date_on("03/25", today).unwrap();
//! assert_eq!(expiry.month(), 3);
//! assert_eq!(expiry.year(), 25);
//!
//! assert_eq!(
//!     check_expiry_date_on("02/25", today),
//!     Err(ExpiryError::Expired { month: 2, year: 25 })
//! );
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A parsed `MM/YY` expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpiryDate {
    // Field order gives chronological ordering within a century.
    year: u8,
    month: u8,
}

impl ExpiryDate {
    /// Creates an expiry date from a month (1-12) and a two-digit year.
    ///
    /// Returns `None` if the month or year is out of range.
    pub fn new(month: u8, year: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || year > 99 {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Returns true if the expiry month lies strictly before the month of
    /// `today`, comparing years modulo 100.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        let current_year = today.year().rem_euclid(100) as u8;
        let current_month = today.month() as u8;

        self.year < current_year || (self.year == current_year && self.month < current_month)
    }

    /// Same as [`ExpiryDate::is_expired_on`] with the local calendar date.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(today())
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input is not exactly two digits, a slash, and two digits.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
    /// The expiry month is already over.
    Expired {
        /// The expiry month.
        month: u8,
        /// The two-digit expiry year.
        year: u8,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid expiry format (expected MM/YY)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
            Self::Expired { month, year } => {
                write!(f, "card expired ({:02}/{:02})", month, year)
            }
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Parses a `MM/YY` string without checking it against the current date.
///
/// The input must be exactly five characters: two ASCII digits, `/`, two
/// ASCII digits. No surrounding whitespace is tolerated.
///
/// # Example
///
/// ```
/// use card_input::expiry::{parse_expiry, ExpiryError};
///
/// let expiry = parse_expiry("12/30").unwrap();
/// assert_eq!((expiry.month(), expiry.year()), (12, 30));
///
/// assert_eq!(parse_expiry("13/30"), Err(ExpiryError::InvalidMonth(13)));
/// assert_eq!(parse_expiry("12/2030"), Err(ExpiryError::InvalidFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let (month, year) = match input.as_bytes() {
        [m1, m2, b'/', y1, y2] if [m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) => {
            ((m1 - b'0') * 10 + (m2 - b'0'), (y1 - b'0') * 10 + (y2 - b'0'))
        }
        _ => return Err(ExpiryError::InvalidFormat),
    };

    ExpiryDate::new(month, year).ok_or(ExpiryError::InvalidMonth(month))
}

/// Parses an expiry and rejects it if it is before the month of `today`.
pub fn check_expiry_date_on(input: &str, today: NaiveDate) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_on(today) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Same as [`check_expiry_date_on`] with the local calendar date.
pub fn check_expiry_date(input: &str) -> Result<ExpiryDate, ExpiryError> {
    check_expiry_date_on(input, today())
}

/// Returns `true` if `input` is a well-formed, unexpired `MM/YY` as of
/// `today`.
///
/// # Example
///
/// ```
/// use card_input::validate_expiry_date_on;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert!(!validate_expiry_date_on("02/25", today));
/// assert!(validate_expiry_date_on("03/25", today));
/// assert!(!validate_expiry_date_on("00/26", today));
/// ```
#[inline]
pub fn validate_expiry_date_on(input: &str, today: NaiveDate) -> bool {
    check_expiry_date_on(input, today).is_ok()
}

/// Returns `true` if `input` is a well-formed, unexpired `MM/YY` as of the
/// local calendar date.
#[inline]
pub fn validate_expiry_date(input: &str) -> bool {
    check_expiry_date(input).is_ok()
}

/// The local calendar date.
fn today() -> NaiveDate {
    Local::now().date_naive()
}
