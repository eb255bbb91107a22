//! Card network classification from the leading digits.
//!
//! The classification is cosmetic: it picks the icon shown next to the card
//! number field and has no bearing on validity. Rules are checked in a fixed
//! order and the first match wins.
//!
//! | Network | Prefix |
//! |---------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55, 22-27 |
//! | American Express | 34, 37 |
//! | JCB | 35 |
//! | UnionPay | 62 |

use std::fmt;
use std::str::FromStr;

/// Card networks recognised by [`get_card_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CardNetwork {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55 or 22-27
    Mastercard,
    /// American Express - prefix 34 or 37
    Amex,
    /// JCB - prefix 35
    Jcb,
    /// UnionPay - prefix 62
    UnionPay,
}

impl CardNetwork {
    /// Every network, in classification order.
    pub const ALL: [CardNetwork; 5] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Jcb,
        Self::UnionPay,
    ];

    /// Lowercase identifier used by the checkout form to pick an icon.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Jcb => "jcb",
            Self::UnionPay => "unionpay",
        }
    }

    /// Human-readable network name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown network identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetwork(pub String);

impl fmt::Display for UnknownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card network '{}'", self.0)
    }
}

impl std::error::Error for UnknownNetwork {}

impl FromStr for CardNetwork {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}

/// Classifies a prefix that has already had its whitespace removed.
///
/// Only the first two bytes matter.
///
/// # Example
///
/// ```
/// use card_input::network::{detect_network, CardNetwork};
///
/// assert_eq!(detect_network(b"4111"), Some(CardNetwork::Visa));
/// assert_eq!(detect_network(b"2720"), Some(CardNetwork::Mastercard));
/// assert_eq!(detect_network(b"3"), None);
/// ```
#[inline]
pub fn detect_network(cleaned: &[u8]) -> Option<CardNetwork> {
    match cleaned {
        [b'4', ..] => Some(CardNetwork::Visa),
        [b'5', b'1'..=b'5', ..] | [b'2', b'2'..=b'7', ..] => Some(CardNetwork::Mastercard),
        [b'3', b'4' | b'7', ..] => Some(CardNetwork::Amex),
        [b'3', b'5', ..] => Some(CardNetwork::Jcb),
        [b'6', b'2', ..] => Some(CardNetwork::UnionPay),
        _ => None,
    }
}

/// Classifies a raw or formatted card number by its prefix.
///
/// Whitespace is ignored; nothing else about the input is checked, so
/// partial numbers classify as soon as enough digits are typed.
///
/// # Example
///
/// ```
/// use card_input::{get_card_type, CardNetwork};
///
/// assert_eq!(get_card_type("4000 0000 0000 0000"), Some(CardNetwork::Visa));
/// assert_eq!(get_card_type("340000000000000"), Some(CardNetwork::Amex));
/// assert_eq!(get_card_type("9999999999999999"), None);
/// ```
pub fn get_card_type(raw: &str) -> Option<CardNetwork> {
    let prefix: String = raw.chars().filter(|c| !c.is_whitespace()).take(2).collect();
    detect_network(prefix.as_bytes())
}
