//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character outside the allowed set.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The input has fewer digits than required.
    #[error("phone number must contain at least {min} digits")]
    TooFewDigits {
        /// Minimum number of digits.
        min: usize,
    },
    /// A `+` appeared somewhere other than the first position.
    #[error("'+' is only allowed as a leading character")]
    MisplacedPlus,
}

/// A phone number.
///
/// Accepts an optional leading `+`, digits, spaces, parentheses, and hyphens,
/// with at least [`Phone::MIN_DIGITS`] digits. The raw input is preserved
/// verbatim; lookups against stored users compare the raw string, so
/// `98765 43210` and `9876543210` are distinct identifiers.
///
/// ## Examples
///
/// ```
/// use secureview_core::Phone;
///
/// assert!(Phone::parse("9876543210").is_ok());
/// assert!(Phone::parse("+91 98765-43210").is_ok());
/// assert!(Phone::parse("(012) 345 6789").is_ok());
///
/// assert!(Phone::parse("12345").is_err());       // too few digits
/// assert!(Phone::parse("98765x43210").is_err()); // invalid character
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits in a phone number.
    pub const MIN_DIGITS: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters outside
    /// `+ 0-9 ( ) - space`, has a non-leading `+`, or has fewer than ten
    /// digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let mut digits = 0usize;
        for (i, c) in s.char_indices() {
            match c {
                '0'..='9' => digits += 1,
                '+' if i == 0 => {}
                '+' => return Err(PhoneError::MisplacedPlus),
                ' ' | '(' | ')' | '-' => {}
                other => return Err(PhoneError::InvalidCharacter(other)),
            }
        }

        if digits < Self::MIN_DIGITS {
            return Err(PhoneError::TooFewDigits {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
