//! Validated passport number scalar for the user domain.

use super::UserDomainError;
use std::fmt;

const SERIE_LEN: usize = 4;
const NUMBER_LEN: usize = 6;

/// Canonical passport number in `SSSS NNNNNN` format.
///
/// The serie is exactly four digits, the number exactly six, separated by a
/// single space. The canonical string is the uniqueness key across the user
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassportNumber(String);

impl PassportNumber {
    /// Creates a validated passport number.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidPassportNumber`] when the value does
    /// not match the `SSSS NNNNNN` format.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let is_valid = raw.split_once(' ').is_some_and(|(serie, number)| {
            is_digit_run(serie, SERIE_LEN) && is_digit_run(number, NUMBER_LEN)
        });

        if !is_valid {
            return Err(UserDomainError::InvalidPassportNumber(raw));
        }

        Ok(Self(raw))
    }

    /// Creates a passport number from separate serie and number segments.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidPassportNumber`] when the combined
    /// value does not match the `SSSS NNNNNN` format.
    pub fn from_parts(serie: &str, number: &str) -> Result<Self, UserDomainError> {
        Self::new(format!("{serie} {number}"))
    }

    /// Returns the four-digit serie segment.
    #[must_use]
    pub fn serie(&self) -> &str {
        self.0.split_once(' ').map_or("", |(serie, _)| serie)
    }

    /// Returns the six-digit number segment.
    #[must_use]
    pub fn number(&self) -> &str {
        self.0.split_once(' ').map_or("", |(_, number)| number)
    }

    /// Returns the canonical `SSSS NNNNNN` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PassportNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_digit_run(segment: &str, expected_len: usize) -> bool {
    segment.len() == expected_len && segment.chars().all(|ch| ch.is_ascii_digit())
}
