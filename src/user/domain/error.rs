//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The passport number does not follow the `SSSS NNNNNN` format.
    #[error("invalid passport number '{0}', expected 'SSSS NNNNNN'")]
    InvalidPassportNumber(String),

    /// A required profile field is blank after trimming.
    #[error("user field '{0}' must not be empty")]
    EmptyProfileField(&'static str),
}
