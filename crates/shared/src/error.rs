//! Validation errors raised while constructing value objects and requests.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::money::display_amount;

/// Result type alias using `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A precondition violated while building a value at the system boundary.
///
/// Values that made it past construction are valid; nothing downstream
/// re-checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No account number was supplied.
    #[error("The account number must not be null")]
    MissingAccountNumber,

    /// The account number does not match `D-DDD-DDD-DDD`.
    #[error("Invalid savings account number format: {0}")]
    InvalidFormat(String),

    /// A deposit or withdrawal amount was zero or negative.
    #[error("The amount must be > 0: {}", display_amount(.0))]
    InvalidAmount(Decimal),

    /// A balance was negative.
    #[error("The balance must be >= 0: {}", display_amount(.0))]
    NegativeBalance(Decimal),
}

impl ValidationError {
    /// Returns the error code for API responses and log fields.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAccountNumber | Self::InvalidFormat(_) => "INVALID_ACCOUNT_NUMBER",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NegativeBalance(_) => "NEGATIVE_BALANCE",
        }
    }
}
