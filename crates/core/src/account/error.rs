//! Savings account error types.
//!
//! Every failure a caller of the account service can observe is one of these
//! variants. Storage failures never escape raw: they arrive wrapped in
//! `OperationFailed` with the original error kept as the source.

use rust_decimal::Decimal;
use thiserror::Error;

use savings_shared::types::display_dollars;
use savings_shared::{AccountNumber, ValidationError};

use crate::data_access::{self, DataAccessError};

/// Errors that can occur during savings account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Malformed input: bad account number, non-positive amount.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No account exists for the number.
    #[error("The bank account number '{0}' does not exist!")]
    NotFound(AccountNumber),

    /// The balance does not cover the withdrawal.
    #[error(
        "Insufficient funds in bank account {account_number}: (balance ${}, withdrawal: ${}). The account is short ${}",
        display_dollars(.balance),
        display_dollars(.withdrawal),
        display_shortfall(.balance, .withdrawal)
    )]
    InsufficientFunds {
        /// The account that was short.
        account_number: AccountNumber,
        /// Balance at the time of the attempt.
        balance: Decimal,
        /// Requested withdrawal.
        withdrawal: Decimal,
    },

    /// The deposit would take the balance past the largest representable amount.
    #[error("The deposit would exceed the maximum balance of bank account {account_number}")]
    BalanceLimitExceeded {
        /// The account being credited.
        account_number: AccountNumber,
        /// Balance at the time of the attempt.
        balance: Decimal,
        /// Requested deposit.
        deposit: Decimal,
    },

    /// The account store failed; see the source for the cause.
    #[error("Failure to execute operation on account '{account_number}'")]
    OperationFailed {
        /// The account the operation targeted.
        account_number: AccountNumber,
        /// The storage failure.
        #[source]
        source: DataAccessError,
    },
}

fn display_shortfall(balance: &Decimal, withdrawal: &Decimal) -> String {
    display_dollars(&(*withdrawal - *balance))
}

impl AccountError {
    /// Create a not found error.
    #[must_use]
    pub const fn not_found(account_number: AccountNumber) -> Self {
        Self::NotFound(account_number)
    }

    /// Wrap a storage failure.
    #[must_use]
    pub const fn operation_failed(account_number: AccountNumber, source: DataAccessError) -> Self {
        Self::OperationFailed {
            account_number,
            source,
        }
    }

    /// The account this error concerns, if any.
    #[must_use]
    pub const fn account_number(&self) -> Option<&AccountNumber> {
        match self {
            Self::Validation(_) => None,
            Self::NotFound(account_number)
            | Self::InsufficientFunds { account_number, .. }
            | Self::BalanceLimitExceeded { account_number, .. }
            | Self::OperationFailed { account_number, .. } => Some(account_number),
        }
    }

    /// How much the withdrawal exceeded the balance, for insufficient funds.
    #[must_use]
    pub fn shortfall(&self) -> Option<Decimal> {
        match self {
            Self::InsufficientFunds {
                balance,
                withdrawal,
                ..
            } => Some(*withdrawal - *balance),
            _ => None,
        }
    }

    /// Returns true if a transient storage failure is anywhere in the cause chain.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        data_access::is_transient(self)
    }

    /// Returns the error code for API responses and log fields.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::BalanceLimitExceeded { .. } => "BALANCE_LIMIT_EXCEEDED",
            Self::OperationFailed { .. } => "ACCOUNT_OPERATION_FAILED",
        }
    }
}
