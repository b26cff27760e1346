//! Request and snapshot types for savings account operations.
//!
//! Requests are constructed already-valid: a `WithdrawMoney` or `SaveMoney`
//! always names an account and carries a strictly positive amount.

use rust_decimal::Decimal;
use serde::Serialize;

use savings_shared::error::ValidationResult;
use savings_shared::{AccountNumber, ensure_non_negative_balance, ensure_positive_amount};

/// The balance of an account at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    account_number: AccountNumber,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
}

impl AccountBalance {
    /// Creates a balance snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeBalance` if `balance < 0`.
    pub fn new(account_number: AccountNumber, balance: Decimal) -> ValidationResult<Self> {
        let balance = ensure_non_negative_balance(balance)?;
        Ok(Self {
            account_number,
            balance,
        })
    }

    /// Snapshot of a balance the caller already holds as non-negative.
    pub(crate) const fn from_checked(account_number: AccountNumber, balance: Decimal) -> Self {
        Self {
            account_number,
            balance,
        }
    }

    /// The account this snapshot belongs to.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// The balance at the time of the snapshot.
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }
}

/// Request to withdraw money from an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawMoney {
    account_number: AccountNumber,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl WithdrawMoney {
    /// Creates a withdrawal request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAmount` if `amount <= 0`.
    pub fn new(account_number: AccountNumber, amount: Decimal) -> ValidationResult<Self> {
        let amount = ensure_positive_amount(amount)?;
        Ok(Self {
            account_number,
            amount,
        })
    }

    /// The account to withdraw from.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// The amount to withdraw.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Request to save (deposit) money into an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMoney {
    account_number: AccountNumber,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl SaveMoney {
    /// Creates a savings request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAmount` if `amount <= 0`.
    pub fn new(account_number: AccountNumber, amount: Decimal) -> ValidationResult<Self> {
        let amount = ensure_positive_amount(amount)?;
        Ok(Self {
            account_number,
            amount,
        })
    }

    /// The account to save into.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// The amount to save.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}
