//! The savings account entity.

use rust_decimal::Decimal;
use tracing::info;

use savings_shared::error::ValidationResult;
use savings_shared::{AccountNumber, ensure_non_negative_balance, ensure_positive_amount};

use super::error::AccountError;
use super::types::AccountBalance;

/// A savings account holding a non-negative balance.
///
/// The balance is never below zero, before or after any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    account_number: AccountNumber,
    balance: Decimal,
}

impl SavingsAccount {
    /// Creates an account with a starting balance.
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

    /// Opens an empty account.
    #[must_use]
    pub const fn open(account_number: AccountNumber) -> Self {
        Self {
            account_number,
            balance: Decimal::ZERO,
        }
    }

    /// The account number.
    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    /// Withdraws `amount`, reducing the balance by it.
    ///
    /// # Errors
    ///
    /// - `AccountError::Validation` if `amount <= 0`
    /// - `AccountError::InsufficientFunds` if the balance is smaller than `amount`
    pub fn withdraw_money(&mut self, amount: Decimal) -> Result<AccountBalance, AccountError> {
        let amount = ensure_positive_amount(amount)?;

        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                account_number: self.account_number.clone(),
                balance: self.balance,
                withdrawal: amount,
            });
        }
        self.balance -= amount;

        info!(
            account_number = %self.account_number,
            amount = %amount,
            balance = %self.balance,
            "Withdrew money from account"
        );
        Ok(self.current_balance())
    }

    /// Saves `amount`, increasing the balance by it.
    ///
    /// # Errors
    ///
    /// - `AccountError::Validation` if `amount <= 0`
    /// - `AccountError::BalanceLimitExceeded` if the new balance is not representable
    pub fn save_money(&mut self, amount: Decimal) -> Result<AccountBalance, AccountError> {
        let amount = ensure_positive_amount(amount)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            AccountError::BalanceLimitExceeded {
                account_number: self.account_number.clone(),
                balance: self.balance,
                deposit: amount,
            }
        })?;

        info!(
            account_number = %self.account_number,
            amount = %amount,
            balance = %self.balance,
            "Saved money into account"
        );
        Ok(self.current_balance())
    }

    /// The current balance.
    #[must_use]
    pub fn current_balance(&self) -> AccountBalance {
        AccountBalance::from_checked(self.account_number.clone(), self.balance)
    }
}
