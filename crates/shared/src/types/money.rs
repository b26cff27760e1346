//! Amount and balance preconditions.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts and balances are `rust_decimal::Decimal` end to end.

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

/// Checks that a deposit or withdrawal amount is strictly positive.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAmount` if `amount <= 0`.
pub fn ensure_positive_amount(amount: Decimal) -> ValidationResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(amount));
    }
    Ok(amount)
}

/// Checks that a balance is zero or positive.
///
/// # Errors
///
/// Returns `ValidationError::NegativeBalance` if `balance < 0`.
pub fn ensure_non_negative_balance(balance: Decimal) -> ValidationResult<Decimal> {
    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(ValidationError::NegativeBalance(balance));
    }
    Ok(balance)
}

/// Renders an amount with at least one fractional digit (`-100` as `-100.0`).
#[must_use]
pub fn display_amount(amount: &Decimal) -> String {
    let mut amount = *amount;
    if amount.scale() == 0 {
        amount.rescale(1);
    }
    amount.to_string()
}

/// Renders a dollar figure with exactly two fractional digits (`125` as `125.00`).
#[must_use]
pub fn display_dollars(amount: &Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
