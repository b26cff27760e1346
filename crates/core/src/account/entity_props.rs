//! Property-based tests for `SavingsAccount`.

use proptest::prelude::*;
use rust_decimal::Decimal;

use savings_shared::{AccountNumber, ValidationError};

use super::entity::SavingsAccount;
use super::error::AccountError;

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-positive amounts (-10,000.00 to 0.00).
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate starting balances (0.00 to 10,000.00).
fn balance() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

#[derive(Debug, Clone)]
enum Operation {
    Save(Decimal),
    Withdraw(Decimal),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        positive_amount().prop_map(Operation::Save),
        positive_amount().prop_map(Operation::Withdraw),
    ]
}

fn account_with(balance: Decimal) -> SavingsAccount {
    SavingsAccount::new(AccountNumber::parse("1-234-567-890").unwrap(), balance).unwrap()
}

proptest! {
    /// The balance stays non-negative after any sequence of operations.
    #[test]
    fn test_balance_never_negative(
        start in balance(),
        operations in prop::collection::vec(operation(), 0..50),
    ) {
        let mut account = account_with(start);
        for op in operations {
            let _ = match op {
                Operation::Save(amount) => account.save_money(amount),
                Operation::Withdraw(amount) => account.withdraw_money(amount),
            };
            prop_assert!(account.current_balance().balance() >= Decimal::ZERO);
        }
    }

    /// Withdrawing a non-positive amount always fails with InvalidAmount.
    #[test]
    fn test_withdraw_non_positive_is_invalid(start in balance(), amount in non_positive_amount()) {
        let mut account = account_with(start);
        let result = account.withdraw_money(amount);
        prop_assert!(matches!(
            result,
            Err(AccountError::Validation(ValidationError::InvalidAmount(a))) if a == amount
        ));
        prop_assert_eq!(account.current_balance().balance(), start);
    }

    /// Withdrawing more than the balance fails with the exact figures.
    #[test]
    fn test_overdraw_is_insufficient_funds(start in balance(), extra in positive_amount()) {
        let mut account = account_with(start);
        let amount = start + extra;
        let err = account.withdraw_money(amount).unwrap_err();
        let is_insufficient = matches!(
            &err,
            AccountError::InsufficientFunds { balance, withdrawal, .. }
                if *balance == start && *withdrawal == amount
        );
        prop_assert!(is_insufficient);
        prop_assert_eq!(err.shortfall(), Some(extra));
    }

    /// Saving x then withdrawing x restores the balance.
    #[test]
    fn test_save_then_withdraw_restores_balance(start in balance(), amount in positive_amount()) {
        let mut account = account_with(start);
        account.save_money(amount).unwrap();
        let after = account.withdraw_money(amount).unwrap();
        prop_assert_eq!(after.balance(), start);
    }
}
