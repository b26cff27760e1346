//! Savings accounts.
//!
//! This module implements:
//! - The `SavingsAccount` entity and its balance invariant
//! - Withdrawal/savings requests and balance snapshots
//! - The account error taxonomy
//! - The repository contract
//! - The account service (lookup, retry, error translation)

pub mod entity;
pub mod error;
pub mod repository;
pub mod service;
pub mod types;

#[cfg(test)]
mod entity_props;

pub use entity::SavingsAccount;
pub use error::AccountError;
pub use repository::{AccountRepository, SharedAccount};
pub use service::AccountService;
pub use types::{AccountBalance, SaveMoney, WithdrawMoney};
