//! Core business logic for savings accounts.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and failure handling live here.
//!
//! # Modules
//!
//! - `account` - Savings account entity, requests, errors, repository contract, service
//! - `data_access` - Storage failures and transient/persistent classification
//! - `retry` - Bounded retry policy

pub mod account;
pub mod data_access;
pub mod retry;

pub use account::{
    AccountBalance, AccountError, AccountRepository, AccountService, SaveMoney, SavingsAccount,
    SharedAccount, WithdrawMoney,
};
pub use data_access::{DataAccessError, Transience, is_transient};
pub use retry::RetryPolicy;
