//! Common value types used across the application.

pub mod account_number;
pub mod money;

#[cfg(test)]
mod account_number_props;

pub use account_number::AccountNumber;
pub use money::{display_amount, display_dollars, ensure_non_negative_balance, ensure_positive_amount};
