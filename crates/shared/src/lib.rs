//! Shared value objects, validation errors, and configuration for the savings service.
//!
//! This crate provides common types used across all other crates:
//! - The `AccountNumber` value object
//! - Amount and balance preconditions
//! - Validation error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::ValidationError;
pub use types::{AccountNumber, ensure_non_negative_balance, ensure_positive_amount};
