//! Account storage for the savings service.
//!
//! This crate provides:
//! - An in-memory repository keyed by account number
//! - A failure-injection decorator for any repository

pub mod repositories;

pub use repositories::{FlakyAccountRepository, InMemoryAccountRepository, SeedError};
