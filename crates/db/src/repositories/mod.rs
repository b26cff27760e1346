//! Repository implementations.
//!
//! Repositories implement `savings_core::AccountRepository`, hiding the
//! storage details from the rest of the application.

pub mod account;
pub mod flaky;

pub use account::{InMemoryAccountRepository, SeedError};
pub use flaky::FlakyAccountRepository;
