//! In-memory account repository.
//!
//! Accounts live in a concurrent map keyed by account number for the
//! lifetime of the process. Each entry carries its own lock.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::Mutex;
use tracing::debug;

use savings_core::{AccountRepository, DataAccessError, SavingsAccount, SharedAccount};
use savings_shared::config::SeedAccount;
use savings_shared::{AccountNumber, ValidationError};

/// Error types for building the account store.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A seed entry is not a valid account.
    #[error("Invalid seed account '{number}': {source}")]
    InvalidAccount {
        /// The raw number from the seed entry.
        number: String,
        /// What was wrong with it.
        #[source]
        source: ValidationError,
    },

    /// The same number appears twice.
    #[error("Duplicate seed account '{0}'")]
    Duplicate(AccountNumber),
}

/// Account repository backed by an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<AccountNumber, SharedAccount>,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository preloaded with the given accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed entry is invalid or duplicated.
    pub fn from_seed(seed: &[SeedAccount]) -> Result<Self, SeedError> {
        let repo = Self::new();
        for entry in seed {
            let account = AccountNumber::parse(entry.number.as_str())
                .and_then(|number| SavingsAccount::new(number, entry.balance))
                .map_err(|source| SeedError::InvalidAccount {
                    number: entry.number.clone(),
                    source,
                })?;
            if !repo.insert(account.clone()) {
                return Err(SeedError::Duplicate(account.account_number().clone()));
            }
        }
        debug!(accounts = repo.len(), "Seeded account store");
        Ok(repo)
    }

    /// Adds an account. Returns false if the number is already taken.
    pub fn insert(&self, account: SavingsAccount) -> bool {
        match self.accounts.entry(account.account_number().clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(account)));
                true
            }
        }
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn find_account_by_number(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<SharedAccount>, DataAccessError> {
        Ok(self
            .accounts
            .get(account_number)
            .map(|entry| Arc::clone(entry.value())))
    }
}
