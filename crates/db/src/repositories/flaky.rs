//! Failure injection for account repositories.
//!
//! Wraps a repository so that a configurable share of lookups fail, which
//! exercises the service's retry and error translation paths end to end.

use rand::Rng;
use tracing::warn;

use savings_core::{AccountRepository, DataAccessError, SharedAccount};
use savings_shared::AccountNumber;
use savings_shared::config::{AccountsConfig, FailureKind};

/// Repository decorator that fails lookups at random.
#[derive(Debug)]
pub struct FlakyAccountRepository<R> {
    inner: R,
    failure_rate: f64,
    failure_kind: FailureKind,
}

impl<R: AccountRepository> FlakyAccountRepository<R> {
    /// Wraps `inner`, failing each lookup with probability `failure_rate`.
    ///
    /// Rates outside `0.0..=1.0` (and NaN) disable injection.
    #[must_use]
    pub fn new(inner: R, failure_rate: f64, failure_kind: FailureKind) -> Self {
        let failure_rate = if (0.0..=1.0).contains(&failure_rate) {
            failure_rate
        } else {
            0.0
        };
        Self {
            inner,
            failure_rate,
            failure_kind,
        }
    }

    /// Wraps `inner` using the `accounts` configuration section.
    #[must_use]
    pub fn from_config(inner: R, config: &AccountsConfig) -> Self {
        Self::new(inner, config.failure_rate, config.failure_kind)
    }

    /// The effective failure probability.
    #[must_use]
    pub const fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn injected_failure(&self) -> DataAccessError {
        match self.failure_kind {
            FailureKind::Transient => DataAccessError::query_timeout("Database query timed out!"),
            FailureKind::Persistent => {
                DataAccessError::integrity_violation("Database constraint failed!")
            }
        }
    }
}

impl<R: AccountRepository> AccountRepository for FlakyAccountRepository<R> {
    async fn find_account_by_number(
        &self,
        account_number: &AccountNumber,
    ) -> Result<Option<SharedAccount>, DataAccessError> {
        let fail = rand::rng().random_bool(self.failure_rate);
        if fail {
            let err = self.injected_failure();
            warn!(account_number = %account_number, error = %err, "Injected repository failure");
            return Err(err);
        }
        self.inner.find_account_by_number(account_number).await
    }
}
