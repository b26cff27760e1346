//! Storage contract consumed by the account service.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use savings_shared::AccountNumber;

use super::entity::SavingsAccount;
use crate::data_access::DataAccessError;

/// An account handed out by a repository.
///
/// The lock is held for the duration of a single withdraw, save or read, so
/// operations on the same account never interleave.
pub type SharedAccount = Arc<Mutex<SavingsAccount>>;

/// Repository trait for savings account lookup.
///
/// This trait is implemented by the db crate to provide actual storage.
pub trait AccountRepository: Send + Sync {
    /// Find the account with the given number.
    ///
    /// Failures are reported as `DataAccessError`; transient ones may be retried.
    fn find_account_by_number(
        &self,
        account_number: &AccountNumber,
    ) -> impl Future<Output = Result<Option<SharedAccount>, DataAccessError>> + Send;
}
