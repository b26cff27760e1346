//! Savings account service.
//!
//! Looks accounts up through the repository, retrying transient storage
//! failures, and applies the requested operation under the account's lock.

use std::sync::Arc;

use tracing::debug;

use savings_shared::AccountNumber;

use super::error::AccountError;
use super::repository::{AccountRepository, SharedAccount};
use super::types::{AccountBalance, SaveMoney, WithdrawMoney};
use crate::data_access::DataAccessError;
use crate::retry::RetryPolicy;

/// Savings account service.
pub struct AccountService<R: AccountRepository> {
    repo: Arc<R>,
    retry: RetryPolicy,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service with the default retry policy.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy used for repository lookups.
    #[must_use]
    pub const fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Withdraws money from the requested account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The account balance does not cover the withdrawal
    /// - The repository keeps failing
    pub async fn withdraw_money(
        &self,
        withdrawal: &WithdrawMoney,
    ) -> Result<AccountBalance, AccountError> {
        let account = self.find_account(withdrawal.account_number()).await?;
        let mut account = account.lock().await;
        account.withdraw_money(withdrawal.amount())
    }

    /// Saves money into the requested account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The repository keeps failing
    pub async fn save_money(&self, savings: &SaveMoney) -> Result<AccountBalance, AccountError> {
        let account = self.find_account(savings.account_number()).await?;
        let mut account = account.lock().await;
        account.save_money(savings.amount())
    }

    /// Retrieves the account's current balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or the repository keeps failing.
    pub async fn current_balance(
        &self,
        account_number: &AccountNumber,
    ) -> Result<AccountBalance, AccountError> {
        let account = self.find_account(account_number).await?;
        let account = account.lock().await;
        Ok(account.current_balance())
    }

    async fn find_account(
        &self,
        account_number: &AccountNumber,
    ) -> Result<SharedAccount, AccountError> {
        debug!(account_number = %account_number, "Looking up account");

        self.retry
            .run(DataAccessError::is_transient, || {
                self.repo.find_account_by_number(account_number)
            })
            .await
            .map_err(|source| AccountError::operation_failed(account_number.clone(), source))?
            .ok_or_else(|| AccountError::not_found(account_number.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::error::Error as _;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tokio::sync::Mutex;

    use crate::account::entity::SavingsAccount;

    /// Repository that fails with scripted errors before answering.
    struct ScriptedRepository {
        account: Option<SharedAccount>,
        failures: StdMutex<VecDeque<DataAccessError>>,
        calls: AtomicU32,
    }

    impl ScriptedRepository {
        fn with_account(number: &str, balance: Decimal) -> Self {
            let number = AccountNumber::parse(number).unwrap();
            let account = SavingsAccount::new(number, balance).unwrap();
            Self {
                account: Some(Arc::new(Mutex::new(account))),
                failures: StdMutex::new(VecDeque::new()),
                calls: AtomicU32::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                account: None,
                failures: StdMutex::new(VecDeque::new()),
                calls: AtomicU32::new(0),
            }
        }

        fn failing_with(self, failures: impl IntoIterator<Item = DataAccessError>) -> Self {
            self.failures.lock().unwrap().extend(failures);
            self
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AccountRepository for ScriptedRepository {
        async fn find_account_by_number(
            &self,
            account_number: &AccountNumber,
        ) -> Result<Option<SharedAccount>, DataAccessError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let failure = self.failures.lock().unwrap().pop_front();
            if let Some(err) = failure {
                return Err(err);
            }
            let Some(account) = &self.account else {
                return Ok(None);
            };
            if account.lock().await.account_number() == account_number {
                Ok(Some(Arc::clone(account)))
            } else {
                Ok(None)
            }
        }
    }

    fn number(raw: &str) -> AccountNumber {
        AccountNumber::parse(raw).unwrap()
    }

    fn timeout() -> DataAccessError {
        DataAccessError::query_timeout("Database query timed out!")
    }

    #[tokio::test]
    async fn test_reference_scenario() {
        let repo = Arc::new(ScriptedRepository::with_account("1-234-567-890", Decimal::ZERO));
        let service = AccountService::new(Arc::clone(&repo));
        let n = number("1-234-567-890");

        let save = |amount| SaveMoney::new(n.clone(), amount).unwrap();
        let withdraw = |amount| WithdrawMoney::new(n.clone(), amount).unwrap();

        assert_eq!(service.save_money(&save(dec!(100))).await.unwrap().balance(), dec!(100));
        assert_eq!(service.save_money(&save(dec!(75))).await.unwrap().balance(), dec!(175));
        assert_eq!(
            service.withdraw_money(&withdraw(dec!(50))).await.unwrap().balance(),
            dec!(125)
        );

        let err = service.withdraw_money(&withdraw(dec!(200))).await.unwrap_err();
        assert!(matches!(
            err,
            AccountError::InsufficientFunds { balance, withdrawal, .. }
                if balance == dec!(125) && withdrawal == dec!(200)
        ));
        assert_eq!(err.shortfall(), Some(dec!(75)));
        assert_eq!(service.current_balance(&n).await.unwrap().balance(), dec!(125));
    }

    #[tokio::test]
    async fn test_unknown_account() {
        let service = AccountService::new(Arc::new(ScriptedRepository::empty()));
        let n = number("9-999-999-999");
        let withdrawal = WithdrawMoney::new(n.clone(), dec!(10)).unwrap();

        let err = service.withdraw_money(&withdrawal).await.unwrap_err();
        assert!(matches!(&err, AccountError::NotFound(missing) if *missing == n));
        assert_eq!(err.account_number(), Some(&n));

        assert!(matches!(
            service.current_balance(&n).await,
            Err(AccountError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(100))
                .failing_with([timeout(), timeout()]),
        );
        let service = AccountService::new(Arc::clone(&repo));
        let withdrawal = WithdrawMoney::new(number("1-234-567-890"), dec!(40)).unwrap();

        let balance = service.withdraw_money(&withdrawal).await.unwrap();
        assert_eq!(balance.balance(), dec!(60));
        assert_eq!(repo.calls(), 3);
    }

    #[tokio::test]
    async fn test_transient_failures_exhaust_attempts() {
        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(100))
                .failing_with([timeout(), timeout(), timeout()]),
        );
        let service = AccountService::new(Arc::clone(&repo));
        let withdrawal = WithdrawMoney::new(number("1-234-567-890"), dec!(40)).unwrap();

        let err = service.withdraw_money(&withdrawal).await.unwrap_err();
        assert!(matches!(err, AccountError::OperationFailed { .. }));
        assert!(err.is_transient());
        assert_eq!(repo.calls(), 3);
        assert_eq!(
            err.source().unwrap().to_string(),
            "Database query timed out!"
        );
    }

    #[tokio::test]
    async fn test_persistent_failure_is_not_retried() {
        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(100))
                .failing_with([DataAccessError::integrity_violation("Database constraint failed!")]),
        );
        let service = AccountService::new(Arc::clone(&repo));
        let withdrawal = WithdrawMoney::new(number("1-234-567-890"), dec!(40)).unwrap();

        let err = service.withdraw_money(&withdrawal).await.unwrap_err();
        assert!(matches!(
            &err,
            AccountError::OperationFailed { account_number, .. }
                if account_number.as_str() == "1-234-567-890"
        ));
        assert!(!err.is_transient());
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_applies_to_save_and_balance() {
        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(1)).failing_with([timeout()]),
        );
        let service = AccountService::new(Arc::clone(&repo));
        let n = number("1-234-567-890");

        let savings = SaveMoney::new(n.clone(), dec!(2)).unwrap();
        assert_eq!(service.save_money(&savings).await.unwrap().balance(), dec!(3));
        assert_eq!(repo.calls(), 2);

        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(1)).failing_with([timeout()]),
        );
        let service = AccountService::new(Arc::clone(&repo));
        assert_eq!(service.current_balance(&n).await.unwrap().balance(), dec!(1));
        assert_eq!(repo.calls(), 2);
    }

    #[tokio::test]
    async fn test_custom_retry_policy() {
        let repo = Arc::new(
            ScriptedRepository::with_account("1-234-567-890", dec!(1)).failing_with([timeout()]),
        );
        let service =
            AccountService::new(Arc::clone(&repo)).with_retry_policy(RetryPolicy::new(1));

        let err = service
            .current_balance(&number("1-234-567-890"))
            .await
            .unwrap_err();
        assert!(err.is_transient());
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_withdrawals_never_overdraw() {
        let repo = Arc::new(ScriptedRepository::with_account("1-234-567-890", dec!(100)));
        let service = Arc::new(AccountService::new(repo));
        let withdrawal = WithdrawMoney::new(number("1-234-567-890"), dec!(30)).unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let service = Arc::clone(&service);
                let withdrawal = withdrawal.clone();
                tokio::spawn(async move { service.withdraw_money(&withdrawal).await })
            })
            .collect();

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 3);
        let balance = service
            .current_balance(&number("1-234-567-890"))
            .await
            .unwrap();
        assert_eq!(balance.balance(), dec!(10));
    }
}
