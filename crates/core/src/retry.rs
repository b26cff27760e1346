//! Bounded retry for fallible storage calls.
//!
//! The policy fixes how many attempts an operation gets; the caller supplies
//! the predicate that decides which failures are worth another attempt.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

/// Configuration for retrying an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `max_attempts` attempts in total (at least one).
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Duration::ZERO,
        }
    }

    /// Sets the pause between attempts.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Creates a policy from the `retry` configuration section.
    #[must_use]
    pub fn from_config(config: &savings_shared::config::RetryConfig) -> Self {
        Self::new(config.max_attempts).with_backoff(Duration::from_millis(config.backoff_ms))
    }

    /// Total attempts, including the first.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause between attempts.
    #[must_use]
    pub const fn backoff(&self) -> Duration {
        self.backoff
    }

    /// Runs `operation` until it succeeds, fails with an error that
    /// `is_retryable` rejects, or the attempts are used up.
    ///
    /// The last error is returned unchanged.
    pub async fn run<T, E, F, Fut, P>(&self, is_retryable: P, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if !is_retryable(&err) => return Err(err),
                Err(err) if attempt >= self.max_attempts => {
                    error!(attempt, error = %err, "Retry attempts exhausted");
                    return Err(err);
                }
                Err(err) => {
                    warn!(attempt, max_attempts = self.max_attempts, error = %err, "Retrying after transient failure");
                    if !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}
