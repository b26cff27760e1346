//! Infrastructure failures raised by account storage, and their classification.
//!
//! A storage backend reports failures as `DataAccessError`. Each variant is
//! tagged either transient (may succeed on retry) or persistent. Wrapped
//! driver errors are classified by walking their source chain.

use std::error::Error as StdError;

use thiserror::Error;

/// Whether a failure is expected to go away on retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transience {
    /// Likely to succeed if retried, e.g. a timeout.
    Transient,
    /// Not expected to succeed on retry, e.g. a constraint violation.
    Persistent,
}

/// Errors raised by an account store.
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// A query did not complete in time.
    #[error("{0}")]
    QueryTimeout(String),

    /// The store is temporarily unreachable.
    #[error("{0}")]
    ResourceUnavailable(String),

    /// A data integrity constraint was violated.
    #[error("{0}")]
    IntegrityViolation(String),

    /// A lower-level driver error; classified by its source chain.
    #[error("{message}")]
    Driver {
        /// Description of the failed operation.
        message: String,
        /// The underlying error.
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

impl DataAccessError {
    /// Create a query timeout error.
    #[must_use]
    pub fn query_timeout(msg: impl Into<String>) -> Self {
        Self::QueryTimeout(msg.into())
    }

    /// Create an integrity violation error.
    #[must_use]
    pub fn integrity_violation(msg: impl Into<String>) -> Self {
        Self::IntegrityViolation(msg.into())
    }

    /// Wrap a lower-level error.
    #[must_use]
    pub fn driver(
        msg: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self::Driver {
            message: msg.into(),
            source: source.into(),
        }
    }

    /// Returns the tag of this error alone, ignoring its sources.
    #[must_use]
    pub const fn kind(&self) -> Transience {
        match self {
            Self::QueryTimeout(_) | Self::ResourceUnavailable(_) => Transience::Transient,
            Self::IntegrityViolation(_) | Self::Driver { .. } => Transience::Persistent,
        }
    }

    /// Returns true if this error or any of its sources is transient.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        is_transient(self)
    }
}

/// Returns true iff any error in the chain starting at `error` is a
/// transient `DataAccessError`.
pub fn is_transient(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if err
            .downcast_ref::<DataAccessError>()
            .is_some_and(|e| e.kind() == Transience::Transient)
        {
            return true;
        }
        current = err.source();
    }
    false
}
