//! Savings account number value object.
//!
//! An account number has the shape `D-DDD-DDD-DDD` where every `D` is a
//! single ASCII digit. It crosses system boundaries as a bare string.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Digit-group lengths of a well-formed account number.
const GROUPS: [usize; 4] = [1, 3, 3, 3];

/// A validated savings account number.
///
/// Equality and hashing are by the underlying string. A value of this type
/// always matches `^\d-\d{3}-\d{3}-\d{3}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Parses an account number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if `raw` is not `D-DDD-DDD-DDD`.
    pub fn parse(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !is_well_formed(&raw) {
            return Err(ValidationError::InvalidFormat(raw));
        }
        Ok(Self(raw))
    }

    /// Parses an optional account number, treating `None` as missing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingAccountNumber` for `None`, or
    /// `ValidationError::InvalidFormat` for a malformed value.
    pub fn parse_required(raw: Option<String>) -> ValidationResult<Self> {
        raw.map_or(Err(ValidationError::MissingAccountNumber), Self::parse)
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_well_formed(raw: &str) -> bool {
    let mut groups = raw.split('-');
    let shaped = GROUPS.iter().all(|&len| {
        groups
            .next()
            .is_some_and(|group| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()))
    });
    shaped && groups.next().is_none()
}

impl TryFrom<String> for AccountNumber {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<AccountNumber> for String {
    fn from(number: AccountNumber) -> Self {
        number.0
    }
}

impl std::str::FromStr for AccountNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
