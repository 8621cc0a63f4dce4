use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// Surrogate key of a member row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

/// Username value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Must not be empty after trimming
/// - At most 255 characters (the `member.username` column width)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub const MAX_LEN: usize = 255;

    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::member::value_objects::Username;
    ///
    /// let username = Username::new("  kim ").expect("valid username");
    /// assert_eq!(username.as_str(), "kim");
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, DomainError> {
        let username = username.into();
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidUsername(
                "username cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(DomainError::InvalidUsername(format!(
                "username exceeds {} characters",
                Self::MAX_LEN
            )));
        }

        Ok(Username(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
