use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key of a team row
///
/// Generated by the store (`BIGSERIAL`); carries no business meaning.
///
/// # Example
/// ```
/// use roster_api::domain::team::value_objects::TeamId;
///
/// let id = TeamId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TeamId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TeamId> for i64 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}
