use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit fields shared by every mapped entity
///
/// The persistence layer stamps these on insert and update; entity code
/// never writes them on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEntity {
    created_by: Option<String>,
    created_at: Option<DateTime<Utc>>,
    last_modified_by: Option<String>,
    last_modified_at: Option<DateTime<Utc>>,
}

impl BaseEntity {
    /// Stamps both the creation and modification pairs
    pub fn mark_created(&mut self, by: &str, at: DateTime<Utc>) {
        self.created_by = Some(by.to_string());
        self.created_at = Some(at);
        self.mark_modified(by, at);
    }

    /// Stamps only the modification pair
    pub fn mark_modified(&mut self, by: &str, at: DateTime<Utc>) {
        self.last_modified_by = Some(by.to_string());
        self.last_modified_at = Some(at);
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        self.last_modified_at
    }

    /// Rebuilds the audit block from stored columns
    pub fn from_persistence(
        created_by: Option<String>,
        created_at: Option<DateTime<Utc>>,
        last_modified_by: Option<String>,
        last_modified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            created_by,
            created_at,
            last_modified_by,
            last_modified_at,
        }
    }
}
