use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl RepositoryError {
    pub fn team_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: "Team",
            id: id.into(),
        }
    }

    pub fn member_not_found(id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity: "Member",
            id: id.into(),
        }
    }

    /// Returns true for the `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
