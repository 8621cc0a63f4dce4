use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::DomainError;
use crate::domain::repositories::RepositoryError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::not_found(err.to_string()),
            RepositoryError::Integrity(_) => Self::conflict(err.to_string()),
            RepositoryError::Database(_) | RepositoryError::Migration(_) => {
                tracing::error!(error = %err, "Storage failure");
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateMember(_) => Self::conflict(err.to_string()),
            DomainError::MemberNotFound(_) => Self::not_found(err.to_string()),
            DomainError::InvalidUsername(_) => Self::bad_request(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberId;

    #[test]
    fn repository_errors_map_to_status() {
        let not_found: ApiError = RepositoryError::team_not_found(1).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Team not found: 1");

        let integrity: ApiError = RepositoryError::Integrity("fk".to_string()).into();
        assert_eq!(integrity.status, StatusCode::CONFLICT);

        let database: ApiError = RepositoryError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(database.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_errors_map_to_status() {
        let duplicate: ApiError = DomainError::DuplicateMember(MemberId::new(1)).into();
        assert_eq!(duplicate.status, StatusCode::CONFLICT);

        let missing: ApiError = DomainError::MemberNotFound(MemberId::new(1)).into();
        assert_eq!(missing.status, StatusCode::NOT_FOUND);

        let invalid: ApiError = DomainError::InvalidUsername("empty".to_string()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    }
}
