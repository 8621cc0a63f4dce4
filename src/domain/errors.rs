use thiserror::Error;

use super::member::value_objects::MemberId;

/// Errors raised by the Team/Member entity rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Member {0} is already in this team")]
    DuplicateMember(MemberId),

    #[error("Member {0} is not in this team")]
    MemberNotFound(MemberId),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
