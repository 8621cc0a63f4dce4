// Row shapes shared by the PostgreSQL adapters

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::base_entity::BaseEntity;
use crate::domain::member::{Member, MemberId, Username};
use crate::domain::repositories::RepositoryError;
use crate::domain::team::TeamId;

pub(crate) const TEAM_COLUMNS: &str =
    "team_id, created_by, created_at, last_modified_by, last_modified_at";

pub(crate) const MEMBER_COLUMNS: &str =
    "member_id, username, team_id, created_by, created_at, last_modified_by, last_modified_at";

/// PostgreSQL SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, FromRow)]
pub(crate) struct TeamRow {
    pub team_id: i64,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl TeamRow {
    pub fn id(&self) -> TeamId {
        TeamId::new(self.team_id)
    }

    pub fn into_base(self) -> BaseEntity {
        BaseEntity::from_persistence(
            self.created_by,
            self.created_at,
            self.last_modified_by,
            self.last_modified_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct MemberRow {
    pub member_id: i64,
    pub username: String,
    pub team_id: Option<i64>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl TryFrom<MemberRow> for Member {
    type Error = RepositoryError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username).map_err(|e| {
            RepositoryError::Integrity(format!("member {} has {}", row.member_id, e))
        })?;

        Ok(Member::from_persistence(
            MemberId::new(row.member_id),
            username,
            row.team_id.map(TeamId::new),
            BaseEntity::from_persistence(
                row.created_by,
                row.created_at,
                row.last_modified_by,
                row.last_modified_at,
            ),
        ))
    }
}

/// Maps foreign-key violations to `Integrity`, everything else to `Database`
pub(crate) fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return RepositoryError::Integrity(db_err.message().to_string());
        }
    }
    RepositoryError::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_row(username: &str) -> MemberRow {
        MemberRow {
            member_id: 4,
            username: username.to_string(),
            team_id: Some(2),
            created_by: Some("system".to_string()),
            created_at: None,
            last_modified_by: None,
            last_modified_at: None,
        }
    }

    #[test]
    fn member_row_converts_to_member() {
        let member = Member::try_from(member_row("kim")).unwrap();

        assert_eq!(member.id(), Some(MemberId::new(4)));
        assert_eq!(member.team_id(), Some(TeamId::new(2)));
        assert_eq!(member.username().as_str(), "kim");
        assert_eq!(member.base().created_by(), Some("system"));
    }

    #[test]
    fn member_row_with_blank_username_is_integrity_error() {
        let err = Member::try_from(member_row("  ")).unwrap_err();
        assert!(matches!(err, RepositoryError::Integrity(_)));
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = map_write_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
