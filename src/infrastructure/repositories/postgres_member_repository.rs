use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::rows::{map_write_error, MemberRow, MEMBER_COLUMNS};
use crate::domain::member::{Member, MemberId};
use crate::domain::repositories::{MemberRepository, RepositoryError, RepositoryResult};
use crate::domain::team::TeamId;

/// PostgreSQL implementation of MemberRepository
///
/// The member row carries the `team_id` foreign key, so this is where the
/// relationship is actually written.
pub struct PostgresMemberRepository {
    pool: PgPool,
    auditor: String,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository
    pub fn new(pool: PgPool, auditor: impl Into<String>) -> Self {
        Self {
            pool,
            auditor: auditor.into(),
        }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &mut Member) -> RepositoryResult<()> {
        let now = Utc::now();

        // Stamp a copy; the entity only changes once the write succeeds
        let mut base = member.base().clone();

        match member.id() {
            None => {
                base.mark_created(&self.auditor, now);

                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO member (
                        username, team_id,
                        created_by, created_at, last_modified_by, last_modified_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING member_id
                    "#,
                )
                .bind(member.username().as_str())
                .bind(member.team_id())
                .bind(base.created_by())
                .bind(base.created_at())
                .bind(base.last_modified_by())
                .bind(base.last_modified_at())
                .fetch_one(&self.pool)
                .await
                .map_err(map_write_error)?;

                *member.base_mut() = base;
                member.set_id(Some(MemberId::new(id)));
                tracing::debug!(member_id = id, "Inserted member");
            }
            Some(id) => {
                base.mark_modified(&self.auditor, now);

                let result = sqlx::query(
                    r#"
                    UPDATE member
                    SET username = $1, team_id = $2,
                        last_modified_by = $3, last_modified_at = $4
                    WHERE member_id = $5
                    "#,
                )
                .bind(member.username().as_str())
                .bind(member.team_id())
                .bind(base.last_modified_by())
                .bind(base.last_modified_at())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_write_error)?;

                if result.rows_affected() == 0 {
                    return Err(RepositoryError::member_not_found(id));
                }

                *member.base_mut() = base;
                tracing::debug!(member_id = id.value(), "Updated member");
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let sql = format!("SELECT {} FROM member WHERE member_id = $1", MEMBER_COLUMNS);
        let row: Option<MemberRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Member::try_from).transpose()
    }

    async fn find_by_team(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>> {
        let sql = format!(
            "SELECT {} FROM member WHERE team_id = $1 ORDER BY member_id",
            MEMBER_COLUMNS
        );
        let rows: Vec<MemberRow> = sqlx::query_as(&sql)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn delete(&self, id: MemberId) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM member WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::member_not_found(id));
        }

        tracing::debug!(member_id = id.value(), "Deleted member");
        Ok(())
    }
}
