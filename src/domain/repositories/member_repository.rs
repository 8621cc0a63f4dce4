use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::member::{Member, MemberId};
use crate::domain::team::TeamId;

/// Repository trait for the Member entity (owning side)
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a transient member (assigning its id) or update a persistent one.
    ///
    /// Fails with `Integrity` if the member references a team that does not exist.
    async fn save(&self, member: &mut Member) -> RepositoryResult<()>;

    /// Find a member by id
    async fn find_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;

    /// Members referencing a team, ordered by id
    async fn find_by_team(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>>;

    /// Delete a member by id
    async fn delete(&self, id: MemberId) -> RepositoryResult<()>;
}
