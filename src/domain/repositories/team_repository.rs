use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::team::{Team, TeamId};

/// Repository trait for the Team entity
///
/// Loading a team resolves the inverse side eagerly: its member list is
/// filled from the member rows that reference it. Saving a team writes
/// only the team row.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a transient team (assigning its id) or update a persistent one
    async fn save(&self, team: &mut Team) -> RepositoryResult<()>;

    /// Find a team by its id, members included
    async fn find_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;

    /// All teams ordered by id, members included
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Delete a team; its members stay with their reference cleared
    async fn delete(&self, id: TeamId) -> RepositoryResult<()>;
}
