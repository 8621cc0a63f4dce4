use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::base_entity::BaseEntity;
use crate::domain::member::{Member, MemberId};
use crate::domain::repositories::{
    MemberRepository, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::{Team, TeamId};

#[derive(Debug)]
struct State {
    teams: BTreeMap<TeamId, BaseEntity>,
    members: BTreeMap<MemberId, Member>,
    next_team_id: i64,
    next_member_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            teams: BTreeMap::new(),
            members: BTreeMap::new(),
            next_team_id: 1,
            next_member_id: 1,
        }
    }
}

impl State {
    fn members_of(&self, team_id: TeamId) -> Vec<Member> {
        self.members
            .values()
            .filter(|m| m.team_id() == Some(team_id))
            .cloned()
            .collect()
    }
}

/// In-process store implementing both repository ports
///
/// Mirrors the PostgreSQL schema: sequential keys, a foreign-key check on
/// `Member::team_id`, and `ON DELETE SET NULL` when a team goes away.
#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<State>,
    auditor: String,
}

impl InMemoryStore {
    pub fn new(auditor: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            auditor: auditor.into(),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &mut Team) -> RepositoryResult<()> {
        let now = Utc::now();
        let mut state = self.state();

        match team.id() {
            None => {
                let id = TeamId::new(state.next_team_id);
                state.next_team_id += 1;

                team.base_mut().mark_created(&self.auditor, now);
                state.teams.insert(id, team.base().clone());
                team.assign_id(id);
            }
            Some(id) => {
                let stored = state
                    .teams
                    .get_mut(&id)
                    .ok_or_else(|| RepositoryError::team_not_found(id))?;

                team.base_mut().mark_modified(&self.auditor, now);
                *stored = team.base().clone();
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        let state = self.state();

        Ok(state
            .teams
            .get(&id)
            .map(|base| Team::from_persistence(id, state.members_of(id), base.clone())))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let state = self.state();

        Ok(state
            .teams
            .iter()
            .map(|(id, base)| Team::from_persistence(*id, state.members_of(*id), base.clone()))
            .collect())
    }

    async fn delete(&self, id: TeamId) -> RepositoryResult<()> {
        let mut state = self.state();

        if state.teams.remove(&id).is_none() {
            return Err(RepositoryError::team_not_found(id));
        }

        for member in state.members.values_mut() {
            if member.team_id() == Some(id) {
                member.set_team_id(None);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn save(&self, member: &mut Member) -> RepositoryResult<()> {
        let now = Utc::now();
        let mut state = self.state();

        if let Some(team_id) = member.team_id() {
            if !state.teams.contains_key(&team_id) {
                return Err(RepositoryError::Integrity(format!(
                    "team {} does not exist",
                    team_id
                )));
            }
        }

        match member.id() {
            None => {
                let id = MemberId::new(state.next_member_id);
                state.next_member_id += 1;

                member.base_mut().mark_created(&self.auditor, now);
                member.set_id(Some(id));
                state.members.insert(id, member.clone());
            }
            Some(id) => {
                let stored = state
                    .members
                    .get_mut(&id)
                    .ok_or_else(|| RepositoryError::member_not_found(id))?;

                member.base_mut().mark_modified(&self.auditor, now);
                *stored = member.clone();
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        Ok(self.state().members.get(&id).cloned())
    }

    async fn find_by_team(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>> {
        Ok(self.state().members_of(team_id))
    }

    async fn delete(&self, id: MemberId) -> RepositoryResult<()> {
        self.state()
            .members
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::member_not_found(id))
    }
}
